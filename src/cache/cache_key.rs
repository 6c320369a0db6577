//! Deterministic cache keys derived from style descriptions.
//!
//! A key is the resource kind tag followed by every field that shapes the
//! resource's pixels. Each field is written as `<byte length>:<value>`, so a
//! field containing the delimiter can never shift into its neighbour.

use std::fmt;

use crate::core::config::KEY_DELIMITER;
use crate::core::style::LabelStyle;

/// Drawable kinds that live in the resource cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    LabelText,
    FlatColor,
}

impl ResourceKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ResourceKind::LabelText => "EDGE_LABEL_TEXT",
            ResourceKind::FlatColor => "FLAT_COLOR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn compose<I, S>(kind: ResourceKind, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = kind.tag().to_string();
        for field in fields {
            let field = field.as_ref();
            key.push_str(KEY_DELIMITER);
            key.push_str(&field.len().to_string());
            key.push(':');
            key.push_str(field);
        }
        CacheKey(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key for the rasterized label text: type, font family, font size, content.
///
/// Color, background and padding are applied on the sprite and stay out of the key.
pub fn label_text_key(label: &LabelStyle) -> CacheKey {
    CacheKey::compose(
        ResourceKind::LabelText,
        [
            label.text_type.as_str(),
            label.font_family.as_str(),
            label.font_size.to_string().as_str(),
            label.content.as_str(),
        ],
    )
}

/// Key for the shared flat texture behind lines and label backgrounds.
pub fn flat_color_key() -> CacheKey {
    CacheKey::compose(ResourceKind::FlatColor, std::iter::empty::<&str>())
}
