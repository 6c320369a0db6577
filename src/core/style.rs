/// Style descriptions supplied by the host's styling layer.

use serde::{Deserialize, Serialize};

use super::config;
use super::types::Color;

/// How label text is turned into a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextType {
    #[default]
    Text,
    BitmapText,
}

impl TextType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextType::Text => "text",
            TextType::BitmapText => "bitmap-text",
        }
    }
}

/// Font family and size used to rasterize label text.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescription<'a> {
    pub family: &'a str,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelStyle {
    #[serde(rename = "type")]
    pub text_type: TextType,
    pub content: String,
    pub font_family: String,
    pub font_size: f64,
    pub color: Color,
    pub background_color: Color,
    pub padding: f64,
}

impl LabelStyle {
    pub fn font(&self) -> FontDescription<'_> {
        FontDescription {
            family: &self.font_family,
            size: self.font_size,
        }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            text_type: TextType::Text,
            content: String::new(),
            font_family: config::LABEL_FONT_FAMILY.to_string(),
            font_size: config::LABEL_FONT_SIZE,
            color: Color::from_hex(config::LABEL_TEXT_COLOR, 1.0),
            background_color: Color::from_hex(config::LABEL_BG_COLOR, config::LABEL_BG_ALPHA),
            padding: config::LABEL_PADDING,
        }
    }
}

/// Full look of one edge: its line and its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeStyle {
    pub width: f64,
    pub color: Color,
    pub label: LabelStyle,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            width: config::EDGE_WIDTH,
            color: Color::from_hex(config::EDGE_COLOR, 1.0),
            label: LabelStyle::default(),
        }
    }
}
