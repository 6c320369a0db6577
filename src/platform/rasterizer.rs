/// Text rasterization interface and a headless implementation.

use crate::core::config;
use crate::core::error::{EdgeError, Result};
use crate::core::style::{FontDescription, TextType};
use crate::platform::texture::{Texture, TextureSource};

pub trait Rasterizer {
    /// Render `content` with `font` into a texture of known size.
    fn rasterize_text(
        &self,
        text_type: TextType,
        content: &str,
        font: &FontDescription<'_>,
    ) -> Result<Texture>;

    /// The reusable flat texture for tinted rectangles.
    fn flat(&self) -> Texture {
        Texture::flat()
    }
}

/// Font checks every backend applies before shaping anything.
pub fn validate_font(font: &FontDescription<'_>) -> Result<()> {
    if !font.size.is_finite() || font.size <= 0.0 {
        log::warn!("Rejecting font size {}", font.size);
        return Err(EdgeError::InvalidFontSize { size: font.size });
    }
    if font.family.trim().is_empty() {
        log::warn!("Rejecting empty font family");
        return Err(EdgeError::EmptyFontFamily);
    }
    Ok(())
}

/// Estimates text extents from fixed glyph ratios without producing pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsRasterizer;

impl MetricsRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for MetricsRasterizer {
    fn rasterize_text(
        &self,
        text_type: TextType,
        content: &str,
        font: &FontDescription<'_>,
    ) -> Result<Texture> {
        validate_font(font)?;

        let advance = match text_type {
            TextType::Text => config::GLYPH_ADVANCE_RATIO,
            TextType::BitmapText => config::BITMAP_GLYPH_ADVANCE_RATIO,
        };
        let lines: Vec<&str> = content.lines().collect();
        let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let line_count = lines.len().max(1);

        let width = (widest as f64 * font.size * advance).ceil();
        let height = (line_count as f64 * font.size * config::LINE_HEIGHT_RATIO).ceil();
        Ok(Texture::new(width, height, TextureSource::Measured))
    }
}
