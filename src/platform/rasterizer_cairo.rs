/// Cairo-based text rasterizer.

use crate::core::error::Result;
use crate::core::style::{FontDescription, TextType};
use crate::platform::rasterizer::{validate_font, Rasterizer};
use crate::platform::texture::{Texture, TextureSource};
use cairo::{Context, Format, ImageSurface};

/// Renders label text into white ARGB32 images; color comes from the sprite tint.
#[derive(Debug, Clone, Copy, Default)]
pub struct CairoRasterizer;

impl CairoRasterizer {
    pub fn new() -> Self {
        Self
    }

    fn select_font(cr: &Context, text_type: TextType, font: &FontDescription<'_>) {
        // Bitmap text uses the monospace face, like a glyph atlas would.
        let family = match text_type {
            TextType::Text => font.family,
            TextType::BitmapText => "monospace",
        };
        cr.select_font_face(family, cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        cr.set_font_size(font.size);
    }
}

impl Rasterizer for CairoRasterizer {
    fn rasterize_text(
        &self,
        text_type: TextType,
        content: &str,
        font: &FontDescription<'_>,
    ) -> Result<Texture> {
        validate_font(font)?;

        // Measure on a scratch surface first.
        let (width, line_height, ascent) = {
            let scratch = ImageSurface::create(Format::ARgb32, 1, 1)?;
            let cr = Context::new(&scratch)?;
            Self::select_font(&cr, text_type, font);
            let fe = cr.font_extents()?;
            let mut widest: f64 = 0.0;
            for line in content.lines() {
                widest = widest.max(cr.text_extents(line)?.x_advance());
            }
            (widest.ceil(), fe.height().ceil(), fe.ascent())
        };

        let line_count = content.lines().count().max(1);
        let height = line_height * line_count as f64;
        let mut surface =
            ImageSurface::create(Format::ARgb32, width.max(1.0) as i32, height.max(1.0) as i32)?;
        {
            let cr = Context::new(&surface)?;
            Self::select_font(&cr, text_type, font);
            cr.set_source_rgba(1.0, 1.0, 1.0, 1.0);
            for (i, line) in content.lines().enumerate() {
                cr.move_to(0.0, ascent + line_height * i as f64);
                cr.show_text(line)?;
            }
        }
        surface.flush();

        let stride = surface.stride() as usize;
        let data = surface.data()?.to_vec();
        Ok(Texture::new(width, height, TextureSource::Pixels { stride, data }))
    }
}
