/// Drawable resources shared between sprites.

/// Pixel content behind a texture.
#[derive(Debug, Clone, PartialEq)]
pub enum TextureSource {
    /// 1x1 white pixel, stretched and tinted by the sprite.
    Flat,
    /// Dimensions only; produced by headless rasterizers.
    Measured,
    /// Premultiplied ARGB32 rows of `stride` bytes.
    Pixels { stride: usize, data: Vec<u8> },
}

/// An immutable rasterized artifact with a fixed size.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    width: f64,
    height: f64,
    source: TextureSource,
}

impl Texture {
    pub fn new(width: f64, height: f64, source: TextureSource) -> Self {
        Self {
            width,
            height,
            source,
        }
    }

    pub fn flat() -> Self {
        Self::new(1.0, 1.0, TextureSource::Flat)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn source(&self) -> &TextureSource {
        &self.source
    }
}
