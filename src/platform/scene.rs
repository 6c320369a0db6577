/// Scene handles the host attaches into its own display tree.

use std::rc::Rc;

use crate::core::types::Vec2;
use crate::platform::texture::Texture;

/// A textured quad with a 2D transform, tint and visibility.
///
/// `width`/`height` are the displayed size; the texture is stretched to fit.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub position: Vec2,
    /// Normalized point of the texture that sits on `position` and rotates in place.
    pub anchor: Vec2,
    pub rotation: f64,
    pub width: f64,
    pub height: f64,
    pub tint: u32,
    pub alpha: f64,
    pub visible: bool,
    pub interactive: bool,
    texture: Option<Rc<Texture>>,
}

impl Sprite {
    pub fn new(anchor: (f64, f64)) -> Self {
        Self {
            position: Vec2::ZERO,
            anchor: Vec2::new(anchor.0, anchor.1),
            rotation: 0.0,
            width: 0.0,
            height: 0.0,
            tint: 0xFFFFFF,
            alpha: 1.0,
            visible: true,
            interactive: false,
            texture: None,
        }
    }

    pub fn texture(&self) -> Option<&Rc<Texture>> {
        self.texture.as_ref()
    }

    /// Display `texture` at its natural size.
    pub fn set_texture(&mut self, texture: Rc<Texture>) {
        self.width = texture.width();
        self.height = texture.height();
        self.texture = Some(texture);
    }

    /// Display `texture` stretched to whatever size the caller sets.
    pub fn set_texture_keep_size(&mut self, texture: Rc<Texture>) {
        self.texture = Some(texture);
    }

    pub fn set_color(&mut self, (tint, alpha): (u32, f64)) {
        self.tint = tint;
        self.alpha = alpha;
    }

    /// Top-left corner in parent space, ignoring rotation.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(
            self.position.x - self.anchor.x * self.width,
            self.position.y - self.anchor.y * self.height,
        )
    }
}
