/// Edge line sprite: a tinted flat quad stretched from source to target.

use std::rc::Rc;

use crate::core::config;
use crate::core::style::EdgeStyle;
use crate::graph::edge_geometry::EdgeTransform;
use crate::graph::visibility::{is_visible_at, ZoomThreshold};
use crate::platform::scene::Sprite;
use crate::platform::texture::Texture;

#[derive(Debug, Clone)]
pub struct EdgeBody {
    line: Sprite,
    intrinsic_visible: bool,
    styled: bool,
    zoom_step: Option<i32>,
}

impl EdgeBody {
    pub fn new() -> Self {
        let mut line = Sprite::new(config::BODY_ANCHOR);
        line.interactive = true;
        line.visible = false;
        Self {
            line,
            intrinsic_visible: true,
            styled: false,
            zoom_step: None,
        }
    }

    pub fn line(&self) -> &Sprite {
        &self.line
    }

    pub fn is_interactive(&self) -> bool {
        self.line.interactive
    }

    /// Pin the line's anchor to the source and stretch it over the edge length.
    pub fn apply_transform(&mut self, transform: &EdgeTransform) {
        self.line.position = transform.source;
        self.line.rotation = transform.rotation;
        self.line.height = transform.length;
    }

    pub fn apply_style(&mut self, style: &EdgeStyle, flat: Rc<Texture>) {
        self.line.set_texture_keep_size(flat);
        self.line.width = style.width;
        self.line.set_color(style.color.to_tint());
        self.styled = true;
        self.refresh_visibility();
    }

    pub fn set_intrinsic_visible(&mut self, visible: bool) {
        self.intrinsic_visible = visible;
        self.refresh_visibility();
    }

    pub fn update_visibility(&mut self, zoom_step: i32) {
        self.zoom_step = Some(zoom_step);
        self.refresh_visibility();
    }

    fn refresh_visibility(&mut self) {
        let intrinsic = self.intrinsic_visible && self.styled;
        self.line.visible = match self.zoom_step {
            Some(step) => is_visible_at(intrinsic, ZoomThreshold::BODY, step),
            None => intrinsic,
        };
    }
}

impl Default for EdgeBody {
    fn default() -> Self {
        Self::new()
    }
}
