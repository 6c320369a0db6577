/// Edge label: rasterized text over a padded background box.
///
/// The label sits on the edge midpoint and never rotates with the edge.

use std::rc::Rc;

use crate::core::config;
use crate::core::style::LabelStyle;
use crate::core::types::Vec2;
use crate::graph::visibility::{is_visible_at, ZoomThreshold};
use crate::platform::scene::Sprite;
use crate::platform::texture::Texture;

#[derive(Debug, Clone)]
pub struct EdgeLabel {
    background: Sprite,
    text: Sprite,
    position: Vec2,
    intrinsic_visible: bool,
    has_content: bool,
    zoom_step: Option<i32>,
}

impl EdgeLabel {
    pub fn new() -> Self {
        let mut background = Sprite::new(config::LABEL_ANCHOR);
        let mut text = Sprite::new(config::LABEL_ANCHOR);
        background.interactive = false;
        text.interactive = false;
        background.visible = false;
        text.visible = false;
        Self {
            background,
            text,
            position: Vec2::ZERO,
            intrinsic_visible: true,
            has_content: false,
            zoom_step: None,
        }
    }

    pub fn background(&self) -> &Sprite {
        &self.background
    }

    pub fn text(&self) -> &Sprite {
        &self.text
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.text.visible
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.background.position = position;
        self.text.position = position;
    }

    /// Attach the text texture and resize the background around it.
    pub fn apply_style(
        &mut self,
        label: &LabelStyle,
        text_texture: Rc<Texture>,
        flat: Rc<Texture>,
    ) {
        self.text.set_texture(text_texture);
        self.text.set_color(label.color.to_tint());

        let padding = label.padding.max(0.0);
        self.background.set_texture_keep_size(flat);
        self.background.width = self.text.width + padding * 2.0;
        self.background.height = self.text.height + padding * 2.0;
        self.background.set_color(label.background_color.to_tint());

        self.has_content = !label.content.is_empty();
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
        let intrinsic = self.intrinsic_visible && self.has_content;
        let visible = match self.zoom_step {
            Some(step) => is_visible_at(intrinsic, ZoomThreshold::LABEL, step),
            None => intrinsic,
        };
        self.background.visible = visible;
        self.text.visible = visible;
    }
}

impl Default for EdgeLabel {
    fn default() -> Self {
        Self::new()
    }
}
