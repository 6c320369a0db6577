//! Edge view: owns an edge's line and label sprites and its pointer events.
//!
//! The host drives it once per frame with endpoint positions, a style and a
//! zoom step, then attaches [`EdgeView::body`] and [`EdgeView::label`] into its
//! own scene. Textures come from a [`TextureCache`] the host passes in, so
//! edges with identical labels display the very same texture.

use crate::cache::cache_key::{flat_color_key, label_text_key};
use crate::cache::resource_cache::TextureCache;
use crate::core::error::Result;
use crate::core::style::EdgeStyle;
use crate::core::types::{MouseEvent, Vec2};
use crate::graph::edge_body::EdgeBody;
use crate::graph::edge_geometry::EdgeTransform;
use crate::graph::edge_label::EdgeLabel;
use crate::graph::events::{EdgeEventKind, EdgeEvents, HandlerId, InteractionKind};
use crate::platform::rasterizer::Rasterizer;

#[derive(Debug)]
pub struct EdgeView {
    body: EdgeBody,
    label: EdgeLabel,
    events: EdgeEvents,
    endpoints: Option<(Vec2, Vec2)>,
    transform: Option<EdgeTransform>,
    pub hovered: bool,
}

impl EdgeView {
    pub fn new() -> Self {
        Self {
            body: EdgeBody::new(),
            label: EdgeLabel::new(),
            events: EdgeEvents::new(),
            endpoints: None,
            transform: None,
            hovered: false,
        }
    }

    pub fn body(&self) -> &EdgeBody {
        &self.body
    }

    pub fn label(&self) -> &EdgeLabel {
        &self.label
    }

    /// Last applied placement; `None` before the first position update.
    pub fn transform(&self) -> Option<EdgeTransform> {
        self.transform
    }

    pub fn update_position(&mut self, source: Vec2, target: Vec2) -> EdgeTransform {
        if let (Some((s, t)), Some(transform)) = (self.endpoints, self.transform) {
            if s.bit_eq(&source) && t.bit_eq(&target) {
                return transform;
            }
        }

        let transform = EdgeTransform::between(source, target);
        self.body.apply_transform(&transform);
        self.label.set_position(transform.position);
        self.endpoints = Some((source, target));
        self.transform = Some(transform);
        transform
    }

    /// Fetch or generate textures for `style` and apply it to both parts.
    ///
    /// Rasterizer errors propagate before any sprite is touched.
    pub fn update_style(
        &mut self,
        style: &EdgeStyle,
        cache: &mut TextureCache,
        rasterizer: &dyn Rasterizer,
    ) -> Result<()> {
        let flat = cache.get(&flat_color_key(), || rasterizer.flat());
        let label = &style.label;
        let text = cache.get_or_try_insert(&label_text_key(label), || {
            rasterizer.rasterize_text(label.text_type, &label.content, &label.font())
        })?;

        self.body.apply_style(style, flat.clone());
        self.label.apply_style(label, text, flat);
        Ok(())
    }

    pub fn update_visibility(&mut self, zoom_step: i32) {
        self.body.update_visibility(zoom_step);
        self.label.update_visibility(zoom_step);
    }

    pub fn set_body_visible(&mut self, visible: bool) {
        self.body.set_intrinsic_visible(visible);
    }

    pub fn set_label_visible(&mut self, visible: bool) {
        self.label.set_intrinsic_visible(visible);
    }

    pub fn on<F>(&mut self, kind: EdgeEventKind, handler: F) -> HandlerId
    where
        F: FnMut(&MouseEvent) + 'static,
    {
        self.events.on(kind, handler)
    }

    pub fn off(&mut self, id: HandlerId) -> bool {
        self.events.off(id)
    }

    /// Entry point for the scene engine's hit testing on the line sprite.
    ///
    /// Returns whether an event was forwarded.
    pub fn handle_interaction(&mut self, kind: InteractionKind, raw: &MouseEvent) -> bool {
        if !self.body.is_interactive() {
            return false;
        }
        match EdgeEventKind::from_interaction(kind) {
            Some(event) => {
                self.events.emit(event, raw);
                true
            }
            None => false,
        }
    }
}

impl Default for EdgeView {
    fn default() -> Self {
        Self::new()
    }
}
