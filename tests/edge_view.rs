use edge_gfx::{
    EdgeError, EdgeEventKind, EdgeStyle, EdgeView, FontDescription, InteractionKind, LabelStyle,
    MetricsRasterizer, MouseEvent, Rasterizer, TextType, Texture, TextureCache, Vec2,
};
use std::cell::{Cell, RefCell};
use std::num::NonZeroUsize;
use std::rc::Rc;

fn style(content: &str, font_size: f64) -> EdgeStyle {
    EdgeStyle {
        label: LabelStyle {
            content: content.to_string(),
            font_size,
            ..LabelStyle::default()
        },
        ..EdgeStyle::default()
    }
}

/// Counts rasterizations so tests can see what the cache saved.
struct CountingRasterizer {
    inner: MetricsRasterizer,
    calls: Cell<usize>,
}

impl CountingRasterizer {
    fn new() -> Self {
        Self {
            inner: MetricsRasterizer::new(),
            calls: Cell::new(0),
        }
    }
}

impl Rasterizer for CountingRasterizer {
    fn rasterize_text(
        &self,
        text_type: TextType,
        content: &str,
        font: &FontDescription<'_>,
    ) -> Result<Texture, EdgeError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.rasterize_text(text_type, content, font)
    }
}

#[test]
fn test_edges_with_same_label_share_texture() {
    let mut cache = TextureCache::new();
    let raster = CountingRasterizer::new();
    let mut a = EdgeView::new();
    let mut b = EdgeView::new();

    let mut style_b = style("calls", 12.0);
    style_b.width = 4.0;
    style_b.label.padding = 10.0;

    a.update_style(&style("calls", 12.0), &mut cache, &raster).unwrap();
    b.update_style(&style_b, &mut cache, &raster).unwrap();

    let ta = a.label().text().texture().unwrap();
    let tb = b.label().text().texture().unwrap();
    assert!(Rc::ptr_eq(ta, tb));
    assert_eq!(raster.calls.get(), 1);

    // Backgrounds are sized per edge even though the text is shared.
    assert!(b.label().background().width > a.label().background().width);

    let flat_a = a.body().line().texture().unwrap();
    let flat_b = b.label().background().texture().unwrap();
    assert!(Rc::ptr_eq(flat_a, flat_b));
}

#[test]
fn test_different_font_size_gets_own_texture() {
    let mut cache = TextureCache::new();
    let raster = CountingRasterizer::new();
    let mut a = EdgeView::new();
    let mut b = EdgeView::new();

    a.update_style(&style("calls", 12.0), &mut cache, &raster).unwrap();
    b.update_style(&style("calls", 18.0), &mut cache, &raster).unwrap();

    let ta = a.label().text().texture().unwrap();
    let tb = b.label().text().texture().unwrap();
    assert!(!Rc::ptr_eq(ta, tb));
    assert!(tb.width() > ta.width());
    assert_eq!(raster.calls.get(), 2);
}

#[test]
fn test_many_frames_rasterize_once_per_label() {
    let mut cache = TextureCache::new();
    let raster = CountingRasterizer::new();
    let mut edges: Vec<EdgeView> = (0..20).map(|_| EdgeView::new()).collect();
    let labels = ["calls", "includes", "inherits"];

    for frame in 0..30 {
        for (i, edge) in edges.iter_mut().enumerate() {
            let source = Vec2::new(i as f64, frame as f64);
            let target = Vec2::new(i as f64 + 10.0, frame as f64 * 2.0);
            edge.update_position(source, target);
            edge.update_style(&style(labels[i % labels.len()], 12.0), &mut cache, &raster)
                .unwrap();
            edge.update_visibility(frame % 5);
        }
    }

    assert_eq!(raster.calls.get(), labels.len());
    assert_eq!(cache.len(), labels.len() + 1);
}

#[test]
fn test_bounded_cache_keeps_identity_for_resident_keys() {
    let mut cache = TextureCache::bounded(NonZeroUsize::new(2).unwrap());
    let raster = CountingRasterizer::new();
    let mut a = EdgeView::new();
    let mut b = EdgeView::new();

    a.update_style(&style("calls", 12.0), &mut cache, &raster).unwrap();
    b.update_style(&style("calls", 12.0), &mut cache, &raster).unwrap();
    assert!(Rc::ptr_eq(
        a.label().text().texture().unwrap(),
        b.label().text().texture().unwrap()
    ));

    // A third key pushes the least recently used entry out; the edge keeps its texture.
    let mut c = EdgeView::new();
    c.update_style(&style("error", 12.0), &mut cache, &raster).unwrap();
    assert_eq!(cache.len(), 2);
    assert!(a.label().text().texture().is_some());
}

#[test]
fn test_label_visibility_follows_zoom_body_does_not() {
    let mut cache = TextureCache::new();
    let raster = MetricsRasterizer::new();
    let mut edge = EdgeView::new();
    edge.update_position(Vec2::new(0.0, 0.0), Vec2::new(0.0, 50.0));
    edge.update_style(&style("calls", 12.0), &mut cache, &raster).unwrap();

    for step in 0..3 {
        edge.update_visibility(step);
        assert!(!edge.label().is_visible(), "label shown at step {}", step);
        assert!(edge.body().line().visible);
    }
    for step in 3..8 {
        edge.update_visibility(step);
        assert!(edge.label().is_visible(), "label hidden at step {}", step);
        assert!(edge.body().line().visible);
    }
}

#[test]
fn test_interactions_forward_one_to_one() {
    let mut edge = EdgeView::new();
    let received = Rc::new(RefCell::new(Vec::new()));
    for kind in EdgeEventKind::ALL {
        let sink = Rc::clone(&received);
        edge.on(kind, move |e: &MouseEvent| sink.borrow_mut().push((kind, e.x)));
    }

    let sequence = [
        InteractionKind::PointerOver,
        InteractionKind::PointerMove,
        InteractionKind::PointerMove,
        InteractionKind::PointerDown,
        InteractionKind::PointerCancel,
        InteractionKind::PointerUp,
        InteractionKind::PointerUpOutside,
        InteractionKind::PointerOut,
    ];
    for (i, kind) in sequence.iter().enumerate() {
        let raw = MouseEvent {
            x: i as f64,
            ..MouseEvent::default()
        };
        edge.handle_interaction(*kind, &raw);
    }

    assert_eq!(
        *received.borrow(),
        vec![
            (EdgeEventKind::MouseOver, 0.0),
            (EdgeEventKind::MouseMove, 1.0),
            (EdgeEventKind::MouseMove, 2.0),
            (EdgeEventKind::MouseDown, 3.0),
            (EdgeEventKind::MouseUp, 5.0),
            (EdgeEventKind::MouseOut, 7.0),
        ]
    );
}

#[test]
fn test_label_is_not_interactive() {
    let edge = EdgeView::new();
    assert!(edge.body().is_interactive());
    assert!(!edge.label().text().interactive);
    assert!(!edge.label().background().interactive);
}
