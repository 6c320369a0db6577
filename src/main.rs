use edge_gfx::{
    Color, EdgeEventKind, EdgeStyle, EdgeView, InteractionKind, LabelStyle, MouseEvent,
    Rasterizer, TextureCache, Vec2,
};
use std::num::NonZeroUsize;
use std::time::Instant;

struct Args {
    edges: usize,
    frames: usize,
    capacity: Option<NonZeroUsize>,
}

fn parse_args() -> Args {
    let mut args = Args {
        edges: 200,
        frames: 120,
        capacity: None,
    };

    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--edges" if i + 1 < argv.len() => {
                i += 1;
                args.edges = argv[i].parse().unwrap_or(args.edges);
            }
            "--frames" if i + 1 < argv.len() => {
                i += 1;
                args.frames = argv[i].parse().unwrap_or(args.frames);
            }
            "--capacity" if i + 1 < argv.len() => {
                i += 1;
                args.capacity = argv[i].parse().ok();
            }
            _ => {}
        }
        i += 1;
    }

    args
}

#[cfg(feature = "cairo")]
fn rasterizer() -> Box<dyn Rasterizer> {
    Box::new(edge_gfx::CairoRasterizer::new())
}

#[cfg(not(feature = "cairo"))]
fn rasterizer() -> Box<dyn Rasterizer> {
    Box::new(edge_gfx::MetricsRasterizer::new())
}

/// A handful of relation kinds, so many edges share a label.
fn style_for(index: usize) -> EdgeStyle {
    const KINDS: [(&str, u32); 4] = [
        ("calls", 0x4A90D9),
        ("includes", 0x2ECC71),
        ("inherits", 0x8E8EA0),
        ("error", 0xE94560),
    ];
    let (content, color) = KINDS[index % KINDS.len()];
    EdgeStyle {
        width: 1.0 + (index % 3) as f64,
        color: Color::from_hex(color, 1.0),
        label: LabelStyle {
            content: content.to_string(),
            color: Color::from_hex(color, 1.0),
            ..LabelStyle::default()
        },
    }
}

fn endpoints(index: usize, frame: usize) -> (Vec2, Vec2) {
    let t = frame as f64 / 30.0;
    let a = index as f64 * 0.37;
    let source = Vec2::new((a + t).cos() * 200.0, (a + t).sin() * 200.0);
    let target = Vec2::new((a * 2.0 - t).cos() * 320.0, (a * 2.0 - t).sin() * 120.0);
    (source, target)
}

fn main() {
    env_logger::init();

    let args = parse_args();
    let rasterizer = rasterizer();
    let mut cache = match args.capacity {
        Some(cap) => TextureCache::bounded(cap),
        None => TextureCache::new(),
    };

    let mut edges: Vec<EdgeView> = (0..args.edges).map(|_| EdgeView::new()).collect();
    if let Some(first) = edges.first_mut() {
        first.on(EdgeEventKind::MouseDown, |e| {
            log::info!("Edge 0 pressed at ({:.1}, {:.1})", e.x, e.y);
        });
    }

    let start = Instant::now();
    for frame in 0..args.frames {
        // Zoom sweeps 0..=5 and back, so labels toggle.
        let zoom_step = (frame / 10 % 6) as i32;
        for (i, edge) in edges.iter_mut().enumerate() {
            let (source, target) = endpoints(i, frame);
            edge.update_position(source, target);
            if let Err(e) = edge.update_style(&style_for(i), &mut cache, rasterizer.as_ref()) {
                eprintln!("Failed to style edge {}: {}", i, e);
                std::process::exit(1);
            }
            edge.update_visibility(zoom_step);
        }

        if frame == args.frames / 2 {
            if let Some(first) = edges.first_mut() {
                let press = MouseEvent {
                    button: 1,
                    pressed: true,
                    ..MouseEvent::default()
                };
                first.handle_interaction(InteractionKind::PointerDown, &press);
            }
        }
    }

    let labels_visible = edges.iter().filter(|e| e.label().is_visible()).count();
    let stats = cache.stats();
    println!(
        "{} edges x {} frames in {:.1} ms",
        args.edges,
        args.frames,
        start.elapsed().as_secs_f64() * 1000.0
    );
    println!(
        "cache: {} resident, {} generated, {} hits, {} evicted",
        cache.len(),
        stats.generations,
        stats.hits,
        stats.evictions
    );
    println!("labels visible on last frame: {}", labels_visible);
}
