//! Edge graphics for interactive graph views.
//!
//! Positions, styles and zoom-gates the sprites of graph edges and their
//! labels, reusing rasterized label text through a shared resource cache.

pub mod cache;
pub mod core;
pub mod graph;
pub mod platform;

pub use crate::cache::cache_key::{CacheKey, ResourceKind};
pub use crate::cache::resource_cache::{CacheStats, ResourceCache, TextureCache};
pub use crate::core::error::EdgeError;
pub use crate::core::style::{EdgeStyle, FontDescription, LabelStyle, TextType};
pub use crate::core::types::{Color, MouseEvent, Vec2};
pub use crate::graph::edge_geometry::EdgeTransform;
pub use crate::graph::edge_view::EdgeView;
pub use crate::graph::events::{EdgeEventKind, HandlerId, InteractionKind};
pub use crate::platform::rasterizer::{MetricsRasterizer, Rasterizer};
#[cfg(feature = "cairo")]
pub use crate::platform::rasterizer_cairo::CairoRasterizer;
pub use crate::platform::texture::Texture;
