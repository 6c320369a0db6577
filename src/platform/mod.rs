pub mod rasterizer;
#[cfg(feature = "cairo")]
pub mod rasterizer_cairo;
pub mod scene;
pub mod texture;
