/// Error taxonomy for style application and rasterization.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EdgeError {
    #[error("font size must be finite and positive, got {size}")]
    InvalidFontSize { size: f64 },

    #[error("font family must not be empty")]
    EmptyFontFamily,

    #[error("rasterization failed: {0}")]
    Rasterize(String),

    #[cfg(feature = "cairo")]
    #[error("cairo: {0}")]
    Cairo(#[from] cairo::Error),

    #[cfg(feature = "cairo")]
    #[error("cairo surface borrow: {0}")]
    Borrow(#[from] cairo::BorrowError),
}

pub type Result<T> = std::result::Result<T, EdgeError>;
