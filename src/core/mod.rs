pub mod config;
pub mod error;
pub mod style;
pub mod types;
