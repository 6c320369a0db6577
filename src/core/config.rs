/// Visual and behavioral constants.

// --- Visual colors (hex) ---
pub const EDGE_COLOR: u32 = 0x8E8EA0;
pub const LABEL_TEXT_COLOR: u32 = 0xE6EDF3;
pub const LABEL_BG_COLOR: u32 = 0x0D1117;

// --- Edge body ---
pub const EDGE_WIDTH: f64 = 1.0;
/// Horizontally centered, pinned at the source end.
pub const BODY_ANCHOR: (f64, f64) = (0.5, 0.0);

// --- Edge label ---
pub const LABEL_FONT_FAMILY: &str = "sans-serif";
pub const LABEL_FONT_SIZE: f64 = 12.0;
pub const LABEL_PADDING: f64 = 4.0;
pub const LABEL_ANCHOR: (f64, f64) = (0.5, 0.5);
pub const LABEL_BG_ALPHA: f64 = 0.8;

// --- Zoom ---
/// Labels show from this zoom step upward; bodies have no threshold.
pub const LABEL_ZOOM_THRESHOLD: i32 = 3;

// --- Cache keys ---
pub const KEY_DELIMITER: &str = "::";

// --- Headless text metrics (fraction of font size) ---
pub const GLYPH_ADVANCE_RATIO: f64 = 0.6;
pub const BITMAP_GLYPH_ADVANCE_RATIO: f64 = 0.5;
pub const LINE_HEIGHT_RATIO: f64 = 1.2;
