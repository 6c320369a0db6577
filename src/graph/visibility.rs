/// Zoom-gated visibility for edge parts.

use crate::core::config;

/// Minimum zoom step at which a part may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomThreshold {
    Always,
    AtLeast(i32),
}

impl ZoomThreshold {
    pub const LABEL: ZoomThreshold = ZoomThreshold::AtLeast(config::LABEL_ZOOM_THRESHOLD);
    pub const BODY: ZoomThreshold = ZoomThreshold::Always;

    pub fn admits(&self, zoom_step: i32) -> bool {
        match *self {
            ZoomThreshold::Always => true,
            ZoomThreshold::AtLeast(min) => zoom_step >= min,
        }
    }
}

/// Final visibility: the part's own flag AND the zoom gate.
pub fn is_visible_at(intrinsic: bool, threshold: ZoomThreshold, zoom_step: i32) -> bool {
    intrinsic && threshold.admits(zoom_step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_threshold() {
        assert!(!is_visible_at(true, ZoomThreshold::LABEL, 2));
        assert!(is_visible_at(true, ZoomThreshold::LABEL, 3));
        assert!(is_visible_at(true, ZoomThreshold::LABEL, 10));
        assert!(!is_visible_at(true, ZoomThreshold::LABEL, -1));
    }

    #[test]
    fn test_body_ignores_zoom() {
        for step in [i32::MIN, -5, 0, 1, 3, i32::MAX] {
            assert!(is_visible_at(true, ZoomThreshold::BODY, step));
        }
    }

    #[test]
    fn test_intrinsic_hidden_wins() {
        assert!(!is_visible_at(false, ZoomThreshold::LABEL, 5));
        assert!(!is_visible_at(false, ZoomThreshold::BODY, 5));
    }
}
