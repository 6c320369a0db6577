/// Placement of an edge between two endpoints.

use crate::core::types::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeTransform {
    pub source: Vec2,
    /// Midpoint of the two endpoints.
    pub position: Vec2,
    /// Radians; turns the local +y axis to point from source to target.
    pub rotation: f64,
    pub length: f64,
}

impl EdgeTransform {
    /// Coincident endpoints give `length == 0` and `rotation == 0`.
    pub fn between(source: Vec2, target: Vec2) -> Self {
        let delta = target - source;
        let rotation = -delta.x.atan2(delta.y);
        Self {
            source,
            position: source.midpoint(target),
            // atan2(±0, +0) is ±0; fold both into +0.
            rotation: if rotation == 0.0 { 0.0 } else { rotation },
            length: delta.length(),
        }
    }

    /// Where the local point `(0, t * length)` lands, for `t` in `0..=1`.
    pub fn point_along(&self, t: f64) -> Vec2 {
        let d = t * self.length;
        Vec2::new(
            self.source.x - d * self.rotation.sin(),
            self.source.y + d * self.rotation.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn approx_vec(a: Vec2, b: Vec2) -> bool {
        approx(a.x, b.x) && approx(a.y, b.y)
    }

    #[test]
    fn test_horizontal_edge() {
        let t = EdgeTransform::between(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_eq!(t.position, Vec2::new(5.0, 0.0));
        assert_eq!(t.length, 10.0);
        assert!(approx(t.rotation, -FRAC_PI_2));
    }

    #[test]
    fn test_vertical_and_diagonal_edges() {
        let down = EdgeTransform::between(Vec2::new(0.0, 0.0), Vec2::new(0.0, 5.0));
        assert!(approx(down.rotation, 0.0));

        let up = EdgeTransform::between(Vec2::new(0.0, 5.0), Vec2::new(0.0, 0.0));
        assert!(approx(up.rotation.abs(), PI));

        let diag = EdgeTransform::between(Vec2::new(1.0, 1.0), Vec2::new(4.0, 4.0));
        assert!(approx(diag.rotation, -FRAC_PI_4));
        assert!(approx(diag.length, 18.0f64.sqrt()));
        assert!(approx_vec(diag.position, Vec2::new(2.5, 2.5)));
    }

    #[test]
    fn test_coincident_endpoints() {
        let p = Vec2::new(3.0, 4.0);
        let t = EdgeTransform::between(p, p);
        assert_eq!(t.length, 0.0);
        assert_eq!(t.rotation, 0.0);
        assert!(t.rotation.is_sign_positive());
        assert_eq!(t.position, p);
        assert!(t.rotation.is_finite());
    }

    #[test]
    fn test_rotation_points_body_at_target() {
        let cases = [
            (Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)),
            (Vec2::new(-3.0, 2.0), Vec2::new(7.0, -8.0)),
            (Vec2::new(5.0, 5.0), Vec2::new(-1.0, 12.0)),
        ];
        for (source, target) in cases {
            let t = EdgeTransform::between(source, target);
            assert!(approx_vec(t.point_along(0.0), source));
            assert!(approx_vec(t.point_along(0.5), t.position));
            assert!(approx_vec(t.point_along(1.0), target));
        }
    }

    #[test]
    fn test_large_coordinates_stay_finite() {
        let t = EdgeTransform::between(Vec2::new(-1e300, 0.0), Vec2::new(1e300, 1e300));
        assert!(t.length.is_finite());
        assert!(t.rotation.is_finite());
    }
}
