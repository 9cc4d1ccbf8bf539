//! Wrap-around plane geometry
//!
//! The play field is a torus: leaving one edge re-enters from the opposite
//! one. Distances are measured the short way around each axis.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Shortest separation between two coordinates on a ring of length `extent`
#[inline]
pub fn axis_distance(a: f64, b: f64, extent: f64) -> f64 {
    let direct = (a - b).abs();
    direct.min(extent - direct)
}

/// Wrap a coordinate into `[0, extent)`
#[inline]
pub fn wrap(coord: f64, extent: f64) -> f64 {
    let wrapped = coord.rem_euclid(extent);
    // rem_euclid can round tiny negatives up to exactly `extent`
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Shortest signed offset from `from` to `to` on a ring of length `extent`
#[inline]
fn axis_delta(from: f64, to: f64, extent: f64) -> f64 {
    let d = to - from;
    if d > extent / 2.0 {
        d - extent
    } else if d < -extent / 2.0 {
        d + extent
    } else {
        d
    }
}

/// The wrapped domain `[0, width) x [0, height)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Torus {
    pub width: f64,
    pub height: f64,
}

impl Torus {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn min_extent(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Direct distance from `pos` to the farthest corner of the domain
    ///
    /// A disc around `pos` covers the whole domain exactly when its radius
    /// reaches this.
    pub fn farthest_corner_distance(&self, pos: DVec2) -> f64 {
        let dx = pos.x.max(self.width - pos.x);
        let dy = pos.y.max(self.height - pos.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Toroidal (shortest way around) Euclidean distance
    #[inline]
    pub fn distance(&self, a: DVec2, b: DVec2) -> f64 {
        let dx = axis_distance(a.x, b.x, self.width);
        let dy = axis_distance(a.y, b.y, self.height);
        (dx * dx + dy * dy).sqrt()
    }

    /// Shortest signed displacement from `from` to `to`
    pub fn delta(&self, from: DVec2, to: DVec2) -> DVec2 {
        DVec2::new(
            axis_delta(from.x, to.x, self.width),
            axis_delta(from.y, to.y, self.height),
        )
    }

    /// Wrap both axes into the domain
    #[inline]
    pub fn wrap(&self, pos: DVec2) -> DVec2 {
        DVec2::new(wrap(pos.x, self.width), wrap(pos.y, self.height))
    }

    /// Every position a circle must be drawn at to look continuous across edges
    ///
    /// Always starts with `pos` itself. Adds the horizontal copy when the
    /// circle pokes past the left or right edge, the vertical copy for the top
    /// or bottom edge, and the diagonal copy when both apply.
    pub fn draw_positions(&self, pos: DVec2, radius: f64) -> Vec<DVec2> {
        let mut out = Vec::with_capacity(4);
        out.push(pos);

        let shift_x = if pos.x < radius {
            Some(self.width)
        } else if pos.x > self.width - radius {
            Some(-self.width)
        } else {
            None
        };
        let shift_y = if pos.y < radius {
            Some(self.height)
        } else if pos.y > self.height - radius {
            Some(-self.height)
        } else {
            None
        };

        if let Some(sx) = shift_x {
            out.push(DVec2::new(pos.x + sx, pos.y));
        }
        if let Some(sy) = shift_y {
            out.push(DVec2::new(pos.x, pos.y + sy));
        }
        if let (Some(sx), Some(sy)) = (shift_x, shift_y) {
            out.push(DVec2::new(pos.x + sx, pos.y + sy));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_axis_distance_goes_the_short_way() {
        assert_eq!(axis_distance(10.0, 30.0, 100.0), 20.0);
        assert_eq!(axis_distance(5.0, 95.0, 100.0), 10.0);
        assert_eq!(axis_distance(95.0, 5.0, 100.0), 10.0);
        assert_eq!(axis_distance(0.0, 50.0, 100.0), 50.0);
    }

    #[test]
    fn test_wrap_single_step() {
        assert_eq!(wrap(-1.5, 100.0), 98.5);
        assert_eq!(wrap(101.0, 100.0), 1.0);
        assert_eq!(wrap(100.0, 100.0), 0.0);
        assert_eq!(wrap(42.0, 100.0), 42.0);
        assert!(wrap(-1e-300, 100.0) < 100.0);
    }

    #[test]
    fn test_distance_across_corner() {
        let torus = Torus::new(100.0, 80.0);
        let d = torus.distance(DVec2::new(1.0, 1.0), DVec2::new(99.0, 79.0));
        assert!((d - (8.0_f64).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_delta_points_across_seam() {
        let torus = Torus::new(100.0, 100.0);
        let d = torus.delta(DVec2::new(95.0, 50.0), DVec2::new(5.0, 40.0));
        assert!((d.x - 10.0).abs() < 1e-12);
        assert!((d.y + 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_farthest_corner_distance() {
        let torus = Torus::new(80.0, 60.0);
        assert_eq!(torus.farthest_corner_distance(torus.center()), 50.0);
        assert_eq!(torus.farthest_corner_distance(DVec2::new(10.0, 50.0)), (70.0f64 * 70.0 + 50.0 * 50.0).sqrt());
    }

    #[test]
    fn test_draw_positions_interior() {
        let torus = Torus::new(200.0, 100.0);
        let positions = torus.draw_positions(DVec2::new(100.0, 50.0), 10.0);
        assert_eq!(positions, vec![DVec2::new(100.0, 50.0)]);
    }

    #[test]
    fn test_draw_positions_edges_and_corner() {
        let torus = Torus::new(200.0, 100.0);

        let left = torus.draw_positions(DVec2::new(4.0, 50.0), 10.0);
        assert_eq!(left, vec![DVec2::new(4.0, 50.0), DVec2::new(204.0, 50.0)]);

        let bottom = torus.draw_positions(DVec2::new(100.0, 95.0), 10.0);
        assert_eq!(bottom, vec![DVec2::new(100.0, 95.0), DVec2::new(100.0, -5.0)]);

        let corner = torus.draw_positions(DVec2::new(195.0, 3.0), 10.0);
        assert_eq!(
            corner,
            vec![
                DVec2::new(195.0, 3.0),
                DVec2::new(-5.0, 3.0),
                DVec2::new(195.0, 103.0),
                DVec2::new(-5.0, 103.0),
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_wrap_in_range_and_idempotent(p in -1.0e6f64..1.0e6, e in 0.001f64..1.0e4) {
            let w = wrap(p, e);
            prop_assert!(w >= 0.0 && w < e);
            prop_assert_eq!(wrap(w, e), w);
        }

        #[test]
        fn prop_toroidal_distance_bounded_and_symmetric(
            ax in 0.0f64..640.0, ay in 0.0f64..480.0,
            bx in 0.0f64..640.0, by in 0.0f64..480.0,
        ) {
            let torus = Torus::new(640.0, 480.0);
            let a = DVec2::new(ax, ay);
            let b = DVec2::new(bx, by);
            let wrapped = torus.distance(a, b);
            prop_assert!(wrapped <= a.distance(b) + 1e-9);
            prop_assert_eq!(wrapped, torus.distance(b, a));
        }

        #[test]
        fn prop_axis_distance_symmetric(a in 0.0f64..100.0, b in 0.0f64..100.0) {
            prop_assert_eq!(axis_distance(a, b, 100.0), axis_distance(b, a, 100.0));
            prop_assert!(axis_distance(a, b, 100.0) <= 50.0);
        }
    }
}
