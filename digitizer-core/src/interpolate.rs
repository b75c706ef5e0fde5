//! Curve lookups for guide lines, and display smoothing.
//!
//! Lookups interpolate linearly in *transformed* space (log10 on log axes) and
//! map the result back to real units, so an intersection on a log-log chart
//! lands where the straight segment on screen crosses the guide.

use crate::axis::AxisMode;
use crate::config::{SEGMENT_EPS, SMOOTH_SEGMENT_STEPS};
use crate::document::Point;
use crate::geometry::SurfacePoint;

/// y of the curve at `x`, or `None` outside every segment (no extrapolation).
///
/// Segments are the consecutive pairs of `points` in the order given; the first
/// segment whose x-range contains `x` wins. Segments may run either way in x.
pub fn value_at_x(points: &[Point], x: f64, x_mode: AxisMode, y_mode: AxisMode) -> Option<f64> {
    lookup(points, x, |p| (p.x, p.y), x_mode, y_mode)
}

/// x of the curve at `y`; the mirror of [`value_at_x`].
pub fn value_at_y(points: &[Point], y: f64, x_mode: AxisMode, y_mode: AxisMode) -> Option<f64> {
    lookup(points, y, |p| (p.y, p.x), y_mode, x_mode)
}

fn lookup(
    points: &[Point],
    target: f64,
    key_value: impl Fn(&Point) -> (f64, f64),
    key_mode: AxisMode,
    value_mode: AxisMode,
) -> Option<f64> {
    if points.len() < 2 || !target.is_finite() {
        return None;
    }
    let t_target = key_mode.transform(target);

    points.windows(2).find_map(|pair| {
        let (k1, v1) = key_value(&pair[0]);
        let (k2, v2) = key_value(&pair[1]);
        if target < k1.min(k2) || target > k1.max(k2) {
            return None;
        }
        let (tk1, tk2) = (key_mode.transform(k1), key_mode.transform(k2));
        let span = tk2 - tk1;
        let t = if span.abs() < SEGMENT_EPS {
            0.0
        } else {
            (t_target - tk1) / span
        };
        let (tv1, tv2) = (value_mode.transform(v1), value_mode.transform(v2));
        let value = value_mode.invert(tv1 + t * (tv2 - tv1));
        value.is_finite().then_some(value)
    })
}

/// Catmull-Rom style curve through surface points, for drawing only.
///
/// `alpha` scales the tangents: 0 gives straight segments, 0.5 is the classic
/// Catmull-Rom, larger values loosen the curve. Every input point appears in
/// the output exactly; fewer than two points are returned unchanged.
pub fn smooth_path(points: &[SurfacePoint], alpha: f64) -> Vec<SurfacePoint> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let alpha = if alpha.is_finite() { alpha.max(0.0) } else { 0.0 };
    let n = points.len();
    let tangent = |i: usize| {
        let prev = points[i.saturating_sub(1)];
        let next = points[(i + 1).min(n - 1)];
        ((next.x - prev.x) * alpha, (next.y - prev.y) * alpha)
    };

    let mut out = Vec::with_capacity(1 + (n - 1) * SMOOTH_SEGMENT_STEPS);
    out.push(points[0]);
    for i in 0..n - 1 {
        let (p0, p1) = (points[i], points[i + 1]);
        let (m0, m1) = (tangent(i), tangent(i + 1));
        for step in 1..SMOOTH_SEGMENT_STEPS {
            let t = step as f64 / SMOOTH_SEGMENT_STEPS as f64;
            let t2 = t * t;
            let t3 = t2 * t;
            // Cubic Hermite basis
            let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
            let h10 = t3 - 2.0 * t2 + t;
            let h01 = -2.0 * t3 + 3.0 * t2;
            let h11 = t3 - t2;
            out.push(SurfacePoint::new(
                h00 * p0.x + h10 * m0.0 + h01 * p1.x + h11 * m1.0,
                h00 * p0.y + h10 * m0.1 + h01 * p1.y + h11 * m1.1,
            ));
        }
        out.push(p1);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    // ============================================================================
    // value_at_x / value_at_y
    // ============================================================================

    #[test]
    fn identity_line_in_log_log_space() {
        let points = [Point::new(10.0, 10.0), Point::new(1000.0, 1000.0)];
        let y = value_at_x(&points, 100.0, AxisMode::Log10, AxisMode::Log10).unwrap();
        assert!(close(y, 100.0), "got {y}");
        assert_eq!(
            value_at_x(&points, 5.0, AxisMode::Log10, AxisMode::Log10),
            None
        );
    }

    #[test]
    fn linear_space_gives_a_different_answer_on_log_data() {
        let points = [Point::new(10.0, 10.0), Point::new(1000.0, 1000.0)];
        // Still the identity in linear space
        let y = value_at_x(&points, 100.0, AxisMode::Linear, AxisMode::Linear).unwrap();
        assert!(close(y, 100.0));

        // Log x against linear y: halfway in log10(x) is halfway in y
        let y = value_at_x(&points, 100.0, AxisMode::Log10, AxisMode::Linear).unwrap();
        assert!(close(y, 505.0), "got {y}");
    }

    #[test]
    fn fewer_than_two_points_has_no_value() {
        assert_eq!(value_at_x(&[], 1.0, AxisMode::Linear, AxisMode::Linear), None);
        assert_eq!(
            value_at_x(&[Point::new(1.0, 1.0)], 1.0, AxisMode::Linear, AxisMode::Linear),
            None
        );
    }

    #[test]
    fn segments_may_run_backwards() {
        let points = [Point::new(4.0, 40.0), Point::new(2.0, 20.0)];
        let y = value_at_x(&points, 3.0, AxisMode::Linear, AxisMode::Linear).unwrap();
        assert!(close(y, 30.0));
    }

    #[test]
    fn vertical_segment_returns_start_value() {
        let points = [Point::new(2.0, 1.0), Point::new(2.0, 5.0), Point::new(3.0, 6.0)];
        let y = value_at_x(&points, 2.0, AxisMode::Linear, AxisMode::Linear).unwrap();
        assert!(close(y, 1.0));
    }

    #[test]
    fn value_at_y_inverts_value_at_x() {
        let points = [
            Point::new(0.01, 3000.0),
            Point::new(0.1, 1500.0),
            Point::new(1.0, 600.0),
            Point::new(3.0, 350.0),
        ];
        let y = value_at_x(&points, 0.5, AxisMode::Log10, AxisMode::Log10).unwrap();
        let x = value_at_y(&points, y, AxisMode::Log10, AxisMode::Log10).unwrap();
        assert!((x - 0.5).abs() < 1e-9);
    }

    #[test]
    fn endpoints_are_inclusive() {
        let points = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        assert_eq!(
            value_at_x(&points, 1.0, AxisMode::Linear, AxisMode::Linear),
            Some(2.0)
        );
        assert_eq!(
            value_at_x(&points, 3.0, AxisMode::Linear, AxisMode::Linear),
            Some(4.0)
        );
    }

    // ============================================================================
    // smooth_path
    // ============================================================================

    #[test]
    fn smoothing_keeps_degenerate_input() {
        let one = [SurfacePoint::new(3.0, 4.0)];
        assert_eq!(smooth_path(&one, 0.5), one.to_vec());
        assert!(smooth_path(&[], 0.5).is_empty());
    }

    #[test]
    fn smoothing_passes_through_every_input_point() {
        let pts = [
            SurfacePoint::new(0.0, 0.0),
            SurfacePoint::new(10.0, 30.0),
            SurfacePoint::new(20.0, 5.0),
        ];
        let path = smooth_path(&pts, 0.5);
        assert_eq!(path.len(), 1 + 2 * SMOOTH_SEGMENT_STEPS);
        assert_eq!(path[0], pts[0]);
        assert_eq!(path[SMOOTH_SEGMENT_STEPS], pts[1]);
        assert_eq!(path[2 * SMOOTH_SEGMENT_STEPS], pts[2]);
    }

    #[test]
    fn zero_alpha_draws_straight_segments() {
        let pts = [
            SurfacePoint::new(0.0, 0.0),
            SurfacePoint::new(10.0, 20.0),
            SurfacePoint::new(30.0, 0.0),
        ];
        let path = smooth_path(&pts, 0.0);
        for p in &path[..=SMOOTH_SEGMENT_STEPS] {
            assert!((p.y - 2.0 * p.x).abs() < 1e-9);
        }
    }
}
