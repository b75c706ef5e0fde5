//! I²t integration and lifetime-curve scaling.
//!
//! A digitized current-vs-time curve (x = time, y = current) is integrated with
//! the trapezoidal rule over `i²`. The total gives the equivalent duration at a
//! constant current, and whole curves can be rescaled to project comparison
//! curves at other cycle counts.

use serde::{Deserialize, Serialize};

use crate::axis::AxisMode;
use crate::document::{Point, Series, SeriesId};
use crate::interpolate::value_at_x;

/// One current sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub t: f64,
    pub i: f64,
}

/// Read series points as samples: x is time, y is current.
pub fn samples_from_points(points: &[Point]) -> Vec<Sample> {
    points.iter().map(|p| Sample { t: p.x, i: p.y }).collect()
}

/// Finite samples ordered by time.
fn sorted(samples: &[Sample]) -> Vec<Sample> {
    let mut out: Vec<Sample> = samples
        .iter()
        .copied()
        .filter(|s| s.t.is_finite() && s.i.is_finite())
        .collect();
    out.sort_by(|a, b| a.t.total_cmp(&b.t));
    out
}

fn trapezoid(a: &Sample, b: &Sample) -> f64 {
    (a.i * a.i + b.i * b.i) / 2.0 * (b.t - a.t)
}

/// Total ∫i² dt by the trapezoidal rule; 0 for fewer than two samples.
pub fn integrate(samples: &[Sample]) -> f64 {
    sorted(samples)
        .windows(2)
        .map(|pair| trapezoid(&pair[0], &pair[1]))
        .sum()
}

/// Running I²t at each sample time, starting from zero.
pub fn cumulative_curve(samples: &[Sample]) -> Vec<Point> {
    let samples = sorted(samples);
    let Some(first) = samples.first() else {
        return Vec::new();
    };
    let mut total = 0.0;
    let mut out = Vec::with_capacity(samples.len());
    out.push(Point::new(first.t, 0.0));
    for pair in samples.windows(2) {
        total += trapezoid(&pair[0], &pair[1]);
        out.push(Point::new(pair[1].t, total));
    }
    out
}

/// Duration at a constant `target_current` with the same total I²t.
pub fn equivalent_time(samples: &[Sample], target_current: f64) -> Option<f64> {
    if samples.is_empty() || !target_current.is_finite() || target_current <= 0.0 {
        return None;
    }
    Some(integrate(samples) / (target_current * target_current))
}

/// A curve with every y multiplied by `scale_factor`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaledCurve {
    pub scale_factor: f64,
    pub ref_x: f64,
    /// Value of the scaled curve at `ref_x` (log-log interpolation), when covered.
    pub ref_y: Option<f64>,
    pub points: Vec<Point>,
}

/// Scale `base` by `scale_factor`. `ref_x` only records where the curve is
/// compared against its siblings; it does not affect the scaling.
pub fn scaled_lifetime_curve(base: &[Point], ref_x: f64, scale_factor: f64) -> ScaledCurve {
    let mut points: Vec<Point> = base
        .iter()
        .map(|p| Point::new(p.x, p.y * scale_factor))
        .collect();
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    let ref_y = value_at_x(&points, ref_x, AxisMode::Log10, AxisMode::Log10);
    ScaledCurve {
        scale_factor,
        ref_x,
        ref_y,
        points,
    }
}

/// A scaled curve tagged with the cycle count it represents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CycleCurve {
    pub cycles: f64,
    pub curve: ScaledCurve,
}

/// Build one scaled curve per `(cycles, scale_factor)` level.
pub fn lifetime_family(base: &[Point], ref_x: f64, levels: &[(f64, f64)]) -> Vec<CycleCurve> {
    levels
        .iter()
        .map(|&(cycles, factor)| CycleCurve {
            cycles,
            curve: scaled_lifetime_curve(base, ref_x, factor),
        })
        .collect()
}

/// Cycle count at which the family reaches `probe` at the reference point.
///
/// Curves are ordered by their value at `ref_x` and the cycle count is
/// interpolated between the two that bracket `probe` (in log space when all
/// values are positive). Outside the covered range the nearest curve's count is
/// returned. `None` when no curve is defined at the reference point.
pub fn equivalent_cycles(family: &[CycleCurve], probe: f64) -> Option<f64> {
    if !probe.is_finite() {
        return None;
    }
    let mut levels: Vec<(f64, f64)> = family
        .iter()
        .filter_map(|c| c.curve.ref_y.map(|y| (y, c.cycles)))
        .filter(|(y, cycles)| y.is_finite() && cycles.is_finite())
        .collect();
    levels.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (first, last) = (levels.first()?, levels.last()?);
    if probe <= first.0 {
        return Some(first.1);
    }
    if probe >= last.0 {
        return Some(last.1);
    }

    levels.windows(2).find_map(|pair| {
        let ((y1, c1), (y2, c2)) = (pair[0], pair[1]);
        if probe < y1 || probe > y2 {
            return None;
        }
        let mode = if y1 > 0.0 && probe > 0.0 {
            AxisMode::Log10
        } else {
            AxisMode::Linear
        };
        let span = mode.transform(y2) - mode.transform(y1);
        if span == 0.0 {
            return Some(c1);
        }
        let t = (mode.transform(probe) - mode.transform(y1)) / span;
        Some(c1 + t * (c2 - c1))
    })
}

/// New series holding the cumulative I²t of `source` (x = time, y = I²t).
///
/// The id is a placeholder; `Document::push_series` assigns the real one.
pub fn i2t_series(source: &Series) -> Series {
    let curve = cumulative_curve(&samples_from_points(&source.points));
    Series::new(
        SeriesId(0),
        format!("{} I²t", source.name),
        source.color.clone(),
    )
    .with_points(curve)
}
