//! Real ↔ surface coordinate mapping for linear and log10 axes.
//!
//! Each axis maps its transformed range `[t(min), t(max)]` linearly onto a
//! surface interval `[p0, p1]`, where `t` is the identity for linear axes and
//! `log10` (floored at [`LOG_DOMAIN_EPS`]) for logarithmic ones. A degenerate
//! configuration never produces NaN: construction returns `None` and
//! [`AxisConfig::status`] tells the caller why.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_X_AXIS, DEFAULT_Y_AXIS, LOG_DOMAIN_EPS};
use crate::document::Point;
use crate::geometry::{SurfacePoint, SurfaceRect};

/// Scale of a single axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisMode {
    #[default]
    Linear,
    Log10,
}

impl AxisMode {
    /// Map a real value into transformed space.
    ///
    /// Log10 values at or below zero are floored to `LOG_DOMAIN_EPS` so a point
    /// outside the domain lands on the axis edge instead of failing.
    pub fn transform(self, v: f64) -> f64 {
        match self {
            AxisMode::Linear => v,
            AxisMode::Log10 => v.max(LOG_DOMAIN_EPS).log10(),
        }
    }

    /// Map a transformed value back to real units.
    pub fn invert(self, t: f64) -> f64 {
        match self {
            AxisMode::Linear => t,
            AxisMode::Log10 => 10f64.powf(t),
        }
    }

    pub fn is_log(self) -> bool {
        matches!(self, AxisMode::Log10)
    }
}

/// Why an axis cannot be used for drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisStatus {
    Valid,
    /// A bound is NaN or infinite.
    NonFinite,
    /// `max <= min`.
    EmptyRange,
    /// Both log bounds floor to the same transformed value.
    CollapsedLogRange,
}

impl AxisStatus {
    pub fn is_valid(self) -> bool {
        self == AxisStatus::Valid
    }
}

/// Calibrated range and scale of one axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub min: f64,
    pub max: f64,
    pub mode: AxisMode,
}

impl AxisConfig {
    pub fn new(min: f64, max: f64, mode: AxisMode) -> Self {
        Self { min, max, mode }
    }

    pub fn linear(min: f64, max: f64) -> Self {
        Self::new(min, max, AxisMode::Linear)
    }

    pub fn log10(min: f64, max: f64) -> Self {
        Self::new(min, max, AxisMode::Log10)
    }

    /// Transformed bounds `(t(min), t(max))`.
    pub fn transformed_range(&self) -> (f64, f64) {
        (self.mode.transform(self.min), self.mode.transform(self.max))
    }

    pub fn status(&self) -> AxisStatus {
        if !self.min.is_finite() || !self.max.is_finite() {
            return AxisStatus::NonFinite;
        }
        if self.max <= self.min {
            return AxisStatus::EmptyRange;
        }
        let (t_min, t_max) = self.transformed_range();
        if !(t_max - t_min).is_finite() || t_max - t_min <= 0.0 {
            return AxisStatus::CollapsedLogRange;
        }
        AxisStatus::Valid
    }

    pub fn is_valid(&self) -> bool {
        self.status().is_valid()
    }
}

/// Both axes of a document.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x: AxisConfig,
    pub y: AxisConfig,
}

impl Default for Axes {
    fn default() -> Self {
        Self {
            x: DEFAULT_X_AXIS,
            y: DEFAULT_Y_AXIS,
        }
    }
}

/// A validated mapping from one axis onto a surface interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTransform {
    mode: AxisMode,
    t_min: f64,
    t_span: f64,
    p0: f64,
    p_span: f64,
}

impl AxisTransform {
    /// Map `[min, max]` of `config` onto `[p0, p1]`.
    ///
    /// Pass `p0 > p1` to flip orientation (the y axis maps `min` to the bottom
    /// pixel). Returns `None` for an invalid axis or a zero-width interval.
    pub fn new(config: &AxisConfig, p0: f64, p1: f64) -> Option<Self> {
        if !config.is_valid() {
            return None;
        }
        let p_span = p1 - p0;
        if !p_span.is_finite() || p_span == 0.0 || !p0.is_finite() {
            return None;
        }
        let (t_min, t_max) = config.transformed_range();
        Some(Self {
            mode: config.mode,
            t_min,
            t_span: t_max - t_min,
            p0,
            p_span,
        })
    }

    pub fn mode(&self) -> AxisMode {
        self.mode
    }

    /// Real value to surface pixel.
    pub fn to_surface(&self, real: f64) -> f64 {
        let norm = (self.mode.transform(real) - self.t_min) / self.t_span;
        self.p0 + norm * self.p_span
    }

    /// Surface pixel to real value.
    pub fn to_real(&self, pixel: f64) -> f64 {
        let norm = (pixel - self.p0) / self.p_span;
        self.mode.invert(self.t_min + norm * self.t_span)
    }
}

/// Both axis transforms over a plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotTransform {
    x: AxisTransform,
    y: AxisTransform,
    plot: SurfaceRect,
}

impl PlotTransform {
    /// X runs left to right across `plot`, y runs bottom to top.
    pub fn new(axes: &Axes, plot: SurfaceRect) -> Option<Self> {
        if !plot.is_valid() {
            return None;
        }
        let x = AxisTransform::new(&axes.x, plot.x, plot.right())?;
        let y = AxisTransform::new(&axes.y, plot.bottom(), plot.y)?;
        Some(Self { x, y, plot })
    }

    pub fn plot(&self) -> SurfaceRect {
        self.plot
    }

    pub fn x(&self) -> &AxisTransform {
        &self.x
    }

    pub fn y(&self) -> &AxisTransform {
        &self.y
    }

    pub fn to_surface(&self, point: Point) -> SurfacePoint {
        SurfacePoint::new(self.x.to_surface(point.x), self.y.to_surface(point.y))
    }

    pub fn to_real(&self, pixel: SurfacePoint) -> Point {
        Point::new(self.x.to_real(pixel.x), self.y.to_real(pixel.y))
    }
}
