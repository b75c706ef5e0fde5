//! Engine configuration and shared numeric constants.
//!
//! Every clamp, epsilon and step used by the axis and anchor math lives here so
//! the transforms agree on the same limits.

use serde::{Deserialize, Serialize};

use crate::axis::{AxisConfig, AxisMode};

/// Floor applied to values before `log10` on a logarithmic axis.
pub const LOG_DOMAIN_EPS: f64 = 1e-12;

/// Smallest layer scale factor.
pub const SCALE_MIN: f64 = 0.05;

/// Largest layer scale factor.
pub const SCALE_MAX: f64 = 50.0;

/// Scale multiplier for one wheel step towards the viewer.
pub const WHEEL_ZOOM_IN: f64 = 1.05;

/// Scale multiplier for one wheel step away from the viewer.
pub const WHEEL_ZOOM_OUT: f64 = 0.95;

/// Arrow-key nudge in surface pixels.
pub const NUDGE_STEP: f64 = 1.0;

/// Arrow-key nudge with shift held.
pub const NUDGE_STEP_LARGE: f64 = 10.0;

/// Half-size of a resize handle's hit region, in surface pixels.
pub const HANDLE_TOLERANCE: f64 = 8.0;

/// Segments narrower than this in transformed space are treated as vertical.
pub const SEGMENT_EPS: f64 = 1e-12;

/// Anchor fractions closer than this to an edge leave no room to resize from it.
pub const FRACTION_EPS: f64 = 1e-6;

/// Largest preset JSON a share string may expand to.
pub const MAX_SHARE_JSON_BYTES: usize = 8 * 1024 * 1024;

/// Samples emitted per segment by `smooth_path`.
pub const SMOOTH_SEGMENT_STEPS: usize = 16;

/// Default tangent scale for display smoothing.
pub const DEFAULT_SMOOTH_ALPHA: f64 = 0.5;

/// Colors handed out to new series, cycled in order.
pub const SERIES_PALETTE: &[&str] = &[
    "#1f77b4", "#d62728", "#2ca02c", "#ff7f0e", "#9467bd", "#8c564b", "#e377c2", "#17becf",
];

/// X axis on a fresh document: 10 .. 1e6, logarithmic.
pub const DEFAULT_X_AXIS: AxisConfig = AxisConfig {
    min: 10.0,
    max: 1e6,
    mode: AxisMode::Log10,
};

/// Y axis on a fresh document: 1e-4 .. 1e6, logarithmic.
pub const DEFAULT_Y_AXIS: AxisConfig = AxisConfig {
    min: 1e-4,
    max: 1e6,
    mode: AxisMode::Log10,
};

/// Host-tunable engine behaviour.
///
/// Missing fields deserialize to their defaults so a host can send a partial
/// config at init.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fit background images preserving their aspect ratio.
    pub keep_aspect: bool,
    /// Tangent scale used when smoothing series for display.
    pub smooth_alpha: f64,
    /// Maximum number of history snapshots kept; `None` keeps everything.
    pub history_limit: Option<usize>,
    /// Hit-test tolerance for resize handles.
    pub handle_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            keep_aspect: true,
            smooth_alpha: DEFAULT_SMOOTH_ALPHA,
            history_limit: Some(200),
            handle_tolerance: HANDLE_TOLERANCE,
        }
    }
}

/// Color for the `index`-th series created in a document.
pub fn palette_color(index: usize) -> &'static str {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}
