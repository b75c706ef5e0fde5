pub mod anchor;
pub mod axis;
pub mod config;
pub mod document;
pub mod edit;
pub mod error;
pub mod geometry;
pub mod guides;
pub mod history;
pub mod interaction;
pub mod interpolate;
pub mod lifetime;
pub mod snapshot;

pub use anchor::{
    apply_drag, apply_resize, apply_wheel_zoom, base_rect, clamp_scale, draw_rect, hit_handle,
    nudge, pick_anchor, recenter_anchor, Anchor, LayerTransform, NudgeDirection, ResizeHandle,
    ResizeStart, ZoomDirection,
};
pub use axis::{Axes, AxisConfig, AxisMode, AxisStatus, AxisTransform, PlotTransform};
pub use config::EngineConfig;
pub use document::{
    BackgroundLayer, BackgroundSlot, Document, GuideAxis, GuideLine, Guides, ImageHandle, Point,
    Series, SeriesId,
};
pub use edit::Edit;
pub use error::{EditError, PresetError};
pub use geometry::{Size, SurfacePoint, SurfaceRect};
pub use guides::{guide_from_label, guide_table, parse_guide_value, GuideHit, GuideRow};
pub use history::{DocumentHistory, HistoryStore};
pub use interaction::{center_placement, pointer_down, InteractionSession, Placement, PointerMode};
pub use interpolate::{smooth_path, value_at_x, value_at_y};
pub use lifetime::{
    cumulative_curve, equivalent_cycles, equivalent_time, i2t_series, integrate, lifetime_family,
    samples_from_points, scaled_lifetime_curve, CycleCurve, Sample, ScaledCurve,
};
pub use snapshot::{decode_share, encode_share, from_json, to_json};
