use digitizer_core::{
    Anchor, AxisStatus, BackgroundSlot, CycleCurve, Document, Edit, EngineConfig, GuideRow,
    LayerTransform, NudgeDirection, Point, PointerMode, ResizeHandle, SeriesId, SurfacePoint,
    SurfaceRect,
};
use serde::{Deserialize, Serialize};

/// Messages sent from the host to the engine.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum EngineRequest {
    /// Reset to a default document with the given config.
    Init {
        #[serde(default)]
        config: EngineConfig,
    },

    /// Apply one edit as a single history entry.
    Commit { edit: Edit },

    Undo,

    Redo,

    /// Replace the document (and clear history) from preset JSON.
    LoadPreset { json: String },

    ExportPreset,

    /// Replace the document from a `v1:` share string.
    LoadShare { encoded: String },

    ExportShare,

    /// Guide intersections for the current document.
    GuideTable,

    /// Real points to surface pixels inside `plot`.
    ProjectPoints { plot: SurfaceRect, points: Vec<Point> },

    /// Surface pixels (clicks) to real points.
    UnprojectPoints {
        plot: SurfaceRect,
        points: Vec<SurfacePoint>,
    },

    /// Smoothed display path of a series, in surface pixels.
    SmoothSeries { plot: SurfaceRect, series: SeriesId },

    /// Draw rect and handle regions of a background layer.
    LayerGeometry { slot: BackgroundSlot, plot: SurfaceRect },

    /// Start a drag, resize or anchor pick.
    PointerDown {
        slot: BackgroundSlot,
        plot: SurfaceRect,
        pos: SurfacePoint,
        #[serde(default)]
        mode: PointerMode,
    },

    /// Preview the gesture in progress. Nothing is committed.
    PointerMove { pos: SurfacePoint },

    /// Finish the gesture, committing its last preview.
    PointerUp,

    /// Drop the gesture in progress without committing.
    PointerCancel,

    /// One wheel step on a layer.
    Wheel { slot: BackgroundSlot, zoom_in: bool },

    /// Arrow-key move of a layer; `large` when shift is held.
    Nudge {
        slot: BackgroundSlot,
        direction: NudgeDirection,
        #[serde(default)]
        large: bool,
    },

    /// Switch a layer back to the center anchor without moving it.
    CenterAnchor { slot: BackgroundSlot, plot: SurfaceRect },

    /// Equivalent duration of a current series at a constant current.
    EquivalentTime { series: SeriesId, target: f64 },

    /// Scaled curves of a series for each `(cycles, scale_factor)` level.
    LifetimeFamily {
        series: SeriesId,
        ref_x: f64,
        levels: Vec<(f64, f64)>,
    },

    /// Cycle count at which the family reaches `probe` at `ref_x`.
    EquivalentCycles {
        series: SeriesId,
        ref_x: f64,
        levels: Vec<(f64, f64)>,
        probe: f64,
    },
}

/// Messages sent from the engine back to the host.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum EngineResponse {
    /// The current document after a state change.
    Document {
        document: Document,
        can_undo: bool,
        can_redo: bool,
    },

    Preset { json: String },

    Share { encoded: String },

    GuideTable { rows: Vec<GuideRow> },

    Points { points: Vec<Point> },

    SurfacePoints { points: Vec<SurfacePoint> },

    LayerGeometry {
        draw_rect: SurfaceRect,
        handles: Vec<(ResizeHandle, SurfaceRect)>,
    },

    /// Uncommitted placement of a layer during a gesture.
    Preview {
        slot: BackgroundSlot,
        transform: LayerTransform,
        anchor: Anchor,
        draw_rect: SurfaceRect,
    },

    /// Pointer-down hit nothing; no gesture started.
    Idle,

    /// `None` when the value is undefined for the input.
    Value { value: Option<f64> },

    Family { curves: Vec<CycleCurve> },

    /// The axes cannot be drawn; the host shows a warning instead.
    InvalidAxes { x: AxisStatus, y: AxisStatus },

    Error { message: String },
}
