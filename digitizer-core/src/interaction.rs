//! Pointer gestures on background layers.
//!
//! A gesture starts on pointer-down, produces a preview placement on every
//! move and ends on pointer-up, when the host commits the last preview as a
//! single history entry. The session keeps the layer state captured at the
//! start so each move is computed from that state, not from the previous move.

use serde::{Deserialize, Serialize};

use crate::anchor::{
    apply_drag, apply_resize, hit_handle, pick_anchor, recenter_anchor, Anchor, LayerTransform,
    ResizeHandle, ResizeStart,
};
use crate::document::{BackgroundLayer, BackgroundSlot};
use crate::geometry::{SurfacePoint, SurfaceRect};

/// What pointer-down on a layer should do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerMode {
    /// Resize from a handle, drag inside the image, ignore elsewhere.
    #[default]
    Auto,
    /// Drag from anywhere on the surface.
    Move,
    /// Pin a custom anchor at the pointer.
    PickAnchor,
}

/// Transform and anchor of a layer, as previewed or committed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub transform: LayerTransform,
    pub anchor: Anchor,
}

impl Placement {
    pub fn of(layer: &BackgroundLayer) -> Self {
        Self {
            transform: layer.transform,
            anchor: layer.anchor,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionSession {
    #[default]
    Idle,
    Dragging {
        slot: BackgroundSlot,
        pointer_start: SurfacePoint,
        start: Placement,
    },
    Resizing {
        slot: BackgroundSlot,
        handle: ResizeHandle,
        start: ResizeStart,
        keep_aspect: bool,
    },
    /// The anchor follows the pointer until release.
    PickingAnchor {
        slot: BackgroundSlot,
        start: Placement,
        base: SurfaceRect,
    },
}

/// Start a gesture on `layer` shown in `plot`; `Idle` when nothing is under
/// the pointer.
pub fn pointer_down(
    layer: &BackgroundLayer,
    slot: BackgroundSlot,
    plot: SurfaceRect,
    pos: SurfacePoint,
    mode: PointerMode,
    keep_aspect: bool,
    handle_tolerance: f64,
) -> InteractionSession {
    let base = layer.base_rect(plot, keep_aspect);
    let rect = layer.draw_rect(plot, keep_aspect);
    let start = Placement::of(layer);

    match mode {
        PointerMode::PickAnchor => InteractionSession::PickingAnchor { slot, start, base },
        PointerMode::Move => InteractionSession::Dragging {
            slot,
            pointer_start: pos,
            start,
        },
        PointerMode::Auto => {
            if let Some(handle) = hit_handle(&rect, pos, handle_tolerance) {
                log::debug!("layer {slot}: resize from {handle:?}");
                InteractionSession::Resizing {
                    slot,
                    handle,
                    start: ResizeStart {
                        transform: layer.transform,
                        anchor: layer.anchor,
                        base,
                    },
                    keep_aspect,
                }
            } else if rect.contains(pos) {
                InteractionSession::Dragging {
                    slot,
                    pointer_start: pos,
                    start,
                }
            } else {
                InteractionSession::Idle
            }
        }
    }
}

impl InteractionSession {
    pub fn is_active(&self) -> bool {
        !matches!(self, InteractionSession::Idle)
    }

    pub fn slot(&self) -> Option<BackgroundSlot> {
        match self {
            InteractionSession::Idle => None,
            InteractionSession::Dragging { slot, .. }
            | InteractionSession::Resizing { slot, .. }
            | InteractionSession::PickingAnchor { slot, .. } => Some(*slot),
        }
    }

    /// Placement for the pointer at `pos`, or `None` when idle.
    pub fn preview(&self, pos: SurfacePoint) -> Option<(BackgroundSlot, Placement)> {
        match *self {
            InteractionSession::Idle => None,
            InteractionSession::Dragging {
                slot,
                pointer_start,
                start,
            } => {
                let transform = apply_drag(pos.delta_from(&pointer_start), &start.transform);
                Some((slot, Placement { transform, ..start }))
            }
            InteractionSession::Resizing {
                slot,
                handle,
                start,
                keep_aspect,
            } => Some((
                slot,
                Placement {
                    transform: apply_resize(handle, pos, &start, keep_aspect),
                    anchor: start.anchor,
                },
            )),
            InteractionSession::PickingAnchor { slot, start, base } => Some((
                slot,
                Placement {
                    anchor: pick_anchor(&start.transform, &start.anchor, &base, pos),
                    ..start
                },
            )),
        }
    }

    /// Placement the layer had when the gesture started.
    pub fn start_placement(&self) -> Option<Placement> {
        match *self {
            InteractionSession::Idle => None,
            InteractionSession::Dragging { start, .. }
            | InteractionSession::PickingAnchor { start, .. } => Some(start),
            InteractionSession::Resizing { start, .. } => Some(Placement {
                transform: start.transform,
                anchor: start.anchor,
            }),
        }
    }
}

/// Placement that switches `layer` back to the center anchor without moving it.
pub fn center_placement(layer: &BackgroundLayer, plot: SurfaceRect, keep_aspect: bool) -> Placement {
    let base = layer.base_rect(plot, keep_aspect);
    Placement {
        transform: recenter_anchor(&layer.transform, &layer.anchor, &base),
        anchor: Anchor::Center,
    }
}
