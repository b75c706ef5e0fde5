//! Anchor-relative placement of background images.
//!
//! A layer is drawn inside a *base rect* (the image fitted into the plot area)
//! scaled by `(scale_x, scale_y)` and shifted by `(offset_x, offset_y)`. The
//! anchor decides which point of the image stays put while the scale changes:
//!
//! - `Center`: the middle of the image sits on the base rect's center plus the
//!   offset.
//! - `Custom`: a picked screen point (plus the current offset) holds the image
//!   at the fractional position `(frac_x, frac_y)` it had when it was picked.
//!
//! The offset is always added to the anchor and never baked into it, so a drag
//! after picking an anchor keeps moving the image.
//!
//! All functions here are pure; callers persist the returned transforms through
//! the history.

use serde::{Deserialize, Serialize};

use crate::config::{
    FRACTION_EPS, NUDGE_STEP, NUDGE_STEP_LARGE, SCALE_MAX, SCALE_MIN, WHEEL_ZOOM_IN,
    WHEEL_ZOOM_OUT,
};
use crate::geometry::{Size, SurfacePoint, SurfaceRect};

/// Scale and offset of a background layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for LayerTransform {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl LayerTransform {
    /// Copy with both scales clamped to `[SCALE_MIN, SCALE_MAX]`.
    pub fn clamped(&self) -> Self {
        Self {
            scale_x: clamp_scale(self.scale_x),
            scale_y: clamp_scale(self.scale_y),
            ..*self
        }
    }
}

/// Fixed point used while resizing a layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Anchor {
    #[default]
    Center,
    Custom {
        /// Picked surface point, without the layer offset.
        ax: f64,
        ay: f64,
        /// Normalized position of the anchor inside the image.
        frac_x: f64,
        frac_y: f64,
    },
}

impl Anchor {
    /// Copy with the image fractions clamped to `[0, 1]`.
    pub fn clamped(&self) -> Self {
        match *self {
            Anchor::Center => Anchor::Center,
            Anchor::Custom {
                ax,
                ay,
                frac_x,
                frac_y,
            } => Anchor::Custom {
                ax,
                ay,
                frac_x: clamp_fraction(frac_x),
                frac_y: clamp_fraction(frac_y),
            },
        }
    }
}

fn clamp_fraction(frac: f64) -> f64 {
    if frac.is_nan() {
        0.5
    } else {
        frac.clamp(0.0, 1.0)
    }
}

/// Which affordance the pointer grabbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    Left,
    Right,
    Top,
    Bottom,
    /// Bottom-right corner; scales both dimensions.
    Uniform,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomDirection {
    In,
    Out,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NudgeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Layer state captured when a resize gesture starts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResizeStart {
    pub transform: LayerTransform,
    pub anchor: Anchor,
    pub base: SurfaceRect,
}

/// Clamp a scale factor into `[SCALE_MIN, SCALE_MAX]`; non-finite input resets to 1.
pub fn clamp_scale(s: f64) -> f64 {
    if s.is_finite() {
        s.clamp(SCALE_MIN, SCALE_MAX)
    } else {
        1.0
    }
}

/// Rectangle an unscaled image occupies inside the plot area.
///
/// With `keep_aspect` the image is fitted and centered; otherwise it is
/// stretched to `plot` exactly. An empty natural size also stretches.
pub fn base_rect(natural: Size, plot: SurfaceRect, keep_aspect: bool) -> SurfaceRect {
    if !keep_aspect || !natural.is_positive() || !plot.is_valid() {
        return plot;
    }
    let fit = (plot.w / natural.w).min(plot.h / natural.h);
    SurfaceRect::from_center(plot.center(), natural.w * fit, natural.h * fit)
}

/// Surface position of the anchor and its fractional position in the image.
pub fn resolve_anchor(
    transform: &LayerTransform,
    anchor: &Anchor,
    base: &SurfaceRect,
) -> (SurfacePoint, f64, f64) {
    match *anchor {
        Anchor::Center => (
            base.center().offset(transform.offset_x, transform.offset_y),
            0.5,
            0.5,
        ),
        Anchor::Custom {
            ax,
            ay,
            frac_x,
            frac_y,
        } => (
            SurfacePoint::new(ax + transform.offset_x, ay + transform.offset_y),
            frac_x,
            frac_y,
        ),
    }
}

/// Rectangle the layer is drawn into.
pub fn draw_rect(transform: &LayerTransform, anchor: &Anchor, base: &SurfaceRect) -> SurfaceRect {
    let dw = base.w * clamp_scale(transform.scale_x);
    let dh = base.h * clamp_scale(transform.scale_y);
    let (a, fx, fy) = resolve_anchor(transform, anchor, base);
    SurfaceRect::new(a.x - fx * dw, a.y - fy * dh, dw, dh)
}

/// Translate the layer by the pointer movement since the drag started.
pub fn apply_drag(delta: (f64, f64), start: &LayerTransform) -> LayerTransform {
    LayerTransform {
        offset_x: start.offset_x + delta.0,
        offset_y: start.offset_y + delta.1,
        ..*start
    }
}

/// One wheel step: scale both axes about the anchor.
pub fn apply_wheel_zoom(direction: ZoomDirection, transform: &LayerTransform) -> LayerTransform {
    let factor = match direction {
        ZoomDirection::In => WHEEL_ZOOM_IN,
        ZoomDirection::Out => WHEEL_ZOOM_OUT,
    };
    LayerTransform {
        scale_x: clamp_scale(transform.scale_x * factor),
        scale_y: clamp_scale(transform.scale_y * factor),
        ..*transform
    }
}

/// Arrow-key movement; `large` is the shift-modified step.
pub fn nudge(transform: &LayerTransform, direction: NudgeDirection, large: bool) -> LayerTransform {
    let step = if large { NUDGE_STEP_LARGE } else { NUDGE_STEP };
    let (dx, dy) = match direction {
        NudgeDirection::Up => (0.0, -step),
        NudgeDirection::Down => (0.0, step),
        NudgeDirection::Left => (-step, 0.0),
        NudgeDirection::Right => (step, 0.0),
    };
    apply_drag((dx, dy), transform)
}

/// One dimension of a resize: the pivot stays fixed while the grabbed edge
/// follows the pointer.
struct Extent {
    pivot: f64,
    frac: f64,
}

impl Extent {
    /// New extent when the grabbed edge lies after the pivot (right/bottom).
    fn towards_end(&self, pointer: f64, current: f64) -> f64 {
        let room = 1.0 - self.frac;
        if room < FRACTION_EPS {
            return current;
        }
        (pointer - self.pivot) / room
    }

    /// New extent when the grabbed edge lies before the pivot (left/top).
    fn towards_start(&self, pointer: f64, current: f64) -> f64 {
        if self.frac < FRACTION_EPS {
            return current;
        }
        (self.pivot - pointer) / self.frac
    }
}

/// Resize a layer from `handle` so the grabbed edge follows `pointer`.
///
/// With a custom anchor, the anchor point stays fixed. With the center anchor,
/// the edge opposite the handle stays fixed (the top-left corner for the
/// uniform handle) and the offset is recomputed to hold it there even after the
/// scale is clamped.
pub fn apply_resize(
    handle: ResizeHandle,
    pointer: SurfacePoint,
    start: &ResizeStart,
    keep_aspect: bool,
) -> LayerTransform {
    let base = start.base;
    if !base.is_valid() {
        return start.transform;
    }
    let rect = draw_rect(&start.transform, &start.anchor, &base);
    let (anchor_pt, fx, fy) = resolve_anchor(&start.transform, &start.anchor, &base);

    let custom = matches!(start.anchor, Anchor::Custom { .. });
    let x_extent = |grab_end: bool| {
        if custom {
            Extent {
                pivot: anchor_pt.x,
                frac: fx,
            }
        } else if grab_end {
            Extent {
                pivot: rect.x,
                frac: 0.0,
            }
        } else {
            Extent {
                pivot: rect.right(),
                frac: 1.0,
            }
        }
    };
    let y_extent = |grab_end: bool| {
        if custom {
            Extent {
                pivot: anchor_pt.y,
                frac: fy,
            }
        } else if grab_end {
            Extent {
                pivot: rect.y,
                frac: 0.0,
            }
        } else {
            Extent {
                pivot: rect.bottom(),
                frac: 1.0,
            }
        }
    };

    let mut next = start.transform.clamped();
    // Pivots of the dimensions that changed, for re-centering the offset.
    let mut x_pivot = None;
    let mut y_pivot = None;

    match handle {
        ResizeHandle::Left | ResizeHandle::Right => {
            let end = handle == ResizeHandle::Right;
            let ext = x_extent(end);
            let w = if end {
                ext.towards_end(pointer.x, rect.w)
            } else {
                ext.towards_start(pointer.x, rect.w)
            };
            next.scale_x = clamp_scale(w / base.w);
            x_pivot = Some(ext);
        }
        ResizeHandle::Top | ResizeHandle::Bottom => {
            let end = handle == ResizeHandle::Bottom;
            let ext = y_extent(end);
            let h = if end {
                ext.towards_end(pointer.y, rect.h)
            } else {
                ext.towards_start(pointer.y, rect.h)
            };
            next.scale_y = clamp_scale(h / base.h);
            y_pivot = Some(ext);
        }
        ResizeHandle::Uniform => {
            let ex = x_extent(true);
            let ey = y_extent(true);
            let w = ex.towards_end(pointer.x, rect.w);
            let h = ey.towards_end(pointer.y, rect.h);
            if keep_aspect {
                let ratio = (w / rect.w).max(h / rect.h);
                next.scale_x = clamp_scale(next.scale_x * ratio);
                next.scale_y = clamp_scale(next.scale_y * ratio);
            } else {
                next.scale_x = clamp_scale(w / base.w);
                next.scale_y = clamp_scale(h / base.h);
            }
            x_pivot = Some(ex);
            y_pivot = Some(ey);
        }
    }

    if !custom {
        let center = base.center();
        if let Some(ext) = x_pivot {
            let w = base.w * next.scale_x;
            let origin = ext.pivot - ext.frac * w;
            next.offset_x = origin + 0.5 * w - center.x;
        }
        if let Some(ext) = y_pivot {
            let h = base.h * next.scale_y;
            let origin = ext.pivot - ext.frac * h;
            next.offset_y = origin + 0.5 * h - center.y;
        }
    }

    next
}

/// Pin a custom anchor at `point` without moving the image.
///
/// The fraction is taken from the current draw rect (clamped to the image), and
/// the stored anchor excludes the current offset so later drags keep adding to it.
pub fn pick_anchor(
    transform: &LayerTransform,
    anchor: &Anchor,
    base: &SurfaceRect,
    point: SurfacePoint,
) -> Anchor {
    let rect = draw_rect(transform, anchor, base);
    let frac_x = ((point.x - rect.x) / rect.w).clamp(0.0, 1.0);
    let frac_y = ((point.y - rect.y) / rect.h).clamp(0.0, 1.0);
    let (frac_x, frac_y) = if frac_x.is_finite() && frac_y.is_finite() {
        (frac_x, frac_y)
    } else {
        (0.5, 0.5)
    };
    Anchor::Custom {
        ax: rect.x + frac_x * rect.w - transform.offset_x,
        ay: rect.y + frac_y * rect.h - transform.offset_y,
        frac_x,
        frac_y,
    }
}

/// Offset that keeps the image in place when switching back to the center anchor.
pub fn recenter_anchor(
    transform: &LayerTransform,
    anchor: &Anchor,
    base: &SurfaceRect,
) -> LayerTransform {
    let rect = draw_rect(transform, anchor, base);
    let (dx, dy) = rect.center().delta_from(&base.center());
    LayerTransform {
        offset_x: dx,
        offset_y: dy,
        ..*transform
    }
}

/// Hit regions of the resize handles: edge midpoints and the bottom-right corner.
pub fn handle_regions(rect: &SurfaceRect, tolerance: f64) -> Vec<(ResizeHandle, SurfaceRect)> {
    let c = rect.center();
    let square = |x: f64, y: f64| {
        SurfaceRect::from_center(SurfacePoint::new(x, y), 2.0 * tolerance, 2.0 * tolerance)
    };
    vec![
        // Corner first so it wins where regions overlap on small images.
        (ResizeHandle::Uniform, square(rect.right(), rect.bottom())),
        (ResizeHandle::Left, square(rect.x, c.y)),
        (ResizeHandle::Right, square(rect.right(), c.y)),
        (ResizeHandle::Top, square(c.x, rect.y)),
        (ResizeHandle::Bottom, square(c.x, rect.bottom())),
    ]
}

/// Handle under `point`, if any.
pub fn hit_handle(rect: &SurfaceRect, point: SurfacePoint, tolerance: f64) -> Option<ResizeHandle> {
    handle_regions(rect, tolerance)
        .into_iter()
        .find(|(_, region)| region.contains(point))
        .map(|(handle, _)| handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn clamped_anchor_keeps_fractions_inside_the_image() {
        let anchor = Anchor::Custom {
            ax: 10.0,
            ay: 20.0,
            frac_x: 2.0,
            frac_y: f64::NAN,
        };
        assert_eq!(
            anchor.clamped(),
            Anchor::Custom {
                ax: 10.0,
                ay: 20.0,
                frac_x: 1.0,
                frac_y: 0.5,
            }
        );
        assert_eq!(Anchor::Center.clamped(), Anchor::Center);
    }

    fn start(transform: LayerTransform, anchor: Anchor) -> ResizeStart {
        ResizeStart {
            transform,
            anchor,
            base: SurfaceRect::new(0.0, 0.0, 200.0, 100.0),
        }
    }

    // ============================================================================
    // Scale clamping
    // ============================================================================

    #[test]
    fn clamp_scale_is_idempotent_and_bounded() {
        let samples = [
            -3.0,
            0.0,
            0.01,
            0.05,
            0.7,
            1.0,
            49.9,
            50.0,
            1e9,
            f64::NAN,
            f64::INFINITY,
        ];
        for s in samples {
            let once = clamp_scale(s);
            assert_eq!(clamp_scale(once), once);
            assert!((SCALE_MIN..=SCALE_MAX).contains(&once));
        }
    }

    // ============================================================================
    // Base and draw rects
    // ============================================================================

    #[test]
    fn base_rect_fits_and_centers_when_keeping_aspect() {
        let plot = SurfaceRect::new(0.0, 0.0, 400.0, 400.0);
        let rect = base_rect(Size::new(200.0, 100.0), plot, true);
        assert_eq!(rect, SurfaceRect::new(0.0, 100.0, 400.0, 200.0));
    }

    #[test]
    fn base_rect_stretches_without_aspect() {
        let plot = SurfaceRect::new(10.0, 10.0, 400.0, 300.0);
        assert_eq!(base_rect(Size::new(200.0, 100.0), plot, false), plot);
        assert_eq!(base_rect(Size::new(0.0, 0.0), plot, true), plot);
    }

    #[test]
    fn center_anchor_scales_about_center() {
        let base = SurfaceRect::new(0.0, 0.0, 200.0, 100.0);
        let t = LayerTransform {
            scale_x: 2.0,
            scale_y: 2.0,
            ..Default::default()
        };
        let rect = draw_rect(&t, &Anchor::Center, &base);
        assert_eq!(rect, SurfaceRect::new(-100.0, -50.0, 400.0, 200.0));
    }

    #[test]
    fn custom_anchor_keeps_fraction_fixed() {
        let base = SurfaceRect::new(0.0, 0.0, 200.0, 100.0);
        let anchor = Anchor::Custom {
            ax: 50.0,
            ay: 25.0,
            frac_x: 0.25,
            frac_y: 0.25,
        };
        for scale in [0.5, 1.0, 3.0] {
            let t = LayerTransform {
                scale_x: scale,
                scale_y: scale,
                ..Default::default()
            };
            let rect = draw_rect(&t, &anchor, &base);
            assert!(close(rect.x + 0.25 * rect.w, 50.0));
            assert!(close(rect.y + 0.25 * rect.h, 25.0));
        }
    }

    #[test]
    fn drag_after_custom_anchor_still_moves_image() {
        let base = SurfaceRect::new(0.0, 0.0, 200.0, 100.0);
        let t = LayerTransform::default();
        let anchor = pick_anchor(&t, &Anchor::Center, &base, SurfacePoint::new(40.0, 30.0));
        let before = draw_rect(&t, &anchor, &base);
        let dragged = apply_drag((15.0, -5.0), &t);
        let after = draw_rect(&dragged, &anchor, &base);
        assert!(close(after.x - before.x, 15.0));
        assert!(close(after.y - before.y, -5.0));
    }

    #[test]
    fn picking_anchor_does_not_move_image() {
        let base = SurfaceRect::new(0.0, 0.0, 200.0, 100.0);
        let t = LayerTransform {
            scale_x: 1.7,
            scale_y: 0.6,
            offset_x: 12.0,
            offset_y: -30.0,
        };
        let before = draw_rect(&t, &Anchor::Center, &base);
        let anchor = pick_anchor(&t, &Anchor::Center, &base, SurfacePoint::new(90.0, -10.0));
        let after = draw_rect(&t, &anchor, &base);
        assert!(close(before.x, after.x) && close(before.y, after.y));
        assert!(close(before.w, after.w) && close(before.h, after.h));
    }

    #[test]
    fn recenter_keeps_image_in_place() {
        let base = SurfaceRect::new(0.0, 0.0, 200.0, 100.0);
        let t = LayerTransform {
            scale_x: 2.0,
            scale_y: 2.0,
            offset_x: 5.0,
            offset_y: 5.0,
        };
        let anchor = Anchor::Custom {
            ax: 10.0,
            ay: 10.0,
            frac_x: 0.1,
            frac_y: 0.2,
        };
        let before = draw_rect(&t, &anchor, &base);
        let recentered = recenter_anchor(&t, &anchor, &base);
        let after = draw_rect(&recentered, &Anchor::Center, &base);
        assert!(close(before.x, after.x) && close(before.y, after.y));
    }

    // ============================================================================
    // Resize
    // ============================================================================

    #[test]
    fn right_handle_keeps_left_edge_for_any_pointer() {
        let t = LayerTransform {
            scale_x: 1.5,
            scale_y: 1.0,
            offset_x: 13.0,
            offset_y: -7.0,
        };
        let s = start(t, Anchor::Center);
        let left_before = draw_rect(&t, &Anchor::Center, &s.base).x;
        for px in [-500.0, -37.0, 0.0, 50.0, 400.0, 5000.0, 1e7] {
            let next = apply_resize(ResizeHandle::Right, SurfacePoint::new(px, 0.0), &s, true);
            let left_after = draw_rect(&next, &Anchor::Center, &s.base).x;
            assert!(close(left_before, left_after), "pointer {px}");
            assert!((SCALE_MIN..=SCALE_MAX).contains(&next.scale_x));
            assert_eq!(next.scale_y, 1.0);
        }
    }

    #[test]
    fn left_handle_keeps_right_edge() {
        let t = LayerTransform::default();
        let s = start(t, Anchor::Center);
        let right_before = draw_rect(&t, &Anchor::Center, &s.base).right();
        let next = apply_resize(ResizeHandle::Left, SurfacePoint::new(-100.0, 0.0), &s, true);
        let rect = draw_rect(&next, &Anchor::Center, &s.base);
        assert!(close(rect.right(), right_before));
        assert!(close(rect.w, 300.0));
    }

    #[test]
    fn bottom_handle_tracks_pointer() {
        let t = LayerTransform::default();
        let s = start(t, Anchor::Center);
        let next = apply_resize(ResizeHandle::Bottom, SurfacePoint::new(0.0, 150.0), &s, true);
        let rect = draw_rect(&next, &Anchor::Center, &s.base);
        assert!(close(rect.y, 0.0));
        assert!(close(rect.bottom(), 150.0));
        assert_eq!(next.scale_x, 1.0);
    }

    #[test]
    fn custom_anchor_resize_keeps_anchor_fixed() {
        let anchor = Anchor::Custom {
            ax: 50.0,
            ay: 50.0,
            frac_x: 0.25,
            frac_y: 0.5,
        };
        let t = LayerTransform::default();
        let s = start(t, anchor);
        // Anchor at x=50 with 3/4 of the width to its right: pointer at 350 -> width 400
        let next = apply_resize(ResizeHandle::Right, SurfacePoint::new(350.0, 0.0), &s, true);
        assert!(close(next.scale_x, 2.0));
        let rect = draw_rect(&next, &anchor, &s.base);
        assert!(close(rect.x + 0.25 * rect.w, 50.0));
        assert!(close(rect.right(), 350.0));
    }

    #[test]
    fn custom_anchor_on_edge_leaves_that_side_unchanged() {
        let anchor = Anchor::Custom {
            ax: 200.0,
            ay: 50.0,
            frac_x: 1.0,
            frac_y: 0.5,
        };
        let t = LayerTransform::default();
        let next = apply_resize(
            ResizeHandle::Right,
            SurfacePoint::new(400.0, 0.0),
            &start(t, anchor),
            true,
        );
        assert_eq!(next.scale_x, 1.0);
    }

    #[test]
    fn uniform_with_aspect_uses_dominant_ratio() {
        let t = LayerTransform::default();
        let s = start(t, Anchor::Center);
        // Width ratio 1.5, height ratio 3.0
        let next = apply_resize(ResizeHandle::Uniform, SurfacePoint::new(300.0, 300.0), &s, true);
        assert!(close(next.scale_x, 3.0));
        assert!(close(next.scale_y, 3.0));
        let rect = draw_rect(&next, &Anchor::Center, &s.base);
        assert!(close(rect.x, 0.0) && close(rect.y, 0.0));
    }

    #[test]
    fn uniform_without_aspect_scales_axes_independently() {
        let t = LayerTransform::default();
        let s = start(t, Anchor::Center);
        let next = apply_resize(ResizeHandle::Uniform, SurfacePoint::new(300.0, 300.0), &s, false);
        assert!(close(next.scale_x, 1.5));
        assert!(close(next.scale_y, 3.0));
    }

    #[test]
    fn resize_past_pivot_clamps_to_minimum() {
        let s = start(LayerTransform::default(), Anchor::Center);
        let next = apply_resize(ResizeHandle::Right, SurfacePoint::new(-50.0, 0.0), &s, true);
        assert_eq!(next.scale_x, SCALE_MIN);
    }

    // ============================================================================
    // Wheel, nudge, handles
    // ============================================================================

    #[test]
    fn wheel_zoom_steps_and_clamps() {
        let t = LayerTransform::default();
        let zoomed = apply_wheel_zoom(ZoomDirection::In, &t);
        assert!(close(zoomed.scale_x, 1.05) && close(zoomed.scale_y, 1.05));
        let out = apply_wheel_zoom(ZoomDirection::Out, &t);
        assert!(close(out.scale_x, 0.95));

        let big = LayerTransform {
            scale_x: 49.9,
            scale_y: 49.9,
            ..Default::default()
        };
        assert_eq!(apply_wheel_zoom(ZoomDirection::In, &big).scale_x, SCALE_MAX);
    }

    #[test]
    fn nudge_uses_large_step_with_shift() {
        let t = LayerTransform::default();
        assert_eq!(nudge(&t, NudgeDirection::Right, false).offset_x, 1.0);
        assert_eq!(nudge(&t, NudgeDirection::Up, true).offset_y, -10.0);
    }

    #[test]
    fn corner_handle_wins_over_edges() {
        let rect = SurfaceRect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(
            hit_handle(&rect, SurfacePoint::new(99.0, 49.0), 8.0),
            Some(ResizeHandle::Uniform)
        );
        assert_eq!(
            hit_handle(&rect, SurfacePoint::new(2.0, 25.0), 8.0),
            Some(ResizeHandle::Left)
        );
        assert_eq!(hit_handle(&rect, SurfacePoint::new(50.0, 25.0), 8.0), None);
    }
}
