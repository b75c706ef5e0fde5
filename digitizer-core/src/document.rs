//! The editable document: axes, series, guides and background layers.
//!
//! A `Document` is a plain value. The history stores consecutive copies of it
//! and every edit produces a new one, so nothing here is shared or mutated in
//! place once it has been committed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::anchor::{self, Anchor, LayerTransform};
use crate::axis::Axes;
use crate::config::palette_color;
use crate::error::EditError;
use crate::geometry::{Size, SurfaceRect};

/// Data point in real (untransformed) units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(pub u32);

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One digitized curve.
///
/// Points keep the order they were added in; use [`Series::sorted_by_x`] for
/// rendering and interpolation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: SeriesId,
    pub name: String,
    pub color: String,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(id: SeriesId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            points: Vec::new(),
        }
    }

    pub fn with_points(mut self, points: Vec<Point>) -> Self {
        self.points = points;
        self
    }

    /// Points ordered by x (stable for equal x).
    pub fn sorted_by_x(&self) -> Vec<Point> {
        let mut points = self.points.clone();
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        points
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideAxis {
    X,
    Y,
}

/// A constant-x or constant-y reference line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub axis: GuideAxis,
    pub value: f64,
    /// The text the user typed, kept verbatim (e.g. "1,000").
    pub source_label: String,
}

/// Guide lines per axis. No two guides on one axis share a value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Guides {
    pub x: Vec<GuideLine>,
    pub y: Vec<GuideLine>,
}

impl Guides {
    pub fn for_axis(&self, axis: GuideAxis) -> &[GuideLine] {
        match axis {
            GuideAxis::X => &self.x,
            GuideAxis::Y => &self.y,
        }
    }

    fn for_axis_mut(&mut self, axis: GuideAxis) -> &mut Vec<GuideLine> {
        match axis {
            GuideAxis::X => &mut self.x,
            GuideAxis::Y => &mut self.y,
        }
    }

    /// Insert a guide, replacing the label of an existing guide with the same value.
    /// Guides stay ordered by value.
    pub fn insert(&mut self, guide: GuideLine) {
        let list = self.for_axis_mut(guide.axis);
        match list.iter_mut().find(|g| g.value == guide.value) {
            Some(existing) => existing.source_label = guide.source_label,
            None => {
                list.push(guide);
                list.sort_by(|a, b| a.value.total_cmp(&b.value));
            }
        }
    }

    /// Remove the guide with `value`; returns whether one was removed.
    pub fn remove(&mut self, axis: GuideAxis, value: f64) -> bool {
        let list = self.for_axis_mut(axis);
        let before = list.len();
        list.retain(|g| g.value != value);
        list.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty()
    }
}

/// Opaque key the host uses to find a decoded bitmap. Never contains image bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageHandle(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackgroundSlot {
    A,
    B,
}

impl BackgroundSlot {
    pub const ALL: [BackgroundSlot; 2] = [BackgroundSlot::A, BackgroundSlot::B];

    pub fn index(self) -> usize {
        match self {
            BackgroundSlot::A => 0,
            BackgroundSlot::B => 1,
        }
    }
}

impl fmt::Display for BackgroundSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundSlot::A => write!(f, "A"),
            BackgroundSlot::B => write!(f, "B"),
        }
    }
}

/// A reference image laid under the plot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundLayer {
    pub image: ImageHandle,
    pub natural_size: Size,
    pub transform: LayerTransform,
    pub anchor: Anchor,
    pub opacity: f64,
    pub visible: bool,
}

impl BackgroundLayer {
    pub fn new(image: ImageHandle, natural_size: Size) -> Self {
        Self {
            image,
            natural_size,
            transform: LayerTransform::default(),
            anchor: Anchor::Center,
            opacity: 1.0,
            visible: true,
        }
    }

    pub fn base_rect(&self, plot: SurfaceRect, keep_aspect: bool) -> SurfaceRect {
        anchor::base_rect(self.natural_size, plot, keep_aspect)
    }

    pub fn draw_rect(&self, plot: SurfaceRect, keep_aspect: bool) -> SurfaceRect {
        let base = self.base_rect(plot, keep_aspect);
        anchor::draw_rect(&self.transform, &self.anchor, &base)
    }
}

/// The full undoable state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub axes: Axes,
    pub series: Vec<Series>,
    pub backgrounds: [Option<BackgroundLayer>; 2],
    pub guides: Guides,
}

impl Default for Document {
    /// Default axes and a single empty series to click into.
    fn default() -> Self {
        Self {
            axes: Axes::default(),
            series: vec![Series::new(SeriesId(1), "Series 1", palette_color(0))],
            backgrounds: [None, None],
            guides: Guides::default(),
        }
    }
}

impl Document {
    /// Document with default axes and no series.
    pub fn empty() -> Self {
        Self {
            series: Vec::new(),
            ..Self::default()
        }
    }

    pub fn series(&self, id: SeriesId) -> Option<&Series> {
        self.series.iter().find(|s| s.id == id)
    }

    pub fn series_mut(&mut self, id: SeriesId) -> Result<&mut Series, EditError> {
        self.series
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(EditError::UnknownSeries(id))
    }

    pub fn next_series_id(&self) -> SeriesId {
        next_free_id(self.series.iter().map(|s| s.id))
    }

    /// Append a series; unnamed series get "Series N", uncolored ones the next palette color.
    pub fn add_series(&mut self, name: Option<String>, color: Option<String>) -> SeriesId {
        let id = self.next_series_id();
        let name = name.unwrap_or_else(|| format!("Series {}", id.0));
        let color = color.unwrap_or_else(|| palette_color(self.series.len()).to_string());
        self.series.push(Series::new(id, name, color));
        id
    }

    /// Append an already built series under a fresh id.
    pub fn push_series(&mut self, mut series: Series) -> SeriesId {
        let id = self.next_series_id();
        series.id = id;
        self.series.push(series);
        id
    }

    pub fn remove_series(&mut self, id: SeriesId) -> Result<Series, EditError> {
        let index = self
            .series
            .iter()
            .position(|s| s.id == id)
            .ok_or(EditError::UnknownSeries(id))?;
        Ok(self.series.remove(index))
    }

    /// Insert a point at `index`, or append when `index` is `None`.
    pub fn add_point(
        &mut self,
        id: SeriesId,
        point: Point,
        index: Option<usize>,
    ) -> Result<(), EditError> {
        let series = self.series_mut(id)?;
        match index {
            None => series.points.push(point),
            Some(index) if index <= series.points.len() => series.points.insert(index, point),
            Some(index) => return Err(EditError::PointOutOfRange { series: id, index }),
        }
        Ok(())
    }

    pub fn move_point(&mut self, id: SeriesId, index: usize, point: Point) -> Result<(), EditError> {
        let series = self.series_mut(id)?;
        let slot = series
            .points
            .get_mut(index)
            .ok_or(EditError::PointOutOfRange { series: id, index })?;
        *slot = point;
        Ok(())
    }

    pub fn delete_point(&mut self, id: SeriesId, index: usize) -> Result<Point, EditError> {
        let series = self.series_mut(id)?;
        if index >= series.points.len() {
            return Err(EditError::PointOutOfRange { series: id, index });
        }
        Ok(series.points.remove(index))
    }

    pub fn background(&self, slot: BackgroundSlot) -> Option<&BackgroundLayer> {
        self.backgrounds[slot.index()].as_ref()
    }

    pub fn background_mut(&mut self, slot: BackgroundSlot) -> Result<&mut BackgroundLayer, EditError> {
        self.backgrounds[slot.index()]
            .as_mut()
            .ok_or(EditError::EmptySlot(slot))
    }

    pub fn set_background(&mut self, slot: BackgroundSlot, layer: Option<BackgroundLayer>) {
        self.backgrounds[slot.index()] = layer;
    }
}

/// One past the largest id in use, or the lowest unused id once the largest
/// is `u32::MAX`.
pub(crate) fn next_free_id(ids: impl Iterator<Item = SeriesId> + Clone) -> SeriesId {
    let max = ids.clone().map(|id| id.0).max().unwrap_or(0);
    if let Some(next) = max.checked_add(1) {
        return SeriesId(next);
    }
    let mut used: Vec<u32> = ids.map(|id| id.0).collect();
    used.sort_unstable();
    let mut candidate = 1u32;
    for id in used {
        if id > candidate {
            break;
        }
        if id == candidate {
            candidate = candidate.saturating_add(1);
        }
    }
    SeriesId(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_has_one_series_and_default_axes() {
        let doc = Document::default();
        assert_eq!(doc.series.len(), 1);
        assert_eq!(doc.series[0].id, SeriesId(1));
        assert_eq!(doc.axes.x.min, 10.0);
        assert_eq!(doc.axes.y.min, 1e-4);
        assert!(doc.backgrounds.iter().all(Option::is_none));
    }

    #[test]
    fn series_ids_follow_the_largest() {
        let mut doc = Document::empty();
        let a = doc.add_series(None, None);
        let b = doc.add_series(Some("Fuse".into()), None);
        doc.remove_series(a).unwrap();
        let c = doc.add_series(None, None);
        assert_eq!(b, SeriesId(2));
        assert_eq!(c, SeriesId(3));
        assert_eq!(doc.series(b).unwrap().name, "Fuse");
        assert_eq!(doc.series(c).unwrap().name, "Series 3");
    }

    #[test]
    fn series_ids_reuse_gaps_after_the_largest_id() {
        let mut doc = Document::empty();
        doc.series.push(Series::new(SeriesId(1), "a", "#000"));
        doc.series.push(Series::new(SeriesId(u32::MAX), "b", "#000"));
        assert_eq!(doc.add_series(None, None), SeriesId(2));
        assert_eq!(doc.add_series(None, None), SeriesId(3));
        let pushed = doc.push_series(Series::new(SeriesId(9), "c", "#000"));
        assert_eq!(pushed, SeriesId(4));
    }

    #[test]
    fn points_insert_at_any_position() {
        let mut doc = Document::default();
        let id = SeriesId(1);
        doc.add_point(id, Point::new(1.0, 1.0), None).unwrap();
        doc.add_point(id, Point::new(3.0, 3.0), None).unwrap();
        doc.add_point(id, Point::new(2.0, 2.0), Some(0)).unwrap();
        let xs: Vec<f64> = doc.series(id).unwrap().points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 1.0, 3.0]);

        let sorted: Vec<f64> = doc.series(id).unwrap().sorted_by_x().iter().map(|p| p.x).collect();
        assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn point_edits_report_bad_indices() {
        let mut doc = Document::default();
        let id = SeriesId(1);
        assert_eq!(
            doc.add_point(id, Point::new(0.0, 0.0), Some(2)),
            Err(EditError::PointOutOfRange { series: id, index: 2 })
        );
        assert!(doc.move_point(id, 0, Point::new(0.0, 0.0)).is_err());
        assert!(doc.delete_point(id, 0).is_err());
        assert_eq!(
            doc.add_point(SeriesId(9), Point::new(0.0, 0.0), None),
            Err(EditError::UnknownSeries(SeriesId(9)))
        );
    }

    #[test]
    fn guides_dedupe_by_value_and_stay_sorted() {
        let mut guides = Guides::default();
        for (value, label) in [(100.0, "100"), (10.0, "10"), (100.0, "1e2")] {
            guides.insert(GuideLine {
                axis: GuideAxis::X,
                value,
                source_label: label.into(),
            });
        }
        assert_eq!(guides.x.len(), 2);
        assert_eq!(guides.x[0].value, 10.0);
        assert_eq!(guides.x[1].source_label, "1e2");
        assert!(guides.remove(GuideAxis::X, 10.0));
        assert!(!guides.remove(GuideAxis::Y, 10.0));
    }

    #[test]
    fn empty_background_slot_is_an_error() {
        let mut doc = Document::default();
        assert_eq!(
            doc.background_mut(BackgroundSlot::B).unwrap_err(),
            EditError::EmptySlot(BackgroundSlot::B)
        );
        doc.set_background(
            BackgroundSlot::B,
            Some(BackgroundLayer::new(
                ImageHandle("img-1".into()),
                Size::new(640.0, 480.0),
            )),
        );
        assert!(doc.background_mut(BackgroundSlot::B).is_ok());
        assert!(doc.background(BackgroundSlot::A).is_none());
    }
}
