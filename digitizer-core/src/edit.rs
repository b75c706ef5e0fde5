//! The closed set of document edits.
//!
//! Each variant is a pure `Document -> Document` step: the history applies it
//! to a copy of the current snapshot and commits the result only if it
//! succeeds.

use serde::{Deserialize, Serialize};

use crate::anchor::{Anchor, LayerTransform};
use crate::axis::Axes;
use crate::document::{
    BackgroundLayer, BackgroundSlot, Document, GuideAxis, ImageHandle, Point, SeriesId,
};
use crate::error::EditError;
use crate::geometry::Size;
use crate::guides::guide_from_label;
use crate::history::HistoryStore;
use crate::lifetime::i2t_series;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Edit {
    SetAxes {
        axes: Axes,
    },
    AddSeries {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        color: Option<String>,
    },
    RemoveSeries {
        series: SeriesId,
    },
    RenameSeries {
        series: SeriesId,
        name: String,
    },
    RecolorSeries {
        series: SeriesId,
        color: String,
    },
    /// Insert at `index`, or append when absent.
    AddPoint {
        series: SeriesId,
        point: Point,
        #[serde(default)]
        index: Option<usize>,
    },
    MovePoint {
        series: SeriesId,
        index: usize,
        point: Point,
    },
    DeletePoint {
        series: SeriesId,
        index: usize,
    },
    ClearPoints {
        series: SeriesId,
    },
    /// Reorder a series' points by x.
    SortPoints {
        series: SeriesId,
    },
    AddGuide {
        axis: GuideAxis,
        label: String,
    },
    RemoveGuide {
        axis: GuideAxis,
        value: f64,
    },
    /// Place a freshly decoded image in a slot with an identity transform.
    SetBackground {
        slot: BackgroundSlot,
        image: ImageHandle,
        natural_size: Size,
    },
    ClearBackground {
        slot: BackgroundSlot,
    },
    SetLayerTransform {
        slot: BackgroundSlot,
        transform: LayerTransform,
    },
    SetLayerAnchor {
        slot: BackgroundSlot,
        anchor: Anchor,
    },
    /// Set transform and anchor together (switching anchors without a jump).
    SetLayerPlacement {
        slot: BackgroundSlot,
        transform: LayerTransform,
        anchor: Anchor,
    },
    SetLayerOpacity {
        slot: BackgroundSlot,
        opacity: f64,
    },
    SetLayerVisible {
        slot: BackgroundSlot,
        visible: bool,
    },
    /// Back to unit scale, zero offset and the center anchor.
    ResetLayer {
        slot: BackgroundSlot,
    },
    /// Append the cumulative I²t curve of a series as a new series.
    BuildI2tSeries {
        series: SeriesId,
    },
}

impl Edit {
    /// Apply to `doc` in place. On error `doc` may be partially changed, so
    /// callers apply edits to a scratch copy.
    pub fn apply(&self, doc: &mut Document) -> Result<(), EditError> {
        match self {
            Edit::SetAxes { axes } => doc.axes = *axes,
            Edit::AddSeries { name, color } => {
                doc.add_series(name.clone(), color.clone());
            }
            Edit::RemoveSeries { series } => {
                doc.remove_series(*series)?;
            }
            Edit::RenameSeries { series, name } => doc.series_mut(*series)?.name = name.clone(),
            Edit::RecolorSeries { series, color } => {
                doc.series_mut(*series)?.color = color.clone()
            }
            Edit::AddPoint {
                series,
                point,
                index,
            } => doc.add_point(*series, *point, *index)?,
            Edit::MovePoint {
                series,
                index,
                point,
            } => doc.move_point(*series, *index, *point)?,
            Edit::DeletePoint { series, index } => {
                doc.delete_point(*series, *index)?;
            }
            Edit::ClearPoints { series } => doc.series_mut(*series)?.points.clear(),
            Edit::SortPoints { series } => {
                let s = doc.series_mut(*series)?;
                s.points = s.sorted_by_x();
            }
            Edit::AddGuide { axis, label } => doc.guides.insert(guide_from_label(*axis, label)?),
            Edit::RemoveGuide { axis, value } => {
                doc.guides.remove(*axis, *value);
            }
            Edit::SetBackground {
                slot,
                image,
                natural_size,
            } => doc.set_background(
                *slot,
                Some(BackgroundLayer::new(image.clone(), *natural_size)),
            ),
            Edit::ClearBackground { slot } => doc.set_background(*slot, None),
            Edit::SetLayerTransform { slot, transform } => {
                doc.background_mut(*slot)?.transform = transform.clamped()
            }
            Edit::SetLayerAnchor { slot, anchor } => {
                doc.background_mut(*slot)?.anchor = anchor.clamped()
            }
            Edit::SetLayerPlacement {
                slot,
                transform,
                anchor,
            } => {
                let layer = doc.background_mut(*slot)?;
                layer.transform = transform.clamped();
                layer.anchor = anchor.clamped();
            }
            Edit::SetLayerOpacity { slot, opacity } => {
                let opacity = if opacity.is_finite() {
                    opacity.clamp(0.0, 1.0)
                } else {
                    1.0
                };
                doc.background_mut(*slot)?.opacity = opacity;
            }
            Edit::SetLayerVisible { slot, visible } => {
                doc.background_mut(*slot)?.visible = *visible
            }
            Edit::ResetLayer { slot } => {
                let layer = doc.background_mut(*slot)?;
                layer.transform = LayerTransform::default();
                layer.anchor = Anchor::Center;
            }
            Edit::BuildI2tSeries { series } => {
                let source = doc
                    .series(*series)
                    .ok_or(EditError::UnknownSeries(*series))?;
                let derived = i2t_series(source);
                doc.push_series(derived);
            }
        }
        Ok(())
    }
}

impl HistoryStore<Document> {
    /// Commit `edit` as one history entry; nothing is committed on error.
    pub fn apply(&mut self, edit: &Edit) -> Result<&Document, EditError> {
        let result = self.try_edit(|doc| edit.apply(doc));
        if let Err(e) = &result {
            log::warn!("edit rejected: {e}");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::DocumentHistory;

    #[test]
    fn edits_deserialize_from_tagged_json() {
        let edit: Edit =
            serde_json::from_str(r#"{"type":"AddPoint","series":1,"point":{"x":10.0,"y":2.0}}"#)
                .unwrap();
        assert_eq!(
            edit,
            Edit::AddPoint {
                series: SeriesId(1),
                point: Point::new(10.0, 2.0),
                index: None,
            }
        );
    }

    #[test]
    fn each_edit_is_one_undo_step() {
        let mut history = DocumentHistory::default();
        let edits = [
            Edit::AddPoint {
                series: SeriesId(1),
                point: Point::new(10.0, 10.0),
                index: None,
            },
            Edit::AddGuide {
                axis: GuideAxis::X,
                label: "1,000".into(),
            },
            Edit::AddSeries {
                name: None,
                color: None,
            },
        ];
        for edit in &edits {
            history.apply(edit).unwrap();
        }
        assert_eq!(history.len(), 4);
        assert_eq!(history.current().series.len(), 2);
        history.undo();
        assert_eq!(history.current().series.len(), 1);
        assert_eq!(history.current().guides.x[0].source_label, "1,000");
    }

    #[test]
    fn failed_edit_leaves_history_alone() {
        let mut history = DocumentHistory::default();
        let err = history
            .apply(&Edit::SetLayerVisible {
                slot: BackgroundSlot::A,
                visible: false,
            })
            .unwrap_err();
        assert_eq!(err, EditError::EmptySlot(BackgroundSlot::A));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn anchor_fractions_are_clamped_on_commit() {
        let mut history = DocumentHistory::default();
        history
            .apply(&Edit::SetBackground {
                slot: BackgroundSlot::A,
                image: ImageHandle("chart.png".into()),
                natural_size: Size::new(800.0, 600.0),
            })
            .unwrap();
        let picked = Anchor::Custom {
            ax: 120.0,
            ay: 80.0,
            frac_x: 1.5,
            frac_y: -0.25,
        };
        let clamped = Anchor::Custom {
            ax: 120.0,
            ay: 80.0,
            frac_x: 1.0,
            frac_y: 0.0,
        };

        let doc = history
            .apply(&Edit::SetLayerAnchor {
                slot: BackgroundSlot::A,
                anchor: picked,
            })
            .unwrap();
        assert_eq!(doc.background(BackgroundSlot::A).unwrap().anchor, clamped);

        let doc = history
            .apply(&Edit::SetLayerPlacement {
                slot: BackgroundSlot::A,
                transform: LayerTransform::default(),
                anchor: picked,
            })
            .unwrap();
        assert_eq!(doc.background(BackgroundSlot::A).unwrap().anchor, clamped);
    }

    #[test]
    fn layer_transform_is_clamped_on_commit() {
        let mut history = DocumentHistory::default();
        history
            .apply(&Edit::SetBackground {
                slot: BackgroundSlot::A,
                image: ImageHandle("chart.png".into()),
                natural_size: Size::new(800.0, 600.0),
            })
            .unwrap();
        let doc = history
            .apply(&Edit::SetLayerTransform {
                slot: BackgroundSlot::A,
                transform: LayerTransform {
                    scale_x: 500.0,
                    scale_y: 0.0,
                    offset_x: 3.0,
                    offset_y: 4.0,
                },
            })
            .unwrap();
        let layer = doc.background(BackgroundSlot::A).unwrap();
        assert_eq!(layer.transform.scale_x, 50.0);
        assert_eq!(layer.transform.scale_y, 0.05);
        assert_eq!(layer.transform.offset_x, 3.0);
    }

    #[test]
    fn build_i2t_appends_new_series() {
        let mut history = DocumentHistory::default();
        for (x, y) in [(0.0, 10.0), (2.0, 10.0)] {
            history
                .apply(&Edit::AddPoint {
                    series: SeriesId(1),
                    point: Point::new(x, y),
                    index: None,
                })
                .unwrap();
        }
        let doc = history
            .apply(&Edit::BuildI2tSeries {
                series: SeriesId(1),
            })
            .unwrap();
        assert_eq!(doc.series.len(), 2);
        let derived = &doc.series[1];
        assert_eq!(derived.id, SeriesId(2));
        assert_eq!(derived.points.last().unwrap().y, 200.0);
    }

    #[test]
    fn opacity_is_clamped() {
        let mut doc = Document::default();
        Edit::SetBackground {
            slot: BackgroundSlot::B,
            image: ImageHandle("b".into()),
            natural_size: Size::new(1.0, 1.0),
        }
        .apply(&mut doc)
        .unwrap();
        Edit::SetLayerOpacity {
            slot: BackgroundSlot::B,
            opacity: 3.0,
        }
        .apply(&mut doc)
        .unwrap();
        assert_eq!(doc.background(BackgroundSlot::B).unwrap().opacity, 1.0);
    }
}
