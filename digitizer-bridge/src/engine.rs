//! The host interaction loop.
//!
//! `DigitizerEngine` owns the document history, the engine config and the
//! pointer gesture in progress. Every request runs to completion; state only
//! changes through history commits, `overwrite` on preset loads, and the
//! gesture session.

use digitizer_core::anchor::{self, handle_regions};
use digitizer_core::interaction::pointer_down;
use digitizer_core::snapshot;
use digitizer_core::{
    apply_wheel_zoom, center_placement, equivalent_cycles, equivalent_time, guide_table,
    lifetime_family, nudge, samples_from_points, smooth_path, BackgroundLayer, BackgroundSlot,
    Document, DocumentHistory, Edit, EditError, EngineConfig, HistoryStore, InteractionSession,
    PlotTransform, PresetError, Series, SeriesId, SurfacePoint, SurfaceRect, ZoomDirection,
};

use crate::error::EngineError;
use crate::messages::{EngineRequest, EngineResponse};

pub struct DigitizerEngine {
    history: DocumentHistory,
    config: EngineConfig,
    session: InteractionSession,
    /// Plot rect and latest pointer position of the gesture in progress.
    gesture_plot: SurfaceRect,
    last_pos: SurfacePoint,
}

impl Default for DigitizerEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl DigitizerEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            history: HistoryStore::new(Document::default()).with_limit(config.history_limit),
            config,
            session: InteractionSession::Idle,
            gesture_plot: SurfaceRect::default(),
            last_pos: SurfacePoint::default(),
        }
    }

    pub fn document(&self) -> &Document {
        self.history.current()
    }

    pub fn history(&self) -> &DocumentHistory {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    /// Replace the document from preset JSON. On error nothing changes.
    pub fn load_preset(&mut self, json: &str) -> Result<(), PresetError> {
        let doc = snapshot::from_json(json)?;
        self.replace_document(doc);
        Ok(())
    }

    pub fn export_preset(&self) -> Result<String, PresetError> {
        snapshot::to_json(self.document())
    }

    /// Replace the document from a share string. On error nothing changes.
    pub fn load_share(&mut self, encoded: &str) -> Result<(), PresetError> {
        let doc = snapshot::decode_share(encoded)?;
        self.replace_document(doc);
        Ok(())
    }

    pub fn export_share(&self) -> Result<String, PresetError> {
        snapshot::encode_share(self.document())
    }

    /// Handle a JSON request and return the JSON response.
    pub fn handle_json(&mut self, request: &str) -> String {
        let response = match serde_json::from_str::<EngineRequest>(request) {
            Ok(request) => self.handle(request),
            Err(e) => error_response(EngineError::from(e)),
        };
        serde_json::to_string(&response).unwrap_or_else(|e| {
            serde_json::json!({ "type": "Error", "message": e.to_string() }).to_string()
        })
    }

    pub fn handle(&mut self, request: EngineRequest) -> EngineResponse {
        self.dispatch(request).unwrap_or_else(error_response)
    }

    fn dispatch(&mut self, request: EngineRequest) -> Result<EngineResponse, EngineError> {
        let response = match request {
            EngineRequest::Init { config } => {
                *self = Self::new(config);
                log::info!("engine initialized: {:?}", self.config);
                self.document_response()
            }
            EngineRequest::Commit { edit } => {
                self.apply(&edit)?;
                self.document_response()
            }
            EngineRequest::Undo => {
                if self.history.undo() {
                    self.session = InteractionSession::Idle;
                }
                self.document_response()
            }
            EngineRequest::Redo => {
                if self.history.redo() {
                    self.session = InteractionSession::Idle;
                }
                self.document_response()
            }
            EngineRequest::LoadPreset { json } => {
                self.load_preset(&json)?;
                self.document_response()
            }
            EngineRequest::ExportPreset => EngineResponse::Preset {
                json: self.export_preset()?,
            },
            EngineRequest::LoadShare { encoded } => {
                self.load_share(&encoded)?;
                self.document_response()
            }
            EngineRequest::ExportShare => EngineResponse::Share {
                encoded: self.export_share()?,
            },
            EngineRequest::GuideTable => EngineResponse::GuideTable {
                rows: guide_table(self.document()),
            },
            EngineRequest::ProjectPoints { plot, points } => match self.plot_transform(plot) {
                Some(t) => EngineResponse::SurfacePoints {
                    points: points.into_iter().map(|p| t.to_surface(p)).collect(),
                },
                None => self.invalid_axes(),
            },
            EngineRequest::UnprojectPoints { plot, points } => match self.plot_transform(plot) {
                Some(t) => EngineResponse::Points {
                    points: points.into_iter().map(|p| t.to_real(p)).collect(),
                },
                None => self.invalid_axes(),
            },
            EngineRequest::SmoothSeries { plot, series } => {
                let points = self.series(series)?.sorted_by_x();
                match self.plot_transform(plot) {
                    Some(t) => {
                        let surface: Vec<SurfacePoint> =
                            points.into_iter().map(|p| t.to_surface(p)).collect();
                        EngineResponse::SurfacePoints {
                            points: smooth_path(&surface, self.config.smooth_alpha),
                        }
                    }
                    None => self.invalid_axes(),
                }
            }
            EngineRequest::LayerGeometry { slot, plot } => {
                let rect = self.layer(slot)?.draw_rect(plot, self.config.keep_aspect);
                EngineResponse::LayerGeometry {
                    draw_rect: rect,
                    handles: handle_regions(&rect, self.config.handle_tolerance),
                }
            }
            EngineRequest::PointerDown {
                slot,
                plot,
                pos,
                mode,
            } => {
                let session = pointer_down(
                    self.layer(slot)?,
                    slot,
                    plot,
                    pos,
                    mode,
                    self.config.keep_aspect,
                    self.config.handle_tolerance,
                );
                self.session = session;
                self.gesture_plot = plot;
                self.last_pos = pos;
                self.preview_response()?
            }
            EngineRequest::PointerMove { pos } => {
                if self.session.is_active() {
                    self.last_pos = pos;
                }
                self.preview_response()?
            }
            EngineRequest::PointerUp => {
                self.finish_gesture()?;
                self.document_response()
            }
            EngineRequest::PointerCancel => {
                self.session = InteractionSession::Idle;
                self.document_response()
            }
            EngineRequest::Wheel { slot, zoom_in } => {
                let direction = if zoom_in {
                    ZoomDirection::In
                } else {
                    ZoomDirection::Out
                };
                let transform = apply_wheel_zoom(direction, &self.layer(slot)?.transform);
                self.apply(&Edit::SetLayerTransform { slot, transform })?;
                self.document_response()
            }
            EngineRequest::Nudge {
                slot,
                direction,
                large,
            } => {
                let transform = nudge(&self.layer(slot)?.transform, direction, large);
                self.apply(&Edit::SetLayerTransform { slot, transform })?;
                self.document_response()
            }
            EngineRequest::CenterAnchor { slot, plot } => {
                let placement = center_placement(self.layer(slot)?, plot, self.config.keep_aspect);
                self.apply(&Edit::SetLayerPlacement {
                    slot,
                    transform: placement.transform,
                    anchor: placement.anchor,
                })?;
                self.document_response()
            }
            EngineRequest::EquivalentTime { series, target } => {
                let samples = samples_from_points(&self.series(series)?.points);
                EngineResponse::Value {
                    value: equivalent_time(&samples, target),
                }
            }
            EngineRequest::LifetimeFamily {
                series,
                ref_x,
                levels,
            } => EngineResponse::Family {
                curves: lifetime_family(&self.series(series)?.points, ref_x, &levels),
            },
            EngineRequest::EquivalentCycles {
                series,
                ref_x,
                levels,
                probe,
            } => {
                let family = lifetime_family(&self.series(series)?.points, ref_x, &levels);
                EngineResponse::Value {
                    value: equivalent_cycles(&family, probe),
                }
            }
        };
        Ok(response)
    }

    /// Commit the gesture's last preview as one history entry, unless the
    /// pointer never changed the layer.
    fn finish_gesture(&mut self) -> Result<(), EngineError> {
        let session = std::mem::take(&mut self.session);
        let Some((slot, placement)) = session.preview(self.last_pos) else {
            return Ok(());
        };
        if session.start_placement() == Some(placement) {
            return Ok(());
        }
        self.history.apply(&Edit::SetLayerPlacement {
            slot,
            transform: placement.transform,
            anchor: placement.anchor,
        })?;
        log::debug!("layer {slot}: gesture committed");
        Ok(())
    }

    fn preview_response(&self) -> Result<EngineResponse, EngineError> {
        let Some((slot, placement)) = self.session.preview(self.last_pos) else {
            return Ok(EngineResponse::Idle);
        };
        let base = self
            .layer(slot)?
            .base_rect(self.gesture_plot, self.config.keep_aspect);
        Ok(EngineResponse::Preview {
            slot,
            transform: placement.transform,
            anchor: placement.anchor,
            draw_rect: anchor::draw_rect(&placement.transform, &placement.anchor, &base),
        })
    }

    /// Commit an edit. A gesture in progress started from the old document,
    /// so it is dropped.
    fn apply(&mut self, edit: &Edit) -> Result<(), EditError> {
        self.history.apply(edit)?;
        self.session = InteractionSession::Idle;
        Ok(())
    }

    fn replace_document(&mut self, doc: Document) {
        self.history.overwrite(doc);
        self.session = InteractionSession::Idle;
    }

    fn document_response(&self) -> EngineResponse {
        EngineResponse::Document {
            document: self.document().clone(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }

    fn plot_transform(&self, plot: SurfaceRect) -> Option<PlotTransform> {
        PlotTransform::new(&self.document().axes, plot)
    }

    fn invalid_axes(&self) -> EngineResponse {
        let axes = &self.document().axes;
        EngineResponse::InvalidAxes {
            x: axes.x.status(),
            y: axes.y.status(),
        }
    }

    fn layer(&self, slot: BackgroundSlot) -> Result<&BackgroundLayer, EditError> {
        self.document()
            .background(slot)
            .ok_or(EditError::EmptySlot(slot))
    }

    fn series(&self, id: SeriesId) -> Result<&Series, EditError> {
        self.document()
            .series(id)
            .ok_or(EditError::UnknownSeries(id))
    }
}

fn error_response(e: EngineError) -> EngineResponse {
    log::warn!("request failed: {e}");
    EngineResponse::Error {
        message: e.to_string(),
    }
}
