//! Error types surfaced by the engine.
//!
//! Only malformed input and edits that reference something missing are errors.
//! Out-of-domain values, invalid axes and out-of-range scales degrade silently
//! (clamp, `None`, or an invalid status) instead.

use thiserror::Error;

use crate::document::{BackgroundSlot, SeriesId};

/// Rejected preset or share string; the current document is left untouched.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("Preset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Preset has an invalid structure: {0}")]
    Structure(String),

    #[error("Share string is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("Share string could not be decompressed: {0}")]
    Compression(#[from] std::io::Error),

    #[error("Unsupported share string version: {0}")]
    UnsupportedVersion(String),

    #[error("Share string expands past {0} bytes")]
    TooLarge(usize),
}

/// An edit that cannot be applied to the current document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("No series with id {0}")]
    UnknownSeries(SeriesId),

    #[error("Series {series} has no point at index {index}")]
    PointOutOfRange { series: SeriesId, index: usize },

    #[error("Background slot {0} is empty")]
    EmptySlot(BackgroundSlot),

    #[error("Guide label {0:?} is not a number")]
    InvalidGuideLabel(String),
}
