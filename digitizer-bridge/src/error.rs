//! Bridge error types.

use digitizer_core::{EditError, PresetError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed request: {0}")]
    Request(#[from] serde_json::Error),

    #[error(transparent)]
    Preset(#[from] PresetError),

    #[error(transparent)]
    Edit(#[from] EditError),
}
