pub mod engine;
pub mod error;
pub mod messages;
pub mod wasm;

pub use engine::DigitizerEngine;
pub use error::EngineError;
pub use messages::{EngineRequest, EngineResponse};
pub use wasm::WasmEngine;

// Re-export core types for convenience
pub use digitizer_core::*;
