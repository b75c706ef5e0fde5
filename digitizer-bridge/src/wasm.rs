use wasm_bindgen::prelude::*;

use crate::engine::DigitizerEngine;

/// Install the console logger and panic hook. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        _ = console_log::init_with_level(log::Level::Debug);
    }
}

/// One engine per JS handle. Requests and responses are JSON strings.
#[wasm_bindgen]
pub struct WasmEngine {
    inner: DigitizerEngine,
}

impl Default for WasmEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmEngine {
        init_logging();
        WasmEngine {
            inner: DigitizerEngine::default(),
        }
    }

    /// Handle one request; errors come back as an `Error` response.
    pub fn handle(&mut self, request: &str) -> String {
        self.inner.handle_json(request)
    }

    /// Load a preset, throwing on malformed input.
    #[wasm_bindgen(js_name = loadPreset)]
    pub fn load_preset(&mut self, json: &str) -> Result<(), JsValue> {
        self.inner.load_preset(json).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = exportPreset)]
    pub fn export_preset(&self) -> Result<String, JsValue> {
        self.inner.export_preset().map_err(to_js_error)
    }

    /// Load a `v1:` share string (e.g. the URL hash), throwing on failure.
    #[wasm_bindgen(js_name = loadShare)]
    pub fn load_share(&mut self, encoded: &str) -> Result<(), JsValue> {
        self.inner.load_share(encoded).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = exportShare)]
    pub fn export_share(&self) -> Result<String, JsValue> {
        self.inner.export_share().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.inner.history().can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.inner.history().can_redo()
    }
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}
