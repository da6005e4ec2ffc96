//! Glint WASM - WebAssembly bindings for the Glint photo editor
//!
//! This crate exposes glint-core to the browser page.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for image data
//! - `decode` - Upload decoding bindings
//! - `encode` - PNG export bindings
//! - `transform` - Stateless transform bindings
//! - `session` - Mode-aware editing session
//! - `assist` - Caption and song suggestions
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsSession, JsAssistant, export_file_name } from '@glint/wasm';
//!
//! await init();
//!
//! const session = new JsSession(new Uint8Array(await file.arrayBuffer()), file.name);
//! const edited = session.mood('Sunny');
//! const reply = await new JsAssistant({ api_key }).songs(edited);
//! ```

use wasm_bindgen::prelude::*;

mod assist;
mod decode;
mod encode;
mod log;
mod session;
mod transform;
mod types;

// Re-export public types
pub use assist::JsAssistant;
pub use decode::{accepted_extensions, decode_upload, is_supported_upload};
pub use encode::{encode_png, export_file_name, export_mime_type};
pub use session::JsSession;
pub use transform::{
    brightness, grayscale, highlight, mood_filter, mood_filter_names, resize, text_overlay,
};
pub use types::JsPhotoImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    log::info(&format!("glint-wasm {} loaded", version()));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_init_is_safe_off_wasm() {
        init();
    }
}
