//! Browser console logging.
//!
//! Messages go to `console.log` / `console.warn` on wasm32 and are dropped
//! on other targets, where native tests run.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const PREFIX: &str = "[glint]";

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn line(message: &str) -> String {
    format!("{} {}", PREFIX, message)
}

/// Log an informational message.
#[cfg(target_arch = "wasm32")]
pub(crate) fn info(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(&line(message)));
}

/// Log a warning.
#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(&line(message)));
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn info(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(_message: &str) {}
