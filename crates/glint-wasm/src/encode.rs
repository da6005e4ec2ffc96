//! PNG export WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, export_file_name } from '@glint/wasm';
//!
//! const png = encode_png(image);
//! const link = document.createElement('a');
//! link.href = URL.createObjectURL(new Blob([png], { type: 'image/png' }));
//! link.download = export_file_name();
//! link.click();
//! ```

use crate::types::JsPhotoImage;
use glint_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an image to PNG bytes.
///
/// RGB images become 8-bit RGB PNGs, grayscale images 8-bit grayscale PNGs.
///
/// # Errors
///
/// Returns an error if the image is empty or encoding fails internally.
#[wasm_bindgen]
pub fn encode_png(image: &JsPhotoImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(image.as_photo()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Download file name for exported images.
#[wasm_bindgen]
pub fn export_file_name() -> String {
    encode::EXPORT_FILE_NAME.to_string()
}

/// MIME type of exported images.
#[wasm_bindgen]
pub fn export_mime_type() -> String {
    encode::EXPORT_MIME_TYPE.to_string()
}
