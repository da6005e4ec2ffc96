//! Upload decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_upload`] - Decode an uploaded JPEG/PNG file
//! - [`is_supported_upload`] - Check a file name against the accepted extensions
//! - [`accepted_extensions`] - Extensions for the file picker's `accept` attribute
//!
//! # Example
//!
//! ```typescript
//! import { decode_upload, is_supported_upload } from '@glint/wasm';
//!
//! if (is_supported_upload(file.name)) {
//!   const bytes = new Uint8Array(await file.arrayBuffer());
//!   const image = decode_upload(bytes, file.name);
//!   console.log(`Decoded ${image.width}x${image.height}`);
//! }
//! ```

use crate::log;
use crate::types::JsPhotoImage;
use glint_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an uploaded image file.
///
/// # Arguments
///
/// * `bytes` - The file contents as a `Uint8Array`
/// * `file_name` - The file's name, used for the extension check
///
/// # Returns
///
/// A 3-channel `JsPhotoImage`.
///
/// # Errors
///
/// Returns an error if:
/// - The extension is not jpg, jpeg or png
/// - The bytes are not a decodable JPEG/PNG
#[wasm_bindgen]
pub fn decode_upload(bytes: &[u8], file_name: &str) -> Result<JsPhotoImage, JsValue> {
    match decode::decode_upload(bytes, file_name) {
        Ok(image) => {
            log::info(&format!(
                "decoded {} ({}x{})",
                file_name, image.width, image.height
            ));
            Ok(JsPhotoImage::from_photo(image))
        }
        Err(e) => {
            log::warn(&format!("upload {} rejected: {}", file_name, e));
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

/// Check whether a file name has an accepted extension (case-insensitive).
#[wasm_bindgen]
pub fn is_supported_upload(file_name: &str) -> bool {
    decode::is_supported_upload(file_name)
}

/// Accepted upload extensions, without the leading dot.
#[wasm_bindgen]
pub fn accepted_extensions() -> Vec<String> {
    decode::ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}


/// WASM-specific tests that require JsValue.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use glint_core::decode::PhotoImage;
    use glint_core::encode::encode_png;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_upload_png() {
        let png = encode_png(&PhotoImage::filled(8, 4, [10, 20, 30])).unwrap();
        let image = decode_upload(&png, "tiny.png").unwrap();
        assert_eq!(image.width(), 8);
        assert_eq!(image.height(), 4);
        assert_eq!(image.channels(), 3);
    }

    #[wasm_bindgen_test]
    fn test_decode_upload_rejects_extension() {
        assert!(decode_upload(&[0, 1, 2, 3], "notes.txt").is_err());
    }

    #[wasm_bindgen_test]
    fn test_decode_upload_corrupt() {
        assert!(decode_upload(&[0, 1, 2, 3], "broken.jpg").is_err());
    }
}
