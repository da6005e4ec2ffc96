//! Editing session WASM bindings.
//!
//! `JsSession` wraps the core session so the page keeps one object per
//! upload. Each control calls the matching method, which clamps the
//! parameters to the UI ranges, switches mode if needed and returns the new
//! working image for display.
//!
//! # Mode indices
//!
//! | Index | Mode             |
//! |-------|------------------|
//! | 0     | Basic Edits      |
//! | 1     | Color & Lighting |
//! | 2     | Advanced Tools   |
//! | 3     | Text & Overlay   |
//!
//! # Example
//!
//! ```typescript
//! import { JsSession } from '@glint/wasm';
//!
//! const session = new JsSession(bytes, file.name);
//! draw(session.brightness(30));
//! draw(session.mood('Warm'));   // brightness 30, then Warm
//! draw(session.brightness(0));  // Warm only
//! draw(session.highlight());    // new mode: starts from the original
//! download(session.export_png());
//! ```

use crate::log;
use crate::types::JsPhotoImage;
use glint_core::decode::PhotoImage;
use glint_core::session::{Command, EditMode, Session};
use glint_core::transform::{MoodFilter, TextOverlay, TransformError};
use wasm_bindgen::prelude::*;

/// One upload being edited.
#[wasm_bindgen]
pub struct JsSession {
    inner: Session,
}

#[wasm_bindgen]
impl JsSession {
    /// Start a session from an uploaded file.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not accepted or the bytes don't
    /// decode.
    #[wasm_bindgen(constructor)]
    pub fn new(bytes: &[u8], file_name: &str) -> Result<JsSession, JsValue> {
        let inner = Session::from_upload(bytes, file_name).map_err(|e| {
            log::warn(&format!("upload {} rejected: {}", file_name, e));
            JsValue::from_str(&e.to_string())
        })?;
        log::info(&format!(
            "session started on {} ({}x{})",
            file_name,
            inner.original().width,
            inner.original().height
        ));
        Ok(Self { inner })
    }

    /// Index of the active mode (see the module docs).
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> u8 {
        mode_index(self.inner.mode())
    }

    /// Label of the active mode.
    #[wasm_bindgen(getter)]
    pub fn mode_label(&self) -> String {
        self.inner.mode().label().to_string()
    }

    /// Mode labels in menu order.
    pub fn mode_labels() -> Vec<String> {
        EditMode::ALL
            .iter()
            .map(|mode| mode.label().to_string())
            .collect()
    }

    /// Switch modes by index. Returns `true` when the mode changed and the
    /// working image was reset.
    ///
    /// # Errors
    ///
    /// Returns an error for an index outside 0..=3.
    pub fn select_mode(&mut self, index: u8) -> Result<bool, JsValue> {
        let mode = EditMode::from_index(index)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown edit mode: {}", index)))?;
        Ok(self.switch_mode(mode))
    }

    /// The uploaded image.
    pub fn original(&self) -> JsPhotoImage {
        JsPhotoImage::from_photo(self.inner.original().clone())
    }

    /// The current working image.
    pub fn working(&self) -> JsPhotoImage {
        JsPhotoImage::from_photo(self.inner.working().clone())
    }

    /// Current brightness slider value.
    #[wasm_bindgen(getter)]
    pub fn brightness_setting(&self) -> i32 {
        self.inner.color().brightness
    }

    /// Label of the current mood filter.
    #[wasm_bindgen(getter)]
    pub fn mood_setting(&self) -> String {
        self.inner.color().mood.name().to_string()
    }

    /// Use a TrueType/OpenType font for text overlays; `undefined` restores
    /// the built-in font.
    pub fn set_font(&mut self, font: Option<Vec<u8>>) {
        self.inner.set_font(font);
    }

    /// Discard the edits of the current mode.
    pub fn reset(&mut self) -> JsPhotoImage {
        self.inner.reset();
        self.working()
    }

    /// Convert to grayscale (Basic Edits).
    pub fn grayscale(&mut self) -> Result<JsPhotoImage, JsValue> {
        self.run(Command::Grayscale)
    }

    /// Resize, clamped to 50..=1000 per side (Basic Edits).
    pub fn resize(&mut self, width: u32, height: u32) -> Result<JsPhotoImage, JsValue> {
        self.run(Command::Resize { width, height })
    }

    /// Set brightness, clamped to -100..=100 (Color & Lighting).
    pub fn brightness(&mut self, delta: i32) -> Result<JsPhotoImage, JsValue> {
        self.run(Command::Brightness(delta))
    }

    /// Select a mood filter by label (Color & Lighting).
    pub fn mood(&mut self, name: &str) -> Result<JsPhotoImage, JsValue> {
        self.run(Command::Mood(MoodFilter::from_name(name)))
    }

    /// Boost contrast and brightness (Advanced Tools).
    pub fn highlight(&mut self) -> Result<JsPhotoImage, JsValue> {
        self.run(Command::Highlight)
    }

    /// Draw white text; position is clamped to the image and size to
    /// 10..=100 (Text & Overlay).
    pub fn text(
        &mut self,
        text: String,
        x: u32,
        y: u32,
        font_size: u32,
    ) -> Result<JsPhotoImage, JsValue> {
        self.run(Command::Text(TextOverlay {
            text,
            x,
            y,
            font_size,
        }))
    }

    /// Encode the working image as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, JsValue> {
        self.inner
            .export_png()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsSession {
    #[cfg(test)]
    pub(crate) fn from_image(image: PhotoImage) -> Self {
        Self {
            inner: Session::new(image),
        }
    }

    fn switch_mode(&mut self, mode: EditMode) -> bool {
        let changed = self.inner.select_mode(mode);
        if changed {
            log::info(&format!("mode: {}", mode.label()));
        }
        changed
    }

    /// Clamp and apply a command, returning the new working image.
    pub(crate) fn apply(&mut self, command: Command) -> Result<&PhotoImage, TransformError> {
        // Switch first so clamping sees the image the command will act on
        self.switch_mode(command.mode());
        let (width, height) = (self.inner.working().width, self.inner.working().height);
        let command = command.clamped(width, height);
        match self.inner.apply(&command) {
            Ok(image) => {
                log::info(&format!(
                    "{:?} -> {}x{}",
                    command, image.width, image.height
                ));
                Ok(image)
            }
            Err(e) => {
                log::warn(&format!("{:?} failed: {}", command, e));
                Err(e)
            }
        }
    }

    fn run(&mut self, command: Command) -> Result<JsPhotoImage, JsValue> {
        self.apply(command)
            .map(|image| JsPhotoImage::from_photo(image.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

fn mode_index(mode: EditMode) -> u8 {
    EditMode::ALL
        .iter()
        .position(|m| *m == mode)
        .unwrap_or_default() as u8
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use glint_core::encode::encode_png;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_from_upload_and_export() {
        let png = encode_png(&PhotoImage::filled(60, 40, [90, 120, 150])).unwrap();
        let mut s = JsSession::new(&png, "photo.PNG").unwrap();
        s.mood("Cool").unwrap();
        let exported = s.export_png().unwrap();
        assert_eq!(&exported[1..4], b"PNG");
    }

    #[wasm_bindgen_test]
    fn test_select_mode_out_of_range() {
        let mut s = JsSession::from_image(PhotoImage::filled(4, 4, [0, 0, 0]));
        assert!(s.select_mode(7).is_err());
        assert!(s.select_mode(3).unwrap());
        assert!(!s.select_mode(3).unwrap());
    }
}
