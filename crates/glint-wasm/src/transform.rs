//! Stateless transform WASM bindings.
//!
//! Each function borrows its input image and returns a new one; nothing is
//! remembered between calls. For mode-aware editing use `JsSession`.
//!
//! # Example
//!
//! ```typescript
//! import { brightness, mood_filter, grayscale } from '@glint/wasm';
//!
//! const brighter = brightness(image, 40);
//! const dreamy = mood_filter(brighter, 'Dreamy');
//! const gray = grayscale(dreamy); // gray.channels === 1
//! ```

use crate::types::JsPhotoImage;
use glint_core::transform::{self, MoodFilter, TextOverlay};
use wasm_bindgen::prelude::*;

/// Shift brightness by `delta` on the luma axis, saturating to [0, 255].
#[wasm_bindgen]
pub fn brightness(image: &JsPhotoImage, delta: i32) -> JsPhotoImage {
    JsPhotoImage::from_photo(transform::brightness(image.as_photo(), delta))
}

/// Resize to exactly `width` x `height`.
///
/// # Errors
///
/// Returns an error if either dimension is zero.
#[wasm_bindgen]
pub fn resize(image: &JsPhotoImage, width: u32, height: u32) -> Result<JsPhotoImage, JsValue> {
    transform::resize(image.as_photo(), width, height)
        .map(JsPhotoImage::from_photo)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert to single-channel luma.
#[wasm_bindgen]
pub fn grayscale(image: &JsPhotoImage) -> JsPhotoImage {
    JsPhotoImage::from_photo(transform::grayscale(image.as_photo()))
}

/// Boost contrast and brightness (gain 1.2, offset +10).
#[wasm_bindgen]
pub fn highlight(image: &JsPhotoImage) -> JsPhotoImage {
    JsPhotoImage::from_photo(transform::highlight(image.as_photo()))
}

/// Apply a mood filter by picker label.
///
/// Unknown labels behave like `"None"` and return an unchanged copy.
#[wasm_bindgen]
pub fn mood_filter(image: &JsPhotoImage, name: &str) -> JsPhotoImage {
    JsPhotoImage::from_photo(transform::mood_filter(
        image.as_photo(),
        MoodFilter::from_name(name),
    ))
}

/// Mood filter labels in picker order.
#[wasm_bindgen]
pub fn mood_filter_names() -> Vec<String> {
    MoodFilter::ALL
        .iter()
        .map(|mood| mood.name().to_string())
        .collect()
}

/// Draw white text with its top-left corner at (`x`, `y`).
///
/// # Arguments
///
/// * `font` - Optional TrueType/OpenType bytes; the built-in bitmap font is
///   used when absent or unreadable
#[wasm_bindgen]
pub fn text_overlay(
    image: &JsPhotoImage,
    text: String,
    x: u32,
    y: u32,
    font_size: u32,
    font: Option<Vec<u8>>,
) -> JsPhotoImage {
    let overlay = TextOverlay {
        text,
        x,
        y,
        font_size,
    };
    JsPhotoImage::from_photo(transform::text_overlay(
        image.as_photo(),
        &overlay,
        font.as_deref(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> JsPhotoImage {
        JsPhotoImage::from_photo(glint_core::PhotoImage::filled(width, height, rgb))
    }

    #[test]
    fn test_brightness_binding() {
        let out = brightness(&solid(2, 2, [255, 0, 0]), 50);
        assert_eq!(&out.pixels()[0..3], &[255, 50, 50]);
    }

    #[test]
    fn test_grayscale_binding() {
        let out = grayscale(&solid(3, 2, [10, 20, 30]));
        assert_eq!(out.channels(), 1);
        assert_eq!(out.byte_length(), 6);
    }

    #[test]
    fn test_highlight_binding() {
        let out = highlight(&solid(1, 1, [100, 0, 200]));
        assert_eq!(out.pixels(), vec![130, 10, 250]);
    }

    #[test]
    fn test_mood_filter_by_name() {
        let img = solid(2, 2, [50, 60, 70]);
        assert_eq!(&mood_filter(&img, "Cool").pixels()[0..3], &[50, 60, 100]);
        assert_eq!(&mood_filter(&img, "Warm").pixels()[0..3], &[80, 60, 70]);
        assert_eq!(mood_filter(&img, "Sepia").pixels(), img.pixels());
    }

    #[test]
    fn test_mood_filter_names() {
        assert_eq!(
            mood_filter_names(),
            vec!["None", "Sunny", "Cool", "Warm", "Dreamy", "Moody"]
        );
    }

    #[test]
    fn test_text_overlay_binding() {
        let img = solid(64, 32, [0, 0, 0]);
        let out = text_overlay(&img, "Hi".to_string(), 2, 2, 16, None);
        assert_eq!(out.width(), 64);
        assert!(out.pixels().iter().any(|&v| v == 255));
    }
}
