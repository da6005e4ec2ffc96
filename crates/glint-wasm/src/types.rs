//! WASM-compatible wrapper types for image data.
//!
//! This module provides the JavaScript-facing image type that wraps the core
//! Glint [`PhotoImage`], converting between Rust and JavaScript data
//! representations.

use glint_core::decode::{ImageError, PhotoImage, PixelLayout};
use wasm_bindgen::prelude::*;

/// An image wrapper for JavaScript.
///
/// Pixels are row-major, 8 bits per sample, with 3 channels (RGB) or 1
/// channel (grayscale). Check `channels` before drawing to a canvas.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()` or
/// `rgba()`, a copy is made to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsPhotoImage {
    inner: PhotoImage,
}

#[wasm_bindgen]
impl JsPhotoImage {
    /// Create an image from dimensions, channel count and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - 3 for RGB, 1 for grayscale
    /// * `pixels` - Row-major pixel data
    ///
    /// # Errors
    ///
    /// Returns an error if `channels` is not 1 or 3, or the buffer length
    /// doesn't match the dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        channels: u8,
        pixels: Vec<u8>,
    ) -> Result<JsPhotoImage, JsValue> {
        Self::try_new(width, height, channels, pixels).map_err(|e| JsValue::from_str(&e))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Samples per pixel: 3 for RGB, 1 for grayscale
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.inner.channels() as u8
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels.len()
    }

    /// Returns the pixel data as a Uint8Array (copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// Returns the image as RGBA, ready for `ImageData`.
    ///
    /// Grayscale samples are replicated into all three colour channels and
    /// alpha is always opaque.
    pub fn rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.inner.pixel_count() * 4);
        match self.inner.layout {
            PixelLayout::Rgb => {
                for p in self.inner.pixels.chunks_exact(3) {
                    out.extend_from_slice(&[p[0], p[1], p[2], 255]);
                }
            }
            PixelLayout::Gray => {
                for &v in &self.inner.pixels {
                    out.extend_from_slice(&[v, v, v, 255]);
                }
            }
        }
        out
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {}
}

impl JsPhotoImage {
    /// Validating constructor usable off the wasm32 target.
    pub(crate) fn try_new(
        width: u32,
        height: u32,
        channels: u8,
        pixels: Vec<u8>,
    ) -> Result<Self, String> {
        let layout = layout_from_channels(channels)
            .ok_or_else(|| format!("Unsupported channel count: {}", channels))?;
        PhotoImage::new(width, height, layout, pixels)
            .map(Self::from_photo)
            .map_err(|e: ImageError| e.to_string())
    }

    /// Wrap a core image.
    pub(crate) fn from_photo(img: PhotoImage) -> Self {
        Self { inner: img }
    }

    /// Borrow the core image for passing to core functions.
    pub(crate) fn as_photo(&self) -> &PhotoImage {
        &self.inner
    }
}

/// Map a JavaScript channel count to the core layout.
pub(crate) fn layout_from_channels(channels: u8) -> Option<PixelLayout> {
    match channels {
        3 => Some(PixelLayout::Rgb),
        1 => Some(PixelLayout::Gray),
        _ => None,
    }
}
