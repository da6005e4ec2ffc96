//! Core types for image buffers and upload decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for upload decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file extension is not one of the accepted upload types.
    #[error("Unsupported file type: {0:?} (expected jpg, jpeg or png)")]
    UnsupportedType(String),

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Errors raised when constructing an image buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    /// Pixel data length doesn't match `width * height * channels`.
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}

/// Sample layout of an image buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelLayout {
    /// Three interleaved samples per pixel, in R, G, B order.
    #[default]
    Rgb,
    /// One luma sample per pixel.
    Gray,
}

impl PixelLayout {
    /// Number of samples stored per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Rgb => 3,
            PixelLayout::Gray => 1,
        }
    }
}

/// An 8-bit image buffer, row-major, `height x width x channels`.
///
/// This is the only value that flows between transforms. Transforms take a
/// reference and return a new buffer; nothing mutates an image in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Sample layout (RGB or single-channel gray).
    pub layout: PixelLayout,
    /// Interleaved samples in row-major order.
    pub pixels: Vec<u8>,
}

impl PhotoImage {
    /// Create an image, checking that the buffer matches the dimensions.
    pub fn new(
        width: u32,
        height: u32,
        layout: PixelLayout,
        pixels: Vec<u8>,
    ) -> Result<Self, ImageError> {
        let expected = expected_len(width, height, layout);
        if pixels.len() != expected {
            return Err(ImageError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            layout,
            pixels,
        })
    }

    /// Create an RGB image filled with a single colour.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let count = (width as usize) * (height as usize);
        let mut pixels = Vec::with_capacity(count * 3);
        for _ in 0..count {
            pixels.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            layout: PixelLayout::Rgb,
            pixels,
        }
    }

    /// Create a PhotoImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: PixelLayout::Rgb,
            pixels: img.into_raw(),
        }
    }

    /// Create a PhotoImage from an image::GrayImage.
    pub fn from_gray_image(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: PixelLayout::Gray,
            pixels: img.into_raw(),
        }
    }

    /// Number of samples per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Mean value of one channel, or `None` if the channel doesn't exist.
    pub fn channel_mean(&self, channel: usize) -> Option<f64> {
        let channels = self.channels();
        if channel >= channels || self.is_empty() {
            return None;
        }
        let sum: u64 = self
            .pixels
            .iter()
            .skip(channel)
            .step_by(channels)
            .map(|&v| v as u64)
            .sum();
        Some(sum as f64 / self.pixel_count() as f64)
    }

    /// Build a new image of the same size and layout with a per-sample map.
    pub(crate) fn map_samples(&self, f: impl Fn(u8) -> u8) -> Self {
        Self {
            width: self.width,
            height: self.height,
            layout: self.layout,
            pixels: self.pixels.iter().map(|&v| f(v)).collect(),
        }
    }
}

fn expected_len(width: u32, height: u32, layout: PixelLayout) -> usize {
    (width as usize) * (height as usize) * layout.channels()
}
