//! Upload decoding for Glint.
//!
//! This module provides functionality for:
//! - Accepting an uploaded file by extension (jpg, jpeg, png)
//! - Decoding it to an 8-bit RGB [`PhotoImage`]
//!
//! # Architecture
//!
//! Decoding is designed to be called from the browser via WASM bindings.
//! All operations are synchronous and single-threaded within WASM.
//!
//! # Examples
//!
//! ```ignore
//! use glint_core::decode::decode_upload;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let image = decode_upload(&bytes, "photo.png").unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod types;
mod upload;

pub use types::{DecodeError, ImageError, PhotoImage, PixelLayout};
pub use upload::{decode_bytes, decode_upload, is_supported_upload, ACCEPTED_EXTENSIONS};
