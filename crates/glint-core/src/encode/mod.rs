//! Image encoding for Glint.
//!
//! This module provides functionality for:
//! - Encoding the working image to PNG for download
//! - Producing the PNG payload sent to the remote assistant
//!
//! # Examples
//!
//! ```ignore
//! use glint_core::encode::{encode_png, EXPORT_FILE_NAME};
//!
//! let png_bytes = encode_png(&image).unwrap();
//! std::fs::write(EXPORT_FILE_NAME, png_bytes).unwrap();
//! ```

mod png;

pub use png::{encode_png, EncodeError, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
