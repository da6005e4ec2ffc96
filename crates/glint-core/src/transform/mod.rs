//! The transform library: independent, stateless image operations.
//!
//! Every transform borrows its input and returns a new [`PhotoImage`]; none
//! keeps state between calls. Transforms compose only by feeding one output
//! into the next call.
//!
//! # Shape guarantees
//!
//! - Only [`resize`] changes spatial dimensions
//! - Only [`grayscale`] changes the layout (RGB to single-channel)
//! - All arithmetic saturates to `[0, 255]`
//!
//! [`PhotoImage`]: crate::decode::PhotoImage

use thiserror::Error;

mod blur;
mod grayscale;
mod mood;
mod resize;
mod text;
mod tone;

pub use blur::{blend, gaussian_blur};
pub use grayscale::grayscale;
pub use mood::{mood_filter, MoodFilter, DREAMY_KERNEL_SIZE, DREAMY_SIGMA, TINT_SHIFT};
pub use resize::resize;
pub use text::{text_overlay, TextOverlay};
pub use tone::{brightness, highlight, linear_scale_abs, HIGHLIGHT_GAIN, HIGHLIGHT_OFFSET};

/// Errors raised by transforms that take size parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// A target dimension is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The source buffer doesn't match its own dimensions.
    #[error("Source pixel buffer does not match its dimensions")]
    BufferSize,
}
