//! Glint Core - Photo editing library
//!
//! This crate provides the image processing behind the Glint editor: upload
//! decoding, the transform library, PNG export, the remote caption and song
//! assistant, and the editing session that ties them together.
//!
//! # Architecture
//!
//! - [`decode`] turns an uploaded JPEG/PNG into a [`PhotoImage`]
//! - [`transform`] holds stateless operations, each returning a new image
//! - [`session`] applies [`Command`] values to a working image, with
//!   per-mode reset semantics
//! - [`encode`] produces the downloadable PNG
//! - [`assist`] asks a [`ContentGenerator`] about the working image
//!
//! Nothing here touches the DOM; the `glint-wasm` crate exposes these types
//! to the browser.

pub mod assist;
pub mod decode;
pub mod encode;
pub mod luminance;
pub mod session;
pub mod transform;

pub use assist::{AssistConfig, AssistKind, AssistReply, ContentGenerator, GeminiClient};
pub use decode::{decode_upload, DecodeError, PhotoImage, PixelLayout};
pub use encode::{encode_png, EncodeError, EXPORT_FILE_NAME};
pub use session::{limits, ColorSettings, Command, EditMode, Session};
pub use transform::{MoodFilter, TextOverlay, TransformError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_names_round_trip() {
        for mood in MoodFilter::ALL {
            assert_eq!(MoodFilter::from_name(mood.name()), mood);
        }
    }

    #[test]
    fn test_export_name() {
        assert_eq!(EXPORT_FILE_NAME, "edited_image.png");
    }

    #[test]
    fn test_limits() {
        assert_eq!(limits::BRIGHTNESS, -100..=100);
        assert_eq!(limits::RESIZE, 50..=1000);
        assert_eq!(limits::FONT_SIZE, 10..=100);
    }
}
