//! Remote assistant: captions and song suggestions for the working image.
//!
//! The boundary is one capability, "PNG bytes plus an instruction in, free
//! text out", expressed as the [`ContentGenerator`] trait. [`GeminiClient`]
//! is the shipped implementation; tests substitute a stub.
//!
//! Failures never escape as errors to the editing session. They become an
//! [`AssistReply`] carrying a user-visible message. There is no retry and no
//! partial result.

use serde::Serialize;
use thiserror::Error;

use crate::decode::PhotoImage;
use crate::encode::{encode_png, EncodeError};

mod gemini;

pub use gemini::{
    build_request_body, parse_error_body, parse_response_body, AssistConfig, GeminiClient,
    DEFAULT_ENDPOINT, DEFAULT_MODEL,
};

/// Errors from the remote assistant call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssistError {
    /// No API key was configured.
    #[error("No API key configured")]
    MissingApiKey,

    /// The working image could not be encoded for upload.
    #[error("Could not encode image: {0}")]
    Encode(String),

    /// The request never produced an HTTP response.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Service returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The prompt or the response was blocked by the service.
    #[error("Response blocked: {0}")]
    Blocked(String),

    /// The response carried no text.
    #[error("Service returned no text")]
    EmptyResponse,

    /// The response body was not the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<EncodeError> for AssistError {
    fn from(e: EncodeError) -> Self {
        AssistError::Encode(e.to_string())
    }
}

/// What the assistant is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssistKind {
    Caption,
    Songs,
}

impl AssistKind {
    /// Fixed instruction sent alongside the image.
    pub fn instruction(self) -> &'static str {
        match self {
            AssistKind::Caption => "Give a short Instagram-style caption for this image:",
            AssistKind::Songs => "Suggest 3 songs that match the mood or vibe of this image:",
        }
    }

    /// Name of the action, used in failure messages.
    pub fn action(self) -> &'static str {
        match self {
            AssistKind::Caption => "Caption generation",
            AssistKind::Songs => "Song suggestion",
        }
    }

    /// Heading shown above a successful reply.
    pub fn heading(self) -> &'static str {
        match self {
            AssistKind::Caption => "Caption:",
            AssistKind::Songs => "Songs Suggested:",
        }
    }
}

/// Something that turns an image plus an instruction into text.
#[allow(async_fn_in_trait)]
pub trait ContentGenerator {
    /// Submit `png` with `instruction` and return the generated text verbatim.
    async fn generate(&self, instruction: &str, png: &[u8]) -> Result<String, AssistError>;
}

/// Encode `image` as PNG, ask `generator` for `kind`, and trim the reply.
pub async fn request_text<G: ContentGenerator + ?Sized>(
    generator: &G,
    kind: AssistKind,
    image: &PhotoImage,
) -> Result<String, AssistError> {
    let png = encode_png(image)?;
    let text = generator.generate(kind.instruction(), &png).await?;
    let text = text.trim();
    if text.is_empty() {
        return Err(AssistError::EmptyResponse);
    }
    Ok(text.to_string())
}

/// Outcome of an assistant request, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistReply {
    /// Which request this answers.
    pub kind: AssistKind,
    /// Whether `text` is the generated text or an error message.
    pub ok: bool,
    /// Generated text on success, otherwise a user-visible error message.
    pub text: String,
}

impl AssistReply {
    /// Fold a request result into a displayable reply.
    pub fn from_result(kind: AssistKind, result: Result<String, AssistError>) -> Self {
        match result {
            Ok(text) => Self {
                kind,
                ok: true,
                text,
            },
            Err(e) => Self {
                kind,
                ok: false,
                text: format!("{} failed: {}", kind.action(), e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records what it was sent and answers with a canned result.
    struct StubGenerator {
        reply: Result<String, AssistError>,
        seen: RefCell<Vec<(String, usize)>>,
    }

    impl StubGenerator {
        fn answering(reply: Result<String, AssistError>) -> Self {
            Self {
                reply,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl ContentGenerator for StubGenerator {
        async fn generate(&self, instruction: &str, png: &[u8]) -> Result<String, AssistError> {
            assert_eq!(&png[1..4], b"PNG", "Payload should be PNG");
            self.seen
                .borrow_mut()
                .push((instruction.to_string(), png.len()));
            self.reply.clone()
        }
    }

    #[test]
    fn test_instructions_are_fixed() {
        assert_eq!(
            AssistKind::Caption.instruction(),
            "Give a short Instagram-style caption for this image:"
        );
        assert_eq!(
            AssistKind::Songs.instruction(),
            "Suggest 3 songs that match the mood or vibe of this image:"
        );
    }

    #[test]
    fn test_request_text_trims_reply() {
        let stub = StubGenerator::answering(Ok("  Golden hour vibes \n".to_string()));
        let image = PhotoImage::filled(4, 4, [200, 150, 50]);

        let text = pollster::block_on(request_text(&stub, AssistKind::Caption, &image)).unwrap();

        assert_eq!(text, "Golden hour vibes");
        let seen = stub.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, AssistKind::Caption.instruction());
    }

    #[test]
    fn test_request_text_sends_song_instruction() {
        let stub = StubGenerator::answering(Ok("1. A\n2. B\n3. C".to_string()));
        let image = PhotoImage::filled(2, 2, [0, 0, 0]);

        let text = pollster::block_on(request_text(&stub, AssistKind::Songs, &image)).unwrap();

        assert_eq!(text, "1. A\n2. B\n3. C");
        assert_eq!(stub.seen.borrow()[0].0, AssistKind::Songs.instruction());
    }

    #[test]
    fn test_blank_reply_is_empty_response() {
        let stub = StubGenerator::answering(Ok("   ".to_string()));
        let image = PhotoImage::filled(2, 2, [0, 0, 0]);
        let result = pollster::block_on(request_text(&stub, AssistKind::Caption, &image));
        assert_eq!(result, Err(AssistError::EmptyResponse));
    }

    #[test]
    fn test_empty_image_fails_before_request() {
        let stub = StubGenerator::answering(Ok("never".to_string()));
        let image = PhotoImage::filled(0, 0, [0, 0, 0]);
        let result = pollster::block_on(request_text(&stub, AssistKind::Caption, &image));
        assert!(matches!(result, Err(AssistError::Encode(_))));
        assert!(stub.seen.borrow().is_empty());
    }

    #[test]
    fn test_reply_from_success() {
        let reply = AssistReply::from_result(AssistKind::Songs, Ok("list".to_string()));
        assert!(reply.ok);
        assert_eq!(reply.text, "list");
    }

    #[test]
    fn test_reply_from_failure() {
        let reply = AssistReply::from_result(
            AssistKind::Caption,
            Err(AssistError::Status {
                status: 429,
                message: "Quota exceeded".to_string(),
            }),
        );
        assert!(!reply.ok);
        assert_eq!(
            reply.text,
            "Caption generation failed: Service returned 429: Quota exceeded"
        );

        let reply = AssistReply::from_result(
            AssistKind::Songs,
            Err(AssistError::Transport("dns error".to_string())),
        );
        assert_eq!(reply.text, "Song suggestion failed: Request failed: dns error");
    }
}
