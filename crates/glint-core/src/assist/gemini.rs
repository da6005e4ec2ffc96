//! Gemini `generateContent` client.
//!
//! Sends one user turn with two parts, the instruction text and the PNG as
//! base64 inline data, and joins the text parts of the first candidate.
//!
//! # Endpoint
//!
//! `POST {endpoint}/models/{model}:generateContent`, authenticated with the
//! `x-goog-api-key` header.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{AssistError, ContentGenerator};
use crate::encode::EXPORT_MIME_TYPE;

/// Model used when the configuration doesn't name one.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// API root used when the configuration doesn't name one.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Longest raw error body quoted back to the user.
const MAX_ERROR_BODY: usize = 200;

/// Assistant configuration, supplied by the host page.
///
/// The API key comes from the host's secret store; this crate never reads
/// environment or files for it.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistConfig {
    /// API key for the generative service.
    pub api_key: String,
    /// Model name, with or without the `models/` prefix.
    #[serde(default = "default_model")]
    pub model: String,
    /// API root URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl AssistConfig {
    /// Configuration with the default model and endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: default_model(),
            endpoint: default_endpoint(),
        }
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model.trim_start_matches("models/")
        )
    }
}

impl fmt::Debug for AssistConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// HTTP client for the Gemini API.
///
/// Constructed once by the host and passed to whichever call needs it.
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: AssistConfig,
}

impl GeminiClient {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns `AssistError::MissingApiKey` for a blank key and
    /// `AssistError::Transport` if the HTTP client cannot be built.
    pub fn new(config: AssistConfig) -> Result<Self, AssistError> {
        if config.api_key.trim().is_empty() {
            return Err(AssistError::MissingApiKey);
        }
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AssistError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &AssistConfig {
        &self.config
    }
}

impl ContentGenerator for GeminiClient {
    async fn generate(&self, instruction: &str, png: &[u8]) -> Result<String, AssistError> {
        let response = self
            .http
            .post(self.config.generate_url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&build_request_body(instruction, png))
            .send()
            .await
            .map_err(|e| AssistError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AssistError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(parse_error_body(status.as_u16(), &body));
        }
        parse_response_body(&body)
    }
}

/// Build the JSON request for one instruction plus one PNG image.
pub fn build_request_body(instruction: &str, png: &[u8]) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [
                { "text": instruction },
                {
                    "inlineData": {
                        "mimeType": EXPORT_MIME_TYPE,
                        "data": BASE64.encode(png),
                    }
                }
            ]
        }]
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract the generated text from a successful response body.
///
/// Text parts of the first candidate are concatenated. A response with no
/// candidates is reported as blocked when the service says why, otherwise as
/// empty.
pub fn parse_response_body(body: &str) -> Result<String, AssistError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| AssistError::MalformedResponse(e.to_string()))?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(
            match response.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => AssistError::Blocked(reason),
                None => AssistError::EmptyResponse,
            },
        );
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.unwrap_or_default();
        if matches!(reason.as_str(), "SAFETY" | "RECITATION" | "BLOCKLIST") {
            return Err(AssistError::Blocked(reason));
        }
        return Err(AssistError::EmptyResponse);
    }
    Ok(text)
}

/// Turn a non-success response into an error, preferring the service's message.
pub fn parse_error_body(status: u16, body: &str) -> AssistError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().chars().take(MAX_ERROR_BODY).collect(),
    };
    AssistError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_from_json() {
        let config: AssistConfig = serde_json::from_str(r#"{"api_key":"k"}"#).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_generate_url() {
        let mut config = AssistConfig::new("k");
        assert_eq!(
            config.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );

        config.model = "models/gemini-2.0-flash".to_string();
        config.endpoint = "http://localhost:8080/v1/".to_string();
        assert_eq!(
            config.generate_url(),
            "http://localhost:8080/v1/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = AssistConfig::new("super-secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_blank_key_rejected() {
        let err = GeminiClient::new(AssistConfig::new("  ")).unwrap_err();
        assert_eq!(err, AssistError::MissingApiKey);
    }

    #[test]
    fn test_request_body_shape() {
        let body = build_request_body("Describe:", &[1, 2, 3]);
        let parts = &body["contents"][0]["parts"];

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(parts[0]["text"], "Describe:");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], "AQID");
    }

    #[test]
    fn test_parse_joins_text_parts() {
        let body = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "Sun-kissed "}, {"text": "and carefree"}]},
                "finishReason": "STOP"
            }]
        }"#;
        assert_eq!(parse_response_body(body).unwrap(), "Sun-kissed and carefree");
    }

    #[test]
    fn test_parse_uses_first_candidate() {
        let body = r#"{"candidates": [
            {"content": {"parts": [{"text": "first"}]}},
            {"content": {"parts": [{"text": "second"}]}}
        ]}"#;
        assert_eq!(parse_response_body(body).unwrap(), "first");
    }

    #[test]
    fn test_parse_prompt_blocked() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        assert_eq!(
            parse_response_body(body),
            Err(AssistError::Blocked("SAFETY".to_string()))
        );
    }

    #[test]
    fn test_parse_candidate_blocked() {
        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        assert_eq!(
            parse_response_body(body),
            Err(AssistError::Blocked("SAFETY".to_string()))
        );
    }

    #[test]
    fn test_parse_no_candidates() {
        assert_eq!(parse_response_body("{}"), Err(AssistError::EmptyResponse));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_response_body("<html>oops</html>"),
            Err(AssistError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_error_body_with_envelope() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(
            parse_error_body(400, body),
            AssistError::Status {
                status: 400,
                message: "API key not valid.".to_string()
            }
        );
    }

    #[test]
    fn test_error_body_plain_text_is_truncated() {
        let body = "x".repeat(1000);
        match parse_error_body(502, &body) {
            AssistError::Status { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message.len(), MAX_ERROR_BODY);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
