//! Remote assistant WASM bindings.
//!
//! The host page builds one `JsAssistant` from its configuration and passes
//! it to whatever needs captions or song suggestions. Requests return a
//! `Promise` that always resolves, to `{ kind, ok, text }`; failures are
//! reported through `ok: false` and a readable `text`.
//!
//! # Example
//!
//! ```typescript
//! import { JsAssistant } from '@glint/wasm';
//!
//! const assistant = new JsAssistant({ api_key: secrets.geminiKey });
//! const reply = await assistant.caption(session.working());
//! output.textContent = reply.ok ? `Caption:\n${reply.text}` : reply.text;
//! ```

use crate::log;
use crate::types::JsPhotoImage;
use glint_core::assist::{
    request_text, AssistConfig, AssistError, AssistKind, AssistReply, GeminiClient,
};
use glint_core::decode::PhotoImage;
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// Caption and song-suggestion client for JavaScript.
#[wasm_bindgen]
pub struct JsAssistant {
    client: GeminiClient,
}

#[wasm_bindgen]
impl JsAssistant {
    /// Create an assistant from a config object.
    ///
    /// # Arguments
    ///
    /// * `config` - `{ api_key: string, model?: string, endpoint?: string }`
    ///
    /// # Errors
    ///
    /// Returns an error if the object doesn't match that shape or the key is
    /// blank.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsAssistant, JsValue> {
        let config: AssistConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid assistant config: {}", e)))?;
        Self::from_config(config).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Model the assistant talks to.
    #[wasm_bindgen(getter)]
    pub fn model(&self) -> String {
        self.client.config().model.clone()
    }

    /// Ask for a short caption for `image`.
    pub fn caption(&self, image: &JsPhotoImage) -> Promise {
        self.request(AssistKind::Caption, image)
    }

    /// Ask for three songs matching the mood of `image`.
    pub fn songs(&self, image: &JsPhotoImage) -> Promise {
        self.request(AssistKind::Songs, image)
    }

    /// Heading the page shows above a successful caption.
    pub fn caption_heading() -> String {
        AssistKind::Caption.heading().to_string()
    }

    /// Heading the page shows above successful song suggestions.
    pub fn songs_heading() -> String {
        AssistKind::Songs.heading().to_string()
    }
}

impl JsAssistant {
    pub(crate) fn from_config(config: AssistConfig) -> Result<Self, AssistError> {
        let client = GeminiClient::new(config)?;
        log::info(&format!("assistant ready ({})", client.config().model));
        Ok(Self { client })
    }

    fn request(&self, kind: AssistKind, image: &JsPhotoImage) -> Promise {
        // The promise outlives this borrow, so the future owns its inputs
        let client = self.client.clone();
        let image: PhotoImage = image.as_photo().clone();

        future_to_promise(async move {
            let reply = AssistReply::from_result(kind, request_text(&client, kind, &image).await);
            if !reply.ok {
                log::warn(&reply.text);
            }
            serde_wasm_bindgen::to_value(&reply).map_err(|e| JsValue::from_str(&e.to_string()))
        })
    }
}
