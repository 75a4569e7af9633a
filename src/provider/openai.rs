//! # OpenAI Provider Module
//!
//! Analysis via the OpenAI-compatible `chat/completions` API. The image
//! travels as a base64 data URL inside the user message content.

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::json;

use crate::analysis::{categorize_error, AnalysisOutcome, AnalysisRequest, ErrorCategory};
use crate::config::ProviderConfig;

use super::{categorize_transport_error, AnalysisProvider};

const API_BASE: &str = "https://api.openai.com/v1";
const MAX_TOKENS: u32 = 2048;

pub struct OpenAiProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl OpenAiProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn request_body(request: &AnalysisRequest) -> serde_json::Value {
        let encoded = general_purpose::STANDARD.encode(&request.image.bytes);
        let data_url = format!("data:{};base64,{}", request.image.mime_type, encoded);
        json!({
            "model": request.model_id,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "image_url", "image_url": { "url": data_url } },
                    { "type": "text", "text": request.prompt }
                ]
            }],
            "max_tokens": MAX_TOKENS,
        })
    }
}

#[async_trait]
impl AnalysisProvider for OpenAiProvider {
    fn model_id(&self) -> &str {
        &self.config.model_name
    }

    async fn analyze(&self, request: AnalysisRequest) -> AnalysisOutcome {
        let body = Self::request_body(&request);
        debug!(
            "Dispatching analysis request to OpenAI model {} ({} image bytes, {})",
            request.model_id,
            request.image.bytes.len(),
            request.image.mime_type
        );

        let response = match self
            .client
            .post(format!("{API_BASE}/chat/completions"))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("OpenAI request failed: {e}");
                return AnalysisOutcome::ProviderError {
                    category: categorize_transport_error(&e),
                    detail: e.to_string(),
                };
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAI API error {status}: {body}");
            return AnalysisOutcome::ProviderError {
                category: categorize_error(Some(status.as_u16()), &body),
                detail: format!("HTTP {}: {}", status.as_u16(), body),
            };
        }

        match response.json::<ChatCompletionResponse>().await {
            Ok(parsed) => outcome_from_response(parsed),
            Err(e) => AnalysisOutcome::ProviderError {
                category: ErrorCategory::Unknown,
                detail: format!("Response parse failed: {e}"),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Map a completed chat response to an outcome
///
/// Message text wins; a `content_filter` finish without text yields
/// `Blocked`; anything else without text is `Empty`.
fn outcome_from_response(response: ChatCompletionResponse) -> AnalysisOutcome {
    let Some(choice) = response.choices.into_iter().next() else {
        return AnalysisOutcome::Empty;
    };

    if let Some(text) = choice.message.content.filter(|text| !text.trim().is_empty()) {
        return AnalysisOutcome::Success { text };
    }

    if choice.finish_reason.as_deref() == Some("content_filter") {
        return AnalysisOutcome::Blocked {
            reason: "content_filter".to_string(),
        };
    }

    AnalysisOutcome::Empty
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> ChatCompletionResponse {
        serde_json::from_value(value).expect("fixture should deserialize")
    }

    /// Test that message content becomes a verbatim success
    #[test]
    fn test_response_with_content_is_success() {
        let response = parse(json!({
            "choices": [{
                "message": { "content": "Калории: 450 ккал" },
                "finish_reason": "stop"
            }]
        }));

        assert_eq!(
            outcome_from_response(response),
            AnalysisOutcome::Success {
                text: "Калории: 450 ккал".to_string()
            }
        );
    }

    /// Test that a content-filter finish without text maps to Blocked
    #[test]
    fn test_content_filter_maps_to_blocked() {
        let response = parse(json!({
            "choices": [{
                "message": { "content": null },
                "finish_reason": "content_filter"
            }]
        }));

        assert_eq!(
            outcome_from_response(response),
            AnalysisOutcome::Blocked {
                reason: "content_filter".to_string()
            }
        );
    }

    /// Test that a text-free response without a filter is Empty
    #[test]
    fn test_text_free_response_is_empty() {
        let response = parse(json!({
            "choices": [{ "message": { "content": "" }, "finish_reason": "stop" }]
        }));
        assert_eq!(outcome_from_response(response), AnalysisOutcome::Empty);

        let response = parse(json!({ "choices": [] }));
        assert_eq!(outcome_from_response(response), AnalysisOutcome::Empty);
    }

    /// Test the request body carries the data URL and prompt
    #[test]
    fn test_request_body_shape() {
        use crate::analysis::ImageAsset;

        let request = AnalysisRequest::new(
            ImageAsset {
                bytes: vec![0xFF, 0xD8, 0xFF],
                mime_type: "image/jpeg",
            },
            "gpt-4o".to_string(),
        );
        let body = OpenAiProvider::request_body(&request);

        assert_eq!(body["model"], "gpt-4o");
        let content = &body["messages"][0]["content"];
        assert_eq!(
            content[0]["image_url"]["url"],
            "data:image/jpeg;base64,/9j/"
        );
        assert_eq!(content[1]["text"], request.prompt);
    }
}
