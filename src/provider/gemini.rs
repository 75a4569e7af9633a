//! # Gemini Provider Module
//!
//! Analysis via the Google Gemini `generateContent` REST API. The image
//! travels as an inline base64 part next to the prompt text.

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::json;

use crate::analysis::{categorize_error, AnalysisOutcome, AnalysisRequest, ErrorCategory};
use crate::config::ProviderConfig;

use super::{categorize_transport_error, AnalysisProvider};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl GeminiProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(model_id: &str) -> String {
        format!("{API_BASE}/models/{model_id}:generateContent")
    }

    fn request_body(request: &AnalysisRequest) -> serde_json::Value {
        let encoded = general_purpose::STANDARD.encode(&request.image.bytes);
        json!({
            "contents": [{
                "parts": [
                    { "text": request.prompt },
                    {
                        "inline_data": {
                            "mime_type": request.image.mime_type,
                            "data": encoded,
                        }
                    }
                ]
            }]
        })
    }
}

#[async_trait]
impl AnalysisProvider for GeminiProvider {
    fn model_id(&self) -> &str {
        &self.config.model_name
    }

    async fn analyze(&self, request: AnalysisRequest) -> AnalysisOutcome {
        let url = Self::endpoint(&request.model_id);
        let body = Self::request_body(&request);
        debug!(
            "Dispatching analysis request to Gemini model {} ({} image bytes, {})",
            request.model_id,
            request.image.bytes.len(),
            request.image.mime_type
        );

        let response = match self
            .client
            .post(url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Gemini request failed: {e}");
                return AnalysisOutcome::ProviderError {
                    category: categorize_transport_error(&e),
                    detail: e.to_string(),
                };
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API error {status}: {body}");
            return AnalysisOutcome::ProviderError {
                category: categorize_error(Some(status.as_u16()), &body),
                detail: format!("HTTP {}: {}", status.as_u16(), body),
            };
        }

        match response.json::<GenerateContentResponse>().await {
            Ok(parsed) => outcome_from_response(parsed),
            Err(e) => AnalysisOutcome::ProviderError {
                category: ErrorCategory::Unknown,
                detail: format!("Response parse failed: {e}"),
            },
        }
    }
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
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: Option<String>,
}

/// Map a completed Gemini response to an outcome
///
/// Candidate text wins; a block reason (prompt feedback or a SAFETY
/// finish) yields `Blocked`; a text-free response without one is
/// `Empty`.
fn outcome_from_response(response: GenerateContentResponse) -> AnalysisOutcome {
    let first = response.candidates.first();

    let text = first
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();
    if !text.trim().is_empty() {
        return AnalysisOutcome::Success { text };
    }

    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return AnalysisOutcome::Blocked { reason };
    }
    if let Some(reason) = first
        .and_then(|candidate| candidate.finish_reason.as_deref())
        .filter(|reason| *reason == "SAFETY")
    {
        return AnalysisOutcome::Blocked {
            reason: reason.to_string(),
        };
    }

    AnalysisOutcome::Empty
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}
