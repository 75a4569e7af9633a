//! # Analysis Provider Module
//!
//! The capability interface over the vision backends and the
//! config-driven variant selection. Each variant encodes its own wire
//! format but all share the same prompt template and outcome contract.
//!
//! - `gemini`: Google Gemini `generateContent` with an inline base64 part
//! - `openai`: OpenAI-compatible `chat/completions` with a data-URL part

pub mod gemini;
pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;

use crate::analysis::{AnalysisOutcome, AnalysisRequest, ErrorCategory};
use crate::config::{BotConfig, ProviderKind};

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

/// A vision backend able to analyze one food photo per call
///
/// `analyze` is total: transport and API failures are folded into
/// `AnalysisOutcome::ProviderError`, never returned as `Err`. No retry
/// is performed inside a provider; one outcome per call.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Model identifier stamped into each request
    fn model_id(&self) -> &str;

    /// Perform one analysis round trip
    async fn analyze(&self, request: AnalysisRequest) -> AnalysisOutcome;
}

/// Construct the provider variant selected by the configuration
pub fn build_provider(config: &BotConfig) -> Arc<dyn AnalysisProvider> {
    match config.provider {
        ProviderKind::Gemini => Arc::new(GeminiProvider::new(config.provider_config.clone())),
        ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(config.provider_config.clone())),
    }
}

// reqwest reports timeouts and connection failures as flags rather than
// in the message text, so check those before falling back to sniffing.
pub(crate) fn categorize_transport_error(err: &reqwest::Error) -> ErrorCategory {
    if err.is_timeout() || err.is_connect() {
        ErrorCategory::Transient
    } else {
        crate::analysis::categorize_error(None, &err.to_string())
    }
}
