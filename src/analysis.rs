//! # Analysis Data Model Module
//!
//! Shared types for the vision-provider pipeline: the image payload,
//! the analysis request, the provider outcome, and the error
//! categorization applied to failed provider calls. Failure
//! classification is plain data transformation here so it can be tested
//! without triggering real network errors.

use crate::prompt::CALORIE_PROMPT;

/// Raw image bytes paired with their detected MIME type
///
/// `mime_type` is always set; format detection degrades to
/// `image/jpeg` rather than leaving it empty.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

/// One analysis request, built once per inbound photo
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub prompt: &'static str,
    pub image: ImageAsset,
    pub model_id: String,
}

impl AnalysisRequest {
    /// Build a request carrying the fixed prompt template
    pub fn new(image: ImageAsset, model_id: String) -> Self {
        Self {
            prompt: CALORIE_PROMPT,
            image,
            model_id,
        }
    }
}

/// Categories for failed provider calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The provider reported rate limiting or quota exhaustion
    RateLimited,
    /// The provider rejected the request as malformed
    InvalidRequest,
    /// Timeouts, connection failures, provider overload
    Transient,
    /// Anything that could not be recognized
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCategory::RateLimited => "rate-limited",
            ErrorCategory::InvalidRequest => "invalid-request",
            ErrorCategory::Transient => "transient",
            ErrorCategory::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Result of one provider call
///
/// `Empty` and `Blocked` are valid outcomes, not errors: the call
/// completed and the provider chose not to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// The provider answered with usable text
    Success { text: String },
    /// The call completed but carried no usable text and no block reason
    Empty,
    /// The provider withheld the answer for content-safety reasons
    Blocked { reason: String },
    /// The call itself failed
    ProviderError {
        category: ErrorCategory,
        detail: String,
    },
}

/// Categorize a failed provider call from its status code and error text
///
/// Rate-limit signals take precedence over invalid-request signals:
/// throttling bodies frequently mention the offending request too.
pub fn categorize_error(status: Option<u16>, detail: &str) -> ErrorCategory {
    let lower = detail.to_lowercase();

    if status == Some(429)
        || lower.contains("rate limit")
        || lower.contains("quota")
        || lower.contains("resource_exhausted")
        || lower.contains("resource exhausted")
    {
        return ErrorCategory::RateLimited;
    }

    if status == Some(400) || lower.contains("bad request") || lower.contains("invalid") {
        return ErrorCategory::InvalidRequest;
    }

    if matches!(status, Some(code) if code >= 500)
        || lower.contains("timeout")
        || lower.contains("timed out")
        || lower.contains("connection")
        || lower.contains("unavailable")
        || lower.contains("overloaded")
    {
        return ErrorCategory::Transient;
    }

    ErrorCategory::Unknown
}
