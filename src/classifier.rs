//! # Response Classifier Module
//!
//! Maps a provider outcome to the user-facing reply text. This is a
//! pure total function with no side effects: the same outcome always
//! yields the same message, independent of call order or prior state.

use crate::analysis::{AnalysisOutcome, ErrorCategory};
use crate::messages;

/// Map a provider outcome to the reply text sent to the user
///
/// Successful analyses are relayed verbatim; every other outcome maps
/// to one of the fixed notices in the messages module.
pub fn classify(outcome: &AnalysisOutcome) -> String {
    match outcome {
        AnalysisOutcome::Success { text } => text.clone(),
        AnalysisOutcome::Blocked { .. } => messages::BLOCKED.to_string(),
        AnalysisOutcome::Empty => messages::EMPTY_RESULT.to_string(),
        AnalysisOutcome::ProviderError {
            category: ErrorCategory::RateLimited,
            ..
        } => messages::RATE_LIMITED.to_string(),
        AnalysisOutcome::ProviderError {
            category: ErrorCategory::InvalidRequest,
            ..
        } => messages::BAD_PHOTO.to_string(),
        AnalysisOutcome::ProviderError { .. } => messages::ANALYSIS_ERROR.to_string(),
    }
}

/// Reply text for a photo that could not be downloaded at all
pub fn download_failure_reply() -> String {
    messages::ANALYSIS_ERROR.to_string()
}
