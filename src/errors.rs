//! # Error Types Module
//!
//! This module defines custom error types for startup configuration and
//! photo retrieval. Provider-side failures are not errors in this sense:
//! they are modeled as `AnalysisOutcome` variants in the analysis module.

/// Fatal configuration errors raised during startup
///
/// These abort the process before the dispatcher starts; no partial
/// service is offered.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    MissingVar(String),
    /// The configured analysis provider name is not recognized
    UnknownProvider(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVar(name) => {
                write!(f, "Environment variable '{name}' is not set")
            }
            ConfigError::UnknownProvider(value) => {
                write!(
                    f,
                    "Unknown analysis provider '{value}' (expected 'gemini' or 'openai')"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Photo retrieval errors
#[derive(Debug, Clone)]
pub enum DownloadError {
    /// The file request or transfer failed
    Request(String),
    /// The file endpoint answered with a non-2xx status
    Status(u16),
    /// The file endpoint answered with a zero-byte body
    EmptyBody,
}

impl std::fmt::Display for DownloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadError::Request(msg) => write!(f, "Download request failed: {msg}"),
            DownloadError::Status(code) => {
                write!(f, "Download failed with HTTP status {code}")
            }
            DownloadError::EmptyBody => write!(f, "Download returned an empty body"),
        }
    }
}

impl std::error::Error for DownloadError {}
