//! # Configuration Module
//!
//! Process configuration read once at startup from the environment.
//! Missing secrets are fatal: the process must exit before serving any
//! update rather than run with a partial setup.

use std::env;
use std::str::FromStr;

use crate::errors::ConfigError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// Which vision backend performs the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    OpenAi,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Gemini => write!(f, "gemini"),
            ProviderKind::OpenAi => write!(f, "openai"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "openai" => Ok(ProviderKind::OpenAi),
            _ => Err(ConfigError::UnknownProvider(s.to_string())),
        }
    }
}

/// Per-provider credentials and model selection
///
/// Read-only after startup; shared across all in-flight updates.
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub model_name: String,
}

/// Full process configuration
#[derive(Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub provider: ProviderKind,
    pub provider_config: ProviderConfig,
}

impl BotConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Resolve the configuration from an arbitrary variable source
    ///
    /// `from_env` delegates here; tests pass in a map instead of
    /// mutating the process environment.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = require(&lookup, "BOT_TOKEN")?;

        let provider = match lookup("ANALYSIS_PROVIDER").filter(|v| !v.trim().is_empty()) {
            Some(value) => value.parse()?,
            None => ProviderKind::Gemini,
        };

        let provider_config = match provider {
            ProviderKind::Gemini => ProviderConfig {
                api_key: require(&lookup, "GEMINI_API_KEY")?,
                model_name: lookup("GEMINI_MODEL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            },
            ProviderKind::OpenAi => ProviderConfig {
                api_key: require(&lookup, "OPENAI_API_KEY")?,
                model_name: lookup("OPENAI_MODEL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            },
        };

        Ok(Self {
            bot_token,
            provider,
            provider_config,
        })
    }
}

// An empty value is as fatal as an unset one.
fn require<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingVar(name.to_string()))
}
