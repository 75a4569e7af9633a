//! # Provider Tests Module
//!
//! Test suite for the provider capability interface: trait-object
//! dispatch, config-driven variant selection, and the error
//! categorization shared by both variants.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use calories::analysis::{
        categorize_error, AnalysisOutcome, AnalysisRequest, ErrorCategory, ImageAsset,
    };
    use calories::classifier::classify;
    use calories::config::{BotConfig, ProviderConfig, ProviderKind};
    use calories::messages;
    use calories::prompt::CALORIE_PROMPT;
    use calories::provider::{build_provider, AnalysisProvider};

    /// Provider stub returning a canned outcome and counting calls
    struct FixedOutcomeProvider {
        outcome: AnalysisOutcome,
        calls: AtomicUsize,
    }

    impl FixedOutcomeProvider {
        fn new(outcome: AnalysisOutcome) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl AnalysisProvider for FixedOutcomeProvider {
        fn model_id(&self) -> &str {
            "test-model"
        }

        async fn analyze(&self, request: AnalysisRequest) -> AnalysisOutcome {
            assert_eq!(request.prompt, CALORIE_PROMPT);
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn request_for(provider: &dyn AnalysisProvider) -> AnalysisRequest {
        AnalysisRequest::new(
            ImageAsset {
                bytes: vec![0xFF, 0xD8, 0xFF],
                mime_type: "image/jpeg",
            },
            provider.model_id().to_string(),
        )
    }

    /// Test a successful analysis through the trait object
    #[tokio::test]
    async fn test_success_through_trait_object() {
        let provider: Arc<dyn AnalysisProvider> =
            Arc::new(FixedOutcomeProvider::new(AnalysisOutcome::Success {
                text: "Калории: 450 ккал".to_string(),
            }));

        let outcome = provider.analyze(request_for(provider.as_ref())).await;

        assert_eq!(classify(&outcome), "Калории: 450 ккал");
    }

    /// Test a rate-limited analysis through the trait object
    #[tokio::test]
    async fn test_rate_limit_through_trait_object() {
        let provider: Arc<dyn AnalysisProvider> =
            Arc::new(FixedOutcomeProvider::new(AnalysisOutcome::ProviderError {
                category: ErrorCategory::RateLimited,
                detail: "HTTP 429: rate limit exceeded".to_string(),
            }));

        let outcome = provider.analyze(request_for(provider.as_ref())).await;

        assert_eq!(classify(&outcome), messages::RATE_LIMITED);
    }

    /// Test a content-blocked analysis through the trait object
    #[tokio::test]
    async fn test_blocked_through_trait_object() {
        let provider: Arc<dyn AnalysisProvider> =
            Arc::new(FixedOutcomeProvider::new(AnalysisOutcome::Blocked {
                reason: "SAFETY".to_string(),
            }));

        let outcome = provider.analyze(request_for(provider.as_ref())).await;

        assert_eq!(classify(&outcome), messages::BLOCKED);
    }

    /// Test that repeat submissions trigger independent provider calls
    #[tokio::test]
    async fn test_repeat_submissions_are_independent_calls() {
        let provider = FixedOutcomeProvider::new(AnalysisOutcome::Empty);

        let first = provider.analyze(request_for(&provider)).await;
        let second = provider.analyze(request_for(&provider)).await;

        assert_eq!(first, second);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    /// Test config-driven variant selection
    #[test]
    fn test_build_provider_selects_configured_variant() {
        let gemini = BotConfig {
            bot_token: "token".to_string(),
            provider: ProviderKind::Gemini,
            provider_config: ProviderConfig {
                api_key: "key".to_string(),
                model_name: "gemini-2.5-pro".to_string(),
            },
        };
        assert_eq!(build_provider(&gemini).model_id(), "gemini-2.5-pro");

        let openai = BotConfig {
            bot_token: "token".to_string(),
            provider: ProviderKind::OpenAi,
            provider_config: ProviderConfig {
                api_key: "key".to_string(),
                model_name: "gpt-4o".to_string(),
            },
        };
        assert_eq!(build_provider(&openai).model_id(), "gpt-4o");
    }

    /// Test the shared categorization on provider-shaped error bodies
    #[test]
    fn test_categorize_provider_error_bodies() {
        assert_eq!(
            categorize_error(Some(429), r#"{"error": {"message": "Resource exhausted"}}"#),
            ErrorCategory::RateLimited
        );
        assert_eq!(
            categorize_error(Some(400), r#"{"error": {"message": "Invalid image data"}}"#),
            ErrorCategory::InvalidRequest
        );
        assert_eq!(
            categorize_error(Some(503), "The model is overloaded. Please try again later."),
            ErrorCategory::Transient
        );
        assert_eq!(
            categorize_error(Some(418), "I'm a teapot"),
            ErrorCategory::Unknown
        );
    }
}
