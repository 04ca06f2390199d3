use autoslides_common::AppConfig;
use autoslides_llm::{GeminiClient, Generator};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::ApiError;

/// Shared application state
///
/// Built once at startup; request handlers only read it.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Generator, absent when the model client could not be created
    generator: Option<Generator>,

    /// Why the generator is absent
    init_error: Option<String>,
}

impl AppState {
    /// Build state from configuration, creating the Gemini client
    ///
    /// A client failure is recorded rather than returned so `/` and `/health`
    /// keep working.
    pub fn new(config: AppConfig) -> Self {
        match GeminiClient::from_config(&config) {
            Ok(client) => {
                info!("AI generator initialized successfully");
                let generator = Generator::new(Arc::new(client))
                    .with_title_word_limit(config.title_word_limit);
                Self::with_generator(config, generator)
            }
            Err(e) => {
                warn!("Failed to initialize AI generator: {}", e);
                Self::without_generator(config, e.to_string())
            }
        }
    }

    /// State around an already-built generator
    pub fn with_generator(config: AppConfig, generator: Generator) -> Self {
        Self {
            config,
            generator: Some(generator),
            init_error: None,
        }
    }

    /// State whose generation endpoints answer 503
    pub fn without_generator(config: AppConfig, reason: impl Into<String>) -> Self {
        Self {
            config,
            generator: None,
            init_error: Some(reason.into()),
        }
    }

    /// The generator, or 503 if it never initialized
    pub fn generator(&self) -> Result<&Generator, ApiError> {
        self.generator
            .as_ref()
            .ok_or_else(|| ApiError::ServiceUnavailable("AI agent not available".to_string()))
    }

    pub fn init_error(&self) -> Option<&str> {
        self.init_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_missing_key_leaves_generator_unavailable() {
        let state = AppState::new(AppConfig::default());

        assert!(state.init_error().unwrap().contains("GOOGLE_AI_API_KEY"));
        let err = state.generator().err().unwrap();
        assert_eq!(err.status_code(), 503);
        assert_eq!(err.to_string(), "AI agent not available");
    }
}
