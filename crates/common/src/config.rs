use crate::error::AutoSlidesError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// AutoSlides application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Google AI API key; the generator is unavailable without it
    #[serde(skip_serializing)]
    pub google_api_key: Option<String>,

    /// Gemini API base URL
    pub gemini_base_url: String,

    /// Generation model name
    pub llm_model: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Maximum number of words in a generated title
    pub title_word_limit: usize,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            llm_model: "gemini-2.5-pro".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            title_word_limit: 5,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, AutoSlidesError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self::from_vars(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_vars<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            google_api_key: get("GOOGLE_AI_API_KEY").filter(|key| !key.trim().is_empty()),
            gemini_base_url: get("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            llm_model: get("LLM_MODEL").unwrap_or(defaults.llm_model),
            server_host: get("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: get("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            title_word_limit: get("TITLE_WORD_LIMIT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.title_word_limit),
            log_dir: get("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
            log_level: get("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Return the API key or a configuration error naming the missing variable
    pub fn require_api_key(&self) -> Result<&str, AutoSlidesError> {
        self.google_api_key
            .as_deref()
            .ok_or_else(|| AutoSlidesError::config("GOOGLE_AI_API_KEY is not set"))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AutoSlidesError> {
        if self.llm_model.is_empty() {
            return Err(AutoSlidesError::config("LLM model name cannot be empty"));
        }

        if !self.gemini_base_url.starts_with("http://")
            && !self.gemini_base_url.starts_with("https://") {
            return Err(AutoSlidesError::config(
                "Gemini base URL must start with http:// or https://"
            ));
        }

        if self.server_port == 0 {
            return Err(AutoSlidesError::config("Server port cannot be 0"));
        }

        if self.title_word_limit == 0 {
            return Err(AutoSlidesError::config("Title word limit cannot be 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.llm_model, "gemini-2.5-pro");
        assert_eq!(config.title_word_limit, 5);
        assert!(config.google_api_key.is_none());
    }

    #[test]
    fn test_server_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.server_bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_from_vars() {
        let config = AppConfig::from_vars(lookup(&[
            ("GOOGLE_AI_API_KEY", "secret"),
            ("PORT", "9000"),
            ("TITLE_WORD_LIMIT", "10"),
        ]));
        assert_eq!(config.google_api_key.as_deref(), Some("secret"));
        assert_eq!(config.server_port, 9000);
        assert_eq!(config.title_word_limit, 10);
        assert_eq!(config.server_host, "0.0.0.0");
    }

    #[test]
    fn test_from_vars_ignores_bad_values() {
        let config = AppConfig::from_vars(lookup(&[
            ("GOOGLE_AI_API_KEY", "   "),
            ("PORT", "not-a-port"),
        ]));
        assert!(config.google_api_key.is_none());
        assert_eq!(config.server_port, 8000);
        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn test_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = AppConfig::default();
        invalid_config.gemini_base_url = "generativelanguage.googleapis.com".to_string();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.title_word_limit = 0;
        assert!(invalid_config.validate().is_err());
    }
}
