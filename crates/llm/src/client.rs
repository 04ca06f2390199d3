use async_trait::async_trait;
use autoslides_common::{AppConfig, AutoSlidesError, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::llm_trait::LlmClient;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// Google Gemini API client
///
/// Built once at startup and shared read-only across requests.
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: Client,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create new Gemini client
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let model = model.into();
        let api_key = api_key.into();

        if api_key.trim().is_empty() {
            return Err(AutoSlidesError::config("Google AI API key required"));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Gemini client initialized: {} ({})", base_url, model);
        Ok(Self {
            base_url,
            model,
            api_key,
            client,
        })
    }

    /// Create client from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api_key = config.require_api_key()?;
        Self::new(&config.gemini_base_url, &config.llm_model, api_key)
    }

    fn generate_url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    /// Single generateContent call; no retry
    pub async fn generate_content(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(prompt);

        debug!(
            "Sending generateContent request - Model: {}, Prompt length: {}",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| AutoSlidesError::network(format!("Failed to send request: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AutoSlidesError::network(format!(
                "Gemini API error ({}): {}",
                status,
                body.trim()
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AutoSlidesError::llm(format!("Failed to parse response: {}", e.without_url())))?;

        let text = parse_reply(&result)?;

        debug!("Received response from Gemini - Length: {}", text.len());
        Ok(text)
    }
}

/// Pull the reply text out of a decoded response
fn parse_reply(response: &GenerateContentResponse) -> Result<String> {
    if let Some(text) = response.text() {
        return Ok(text.trim().to_string());
    }

    match response.block_reason() {
        Some(reason) => Err(AutoSlidesError::llm(format!("Prompt blocked by Gemini: {}", reason))),
        None => Err(AutoSlidesError::llm("Empty response from Gemini")),
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_content(prompt).await
    }

    fn provider(&self) -> &str {
        "Google Gemini"
    }
}
