use autoslides_common::Result;
use async_trait::async_trait;

/// Common trait for text-generation backends
///
/// The generator only needs "prompt in, text out", so tests can swap in a stub.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate text from a prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Human-readable provider name, reported by the health endpoint
    fn provider(&self) -> &str;
}
