mod google;

pub use google::GoogleProvider;

use crate::error::GenerationError;
use async_trait::async_trait;

/// Outcome of a successful call to a text generation API
#[derive(Debug, Clone, PartialEq)]
pub enum Generation {
    /// Generated text, as returned by the model
    Text(String),
    /// The prompt or the answer was blocked; carries the reported reason
    Blocked(String),
    /// The call succeeded but produced no usable text
    Empty,
}

/// Unified trait for text generation backends
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Generate a reply for a complete prompt
    async fn generate(&self, prompt: &str) -> Result<Generation, GenerationError>;
}
