//! LLM provider trait and configuration.

use crate::error::Result;

/// Configuration for LLM providers.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model to use (e.g., "gemini-flash-latest").
    pub model: String,

    /// Maximum tokens in response.
    pub max_tokens: usize,

    /// Temperature for generation (0.0-1.0).
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-flash-latest".to_string(),
            max_tokens: 1024,
            temperature: 0.0,
        }
    }
}

/// Trait for text-completion providers.
///
/// Implementations must be thread-safe (Send + Sync) so a provider can be
/// shared behind an `Arc`.
pub trait LlmProvider: Send + Sync {
    /// Complete a prompt and return the model's text.
    fn complete(&self, prompt: &str) -> Result<String>;

    /// Get the configuration for this provider.
    fn config(&self) -> &LlmConfig;

    /// Get the name of this provider (for logging/debugging).
    fn name(&self) -> &str;
}
