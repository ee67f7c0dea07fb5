//! Mock LLM provider for testing.

use std::sync::Mutex;

use crate::error::{BoardsightError, Result};

use super::provider::{LlmConfig, LlmProvider};

/// Mock provider that returns a canned response and records every prompt.
pub struct MockProvider {
    config: LlmConfig,
    response: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockProvider {
    /// Create a mock that answers with a short summary of the prompt.
    pub fn new() -> Self {
        Self {
            config: LlmConfig::default(),
            response: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with the given text.
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmProvider for MockProvider {
    fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts
            .lock()
            .map_err(|_| BoardsightError::Llm("mock prompt log poisoned".to_string()))?
            .push(prompt.to_string());

        Ok(self.response.clone().unwrap_or_else(|| {
            format!(
                "Mock analysis based on {} lines of business context.",
                prompt.lines().filter(|l| !l.trim().is_empty()).count()
            )
        }))
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}
