//! Language-model integration for narrative answers.
//!
//! The model is treated as an opaque text-completion service: a prompt goes in,
//! text comes out.
//!
//! # Supported Providers
//!
//! - **Gemini** - Google models via API (requires `GEMINI_API_KEY` or `GOOGLE_API_KEY`)
//! - **Mock** - Canned responses for tests and offline runs

mod gemini;
mod mock;
mod prompts;
mod provider;

pub use gemini::GeminiProvider;
pub use mock::MockProvider;
pub use prompts::{DEFAULT_COMPANY, advisor_prompt};
pub use provider::{LlmConfig, LlmProvider};
