//! AI-generated questions.
//!
//! The assembler only sees the [`QuestionGenerator`] trait; [`GeminiProvider`]
//! is the production implementation.

pub mod credential;
mod gemini;
pub mod parse;
pub mod prompt;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::models::{Level, QuestionSet, Topic};

pub use credential::{check_credential, is_usable};
pub use gemini::GeminiProvider;

/// Something that can produce a fresh question set on demand.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Whether a usable credential is configured. The assembler skips
    /// generators that report `false`.
    fn is_configured(&self) -> bool;

    async fn generate(
        &self,
        topic: &Topic,
        level: Level,
        attempt: u32,
    ) -> Result<QuestionSet, ProviderError>;
}
