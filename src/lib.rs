//! # topic-quiz
//!
//! Picks five multiple-choice questions for a topic and difficulty level.
//!
//! Questions come from the first source that can supply them: an AI
//! provider (Gemini) when a usable credential is configured, then the
//! bundled question bank, then a template synthesizer that works for any
//! topic. The caller always gets a full quiz.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use topic_quiz::{QuizAssembler, StaticQuestionBank};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let assembler = QuizAssembler::new(StaticQuestionBank::builtin()?);
//! let quiz = assembler.get_quiz("Python", 1, None).await?;
//!
//! println!("{} questions from {}", quiz.questions.len(), quiz.source);
//! # Ok(())
//! # }
//! ```

pub mod ai;
pub mod assembler;
pub mod attempt;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod protocol;
pub mod scoring;
pub mod server;
pub mod synth;

pub use ai::{GeminiProvider, QuestionGenerator};
pub use assembler::{AssembledQuiz, QuizAssembler};
pub use attempt::{ATTEMPT_BOUND, ATTEMPT_HEADER, compute_attempt};
pub use config::GeminiConfig;
pub use data::StaticQuestionBank;
pub use error::{LoadError, ProviderError, ValidationError};
pub use models::{Level, Question, QuestionSet, Source, Topic};
pub use synth::synthesize;
