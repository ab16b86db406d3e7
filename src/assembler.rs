//! The fallback chain: AI provider, then static bank, then synthesis.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::ai::QuestionGenerator;
use crate::attempt::{compute_attempt, set_index};
use crate::data::StaticQuestionBank;
use crate::error::ValidationError;
use crate::models::{Level, QuestionSet, Source, Topic};
use crate::synth::synthesize;

pub const NO_CREDENTIAL_WARNING: &str = "AI credential not configured. Using built-in questions.";
pub const AI_FAILED_WARNING: &str = "AI generation unavailable. Using built-in questions.";

/// A quiz ready to hand to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledQuiz {
    pub topic: Topic,
    pub level: Level,
    pub attempt: u32,
    pub source: Source,
    pub questions: QuestionSet,
    /// Set when the AI tier was skipped or failed.
    pub warning: Option<String>,
}

/// Picks the question source for each request.
///
/// Holds only read-only data, so one instance is shared by every request.
pub struct QuizAssembler {
    bank: StaticQuestionBank,
    generator: Option<Arc<dyn QuestionGenerator>>,
}

impl QuizAssembler {
    pub fn new(bank: StaticQuestionBank) -> Self {
        Self {
            bank,
            generator: None,
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn QuestionGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn bank(&self) -> &StaticQuestionBank {
        &self.bank
    }

    /// Assemble a quiz for `topic` at `level` using the current time.
    pub async fn get_quiz(
        &self,
        topic: &str,
        level: i64,
        attempt_header: Option<&str>,
    ) -> Result<AssembledQuiz, ValidationError> {
        self.get_quiz_at(topic, level, attempt_header, Utc::now()).await
    }

    /// Like [`get_quiz`](Self::get_quiz) with an explicit clock.
    pub async fn get_quiz_at(
        &self,
        topic: &str,
        level: i64,
        attempt_header: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<AssembledQuiz, ValidationError> {
        let topic = Topic::parse(topic)?;
        let level = Level::new(level)?;
        let attempt = compute_attempt(&topic, level, now, attempt_header);

        let warning = match &self.generator {
            Some(generator) if generator.is_configured() => {
                match generator.generate(&topic, level, attempt).await {
                    Ok(questions) => {
                        tracing::info!(
                            topic = %topic,
                            %level,
                            attempt,
                            generator = generator.name(),
                            "serving AI questions"
                        );
                        return Ok(AssembledQuiz {
                            topic,
                            level,
                            attempt,
                            source: Source::Ai,
                            questions,
                            warning: None,
                        });
                    }
                    Err(err) => {
                        tracing::warn!(
                            topic = %topic,
                            %level,
                            attempt,
                            error = %err,
                            "AI generation failed, falling back"
                        );
                        AI_FAILED_WARNING
                    }
                }
            }
            _ => {
                tracing::debug!("AI generator not configured, skipping");
                NO_CREDENTIAL_WARNING
            }
        };

        let (source, questions) = match self.bank.lookup(topic.key(), level) {
            Some(sets) if !sets.is_empty() => {
                let index = set_index(attempt, sets.len());
                (Source::Static, sets[index].clone())
            }
            _ => (Source::Generic, synthesize(&topic, level, attempt)),
        };

        tracing::info!(
            topic = %topic,
            %level,
            attempt,
            %source,
            "serving fallback questions"
        );
        Ok(AssembledQuiz {
            topic,
            level,
            attempt,
            source,
            questions,
            warning: Some(warning.to_string()),
        })
    }
}
