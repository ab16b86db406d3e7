//! Core quiz data types.

mod question;
mod topic;

pub use question::{NUM_OPTIONS, QUESTIONS_PER_SET, Question, QuestionError, QuestionSet};
pub use topic::{Level, Source, FALLBACK_TOPIC_KEY, Topic, normalize_topic};

#[cfg(test)]
pub(crate) use question::sample_question;
