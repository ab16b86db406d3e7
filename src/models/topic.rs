use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lookup key for topics made only of separators, such as `"---"`.
pub const FALLBACK_TOPIC_KEY: &str = "topic";

/// Canonical lookup form of a topic name.
///
/// Case-folds and collapses runs of whitespace, hyphens and underscores into
/// a single `-`, so "Data Structures", "data-structures" and
/// "DATA   STRUCTURES" all become `data-structures`.
pub fn normalize_topic(topic: &str) -> String {
    topic
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// A validated topic: the caller's name for display plus its lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    display: String,
    key: String,
}

impl Topic {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let display = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if display.is_empty() {
            return Err(ValidationError::EmptyTopic);
        }

        let mut key = normalize_topic(&display);
        if key.is_empty() {
            key = FALLBACK_TOPIC_KEY.to_string();
        }

        Ok(Self { display, key })
    }

    /// Name as the caller wrote it, with whitespace collapsed.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Normalized key used for bank lookups, hashing and synthetic ids.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Difficulty tier, 1 (Beginner) through 5 (Master).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::LevelOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Beginner",
            2 => "Intermediate",
            3 => "Advanced",
            4 => "Expert",
            _ => "Master",
        }
    }

    /// What questions at this level should concentrate on.
    pub fn focus(self) -> &'static str {
        match self.0 {
            1 => "basic definitions and examples",
            2 => "practical usage and problem-solving",
            3 => "optimisation and edge cases",
            4 => "architectural considerations",
            _ => "cutting-edge concepts",
        }
    }

    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN..=Self::MAX).map(Level)
    }
}

impl TryFrom<i64> for Level {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which tier produced a question set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Ai,
    Static,
    Generic,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Ai => write!(f, "ai"),
            Source::Static => write!(f, "static"),
            Source::Generic => write!(f, "generic"),
        }
    }
}
