//! Pre-authored question sets keyed by topic and level.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Serialize;

use crate::error::LoadError;
use crate::models::{Level, QuestionSet, normalize_topic};

use super::loader;

#[derive(Debug)]
pub(crate) struct BankEntry {
    pub(crate) name: String,
    pub(crate) levels: BTreeMap<Level, Vec<QuestionSet>>,
}

/// Immutable map from normalized topic to per-level question sets.
///
/// Built once at start-up and shared read-only between requests.
#[derive(Debug)]
pub struct StaticQuestionBank {
    entries: HashMap<String, BankEntry>,
}

/// One topic of the bank catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary {
    pub name: String,
    pub key: String,
    pub levels: Vec<LevelSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSummary {
    pub level: Level,
    pub label: &'static str,
    pub sets: usize,
}

impl StaticQuestionBank {
    pub(crate) fn new(entries: HashMap<String, BankEntry>) -> Self {
        Self { entries }
    }

    /// The question bank bundled with the crate.
    pub fn builtin() -> Result<Self, LoadError> {
        loader::load_builtin_bank()
    }

    /// Load an operator-supplied bank file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        loader::load_bank_from_json(path)
    }

    /// All pre-authored sets for `topic` at `level`.
    ///
    /// `topic` may be given in any spelling; it is normalized before the
    /// lookup. A miss is an expected outcome, not an error.
    pub fn lookup(&self, topic: &str, level: Level) -> Option<&[QuestionSet]> {
        let key = normalize_topic(topic);
        let sets = self.entries.get(&key)?.levels.get(&level)?;
        tracing::debug!(topic = %key, %level, sets = sets.len(), "static bank hit");
        Some(sets.as_slice())
    }

    pub fn topic_count(&self) -> usize {
        self.entries.len()
    }

    /// Catalogue of topics and levels, sorted by topic name.
    pub fn topics(&self) -> Vec<TopicSummary> {
        let mut topics: Vec<TopicSummary> = self
            .entries
            .iter()
            .map(|(key, entry)| TopicSummary {
                name: entry.name.clone(),
                key: key.clone(),
                levels: entry
                    .levels
                    .iter()
                    .map(|(level, sets)| LevelSummary {
                        level: *level,
                        label: level.label(),
                        sets: sets.len(),
                    })
                    .collect(),
            })
            .collect();
        topics.sort_by(|a, b| a.name.cmp(&b.name));
        topics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: i64) -> Level {
        Level::new(n).unwrap()
    }

    #[test]
    fn test_lookup_normalizes_topic() {
        let bank = StaticQuestionBank::builtin().unwrap();
        let a = bank.lookup("Data Structures", level(1)).unwrap();
        let b = bank.lookup("data-structures", level(1)).unwrap();
        let c = bank.lookup("DATA   STRUCTURES", level(1)).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_lookup_miss() {
        let bank = StaticQuestionBank::builtin().unwrap();
        assert!(bank.lookup("quantum computing", level(2)).is_none());
        assert!(bank.lookup("python", level(5)).is_none());
    }

    #[test]
    fn test_builtin_python_has_two_beginner_sets() {
        let bank = StaticQuestionBank::builtin().unwrap();
        let sets = bank.lookup("python", level(1)).unwrap();
        assert_eq!(sets.len(), 2);
        assert_ne!(sets[0].ids(), sets[1].ids());
    }

    #[test]
    fn test_topics_catalogue() {
        let bank = StaticQuestionBank::builtin().unwrap();
        let topics = bank.topics();
        assert_eq!(topics.len(), bank.topic_count());

        let python = topics.iter().find(|t| t.key == "python").unwrap();
        assert_eq!(python.name, "Python");
        assert_eq!(python.levels[0].level, level(1));
        assert_eq!(python.levels[0].label, "Beginner");
        assert_eq!(python.levels[0].sets, 2);

        assert!(topics.windows(2).all(|w| w[0].name <= w[1].name));
    }
}
