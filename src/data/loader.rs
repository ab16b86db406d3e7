use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::models::{Level, Question, QuestionSet, normalize_topic};

use super::bank::{BankEntry, StaticQuestionBank};

/// Question bank shipped inside the binary.
const BUILTIN_BANK: &str = include_str!("questions.json");

#[derive(Deserialize)]
struct BankFile {
    topics: Vec<TopicEntry>,
}

#[derive(Deserialize)]
struct TopicEntry {
    name: String,
    levels: BTreeMap<u8, Vec<Vec<Question>>>,
}

/// Parse the bundled question bank.
pub fn load_builtin_bank() -> Result<StaticQuestionBank, LoadError> {
    load_bank_from_str(BUILTIN_BANK)
}

/// Load a question bank from a JSON file.
pub fn load_bank_from_json<P: AsRef<Path>>(path: P) -> Result<StaticQuestionBank, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_bank_from_str(&json_content)
}

/// Parse and validate a question bank document.
pub fn load_bank_from_str(json: &str) -> Result<StaticQuestionBank, LoadError> {
    let file: BankFile = serde_json::from_str(json)?;

    if file.topics.is_empty() {
        return Err(LoadError::Invalid(
            "question bank must contain at least one topic".to_string(),
        ));
    }

    let mut entries = HashMap::with_capacity(file.topics.len());
    for topic in file.topics {
        let key = normalize_topic(&topic.name);
        if key.is_empty() {
            return Err(LoadError::Invalid(format!(
                "topic name '{}' is empty after normalization",
                topic.name
            )));
        }
        if entries.contains_key(&key) {
            return Err(LoadError::Invalid(format!(
                "topic '{}' is listed more than once",
                topic.name
            )));
        }

        let mut levels = BTreeMap::new();
        for (level, raw_sets) in topic.levels {
            let level = Level::new(i64::from(level)).map_err(|_| {
                LoadError::Invalid(format!("topic '{}' has unknown level {level}", topic.name))
            })?;
            if raw_sets.is_empty() {
                return Err(LoadError::Invalid(format!(
                    "topic '{}' level {level} has no question sets",
                    topic.name
                )));
            }

            let sets = raw_sets
                .into_iter()
                .map(|questions| {
                    QuestionSet::new(questions).map_err(|source| LoadError::InvalidSet {
                        topic: topic.name.clone(),
                        level: level.get(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            levels.insert(level, sets);
        }

        entries.insert(
            key,
            BankEntry {
                name: topic.name,
                levels,
            },
        );
    }

    Ok(StaticQuestionBank::new(entries))
}
