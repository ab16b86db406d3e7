mod bank;
mod loader;

pub use bank::{LevelSummary, StaticQuestionBank, TopicSummary};
pub use loader::{load_bank_from_json, load_bank_from_str, load_builtin_bank};
