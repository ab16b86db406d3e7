//! Turning model output into a validated question set.
//!
//! Model output is untrusted: anything other than exactly five well-formed
//! questions is rejected as a whole. There is no partial recovery.

use serde_json::Value;

use crate::error::ProviderError;
use crate::models::{QUESTIONS_PER_SET, Question, QuestionError, QuestionSet};

/// Remove markdown code fences (```` ``` ```` with an optional language tag).
pub fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find("```") {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 3..];
        let tag_len = rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());
        rest = &rest[tag_len..];
    }
    out.push_str(rest);

    out.trim().to_string()
}

/// The outermost `[...]` span of `text`, if any.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

/// Parse raw model text into a question set.
pub fn parse_question_set(text: &str) -> Result<QuestionSet, ProviderError> {
    let cleaned = strip_code_fences(text);
    let array = extract_json_array(&cleaned)
        .ok_or_else(|| ProviderError::Malformed("no JSON array in response".to_string()))?;

    let items: Vec<Value> =
        serde_json::from_str(array).map_err(|e| ProviderError::Malformed(e.to_string()))?;
    if items.len() != QUESTIONS_PER_SET {
        return Err(QuestionError::WrongCount(items.len()).into());
    }

    let questions = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<Question>(item)
                .map_err(|e| ProviderError::Malformed(format!("question {}: {e}", i + 1)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuestionSet::new(questions)?)
}

#[cfg(test)]
pub(crate) fn sample_questions_json(prefix: &str) -> String {
    let questions: Vec<Value> = (1..=QUESTIONS_PER_SET)
        .map(|i| {
            serde_json::json!({
                "id": format!("{prefix}-{i}"),
                "question": format!("Generated question {i}?"),
                "options": ["one", "two", "three", "four"],
                "correctAnswer": "three",
                "explanation": "Three is right."
            })
        })
        .collect();
    Value::Array(questions).to_string()
}
