use crate::models::{Level, Topic};

/// Longest slice of the topic name embedded in a prompt, in characters.
pub const PROMPT_TOPIC_MAX_CHARS: usize = 200;

/// Instruction sent to the model for one quiz.
pub fn build_prompt(topic: &Topic, level: Level, attempt: u32) -> String {
    format!(
        r#"You are an assessment specialist.
Create EXACTLY five multiple-choice questions about "{topic}" for {label} learners.

Guidelines:
- Focus on {focus}.
- Each question has exactly 4 distinct options and ONE of them is correct.
- Provide a brief explanation for the correct answer.
- This is attempt #{attempt}, so do NOT repeat questions from earlier attempts.

Return ONLY valid JSON (no markdown) in this form:
[
  {{
    "id": "string",
    "question": "string",
    "options": ["A", "B", "C", "D"],
    "correctAnswer": "exact text of the correct option",
    "explanation": "string"
  }}
]
The array must contain exactly five objects with distinct ids."#,
        topic = prompt_topic(topic),
        label = level.label(),
        focus = level.focus(),
    )
}

fn prompt_topic(topic: &Topic) -> &str {
    let display = topic.display();
    match display.char_indices().nth(PROMPT_TOPIC_MAX_CHARS) {
        Some((end, _)) => &display[..end],
        None => display,
    }
}
