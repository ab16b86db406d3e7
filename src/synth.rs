//! Generic question synthesis for topics the static bank does not cover.
//!
//! This is the last tier of the fallback chain and never fails: it fills a
//! small library of topic-agnostic templates with the topic name and level.

use crate::models::{Level, QUESTIONS_PER_SET, Question, QuestionSet, Topic};

/// Step between the first templates of consecutive attempts.
const WINDOW_STRIDE: usize = 2;

struct Template {
    stem: &'static str,
    options: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
}

// Placeholders: {topic}, {level} (label), {focus}.
const TEMPLATES: [Template; 8] = [
    Template {
        stem: "What is a fundamental concept every {level} learner of {topic} should understand?",
        options: [
            "Trivia that is unrelated to {topic}",
            "The core principles and terminology of {topic}",
            "Only the history of {topic}",
            "Nothing, {topic} has no underlying concepts",
        ],
        correct: 1,
        explanation: "Every field is built on core principles; learning them first makes the rest of {topic} easier to follow.",
    },
    Template {
        stem: "Which approach best helps a {level} learner make progress in {topic}?",
        options: [
            "Memorising answers without context",
            "Avoiding any hands-on work",
            "Practising with small, focused exercises",
            "Skipping the fundamentals entirely",
        ],
        correct: 2,
        explanation: "Short, focused practice builds understanding of {topic} faster than passive memorisation.",
    },
    Template {
        stem: "When troubleshooting a problem in {topic}, what should you usually do first?",
        options: [
            "Reproduce and isolate the problem",
            "Start over from scratch",
            "Ignore any error messages",
            "Change several things at once",
        ],
        correct: 0,
        explanation: "Isolating a problem narrows down its cause before you try to fix it.",
    },
    Template {
        stem: "What should study of {topic} at the {level} level focus on?",
        options: [
            "Memorising unrelated facts",
            "Avoiding practical examples",
            "Reading only summaries",
            "{focus}",
        ],
        correct: 3,
        explanation: "At the {level} level the most useful focus for {topic} is {focus}.",
    },
    Template {
        stem: "Which resource is generally the most reliable reference for {topic}?",
        options: [
            "Anonymous rumours",
            "Official documentation and primary sources",
            "Outdated, unverified posts",
            "Guesswork",
        ],
        correct: 1,
        explanation: "Primary sources are maintained by the people closest to {topic} and are the most trustworthy.",
    },
    Template {
        stem: "What is the main benefit of learning the standard vocabulary of {topic}?",
        options: [
            "It removes the need to practise",
            "It guarantees expert status",
            "It lets you communicate precisely with other practitioners",
            "It has no practical benefit",
        ],
        correct: 2,
        explanation: "Shared terminology lets people discuss {topic} without ambiguity.",
    },
    Template {
        stem: "How do experienced practitioners usually keep improving at {topic}?",
        options: [
            "Deliberate practice combined with feedback",
            "Never revisiting the basics",
            "Working alone without review",
            "Repeating the same exercise unchanged",
        ],
        correct: 0,
        explanation: "Feedback shows what to work on next, which keeps practice in {topic} effective.",
    },
    Template {
        stem: "Which statement about making mistakes while learning {topic} is most accurate?",
        options: [
            "Experts never make them",
            "They should be hidden from others",
            "They mean you should give up",
            "They point to what to study next",
        ],
        correct: 3,
        explanation: "Mistakes reveal gaps in understanding, which makes them useful when learning {topic}.",
    },
];

/// Build five templated questions about `topic`.
///
/// The template window starts at `((attempt - 1) * 2) mod 8` and wraps
/// around, so consecutive attempts shift the mix of questions.
pub fn synthesize(topic: &Topic, level: Level, attempt: u32) -> QuestionSet {
    let attempt = attempt.max(1);
    let start = window_start(attempt);

    let questions = (0..QUESTIONS_PER_SET)
        .map(|i| {
            let template = &TEMPLATES[(start + i) % TEMPLATES.len()];
            let fill = |text: &str| {
                text.replace("{topic}", topic.display())
                    .replace("{level}", level.label())
                    .replace("{focus}", level.focus())
            };
            let options = template.options.map(fill);
            Question {
                id: format!("{}-{}-{}-{}", topic.key(), level, attempt, i + 1),
                prompt: fill(template.stem),
                correct_answer: options[template.correct].clone(),
                options,
                explanation: Some(fill(template.explanation)),
            }
        })
        .collect();

    QuestionSet::from_generated(questions)
}

fn window_start(attempt: u32) -> usize {
    let steps = (attempt as usize - 1) % TEMPLATES.len();
    (steps * WINDOW_STRIDE) % TEMPLATES.len()
}
