//! Grading a finished quiz and the progress arithmetic around it.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{NUM_OPTIONS, QuestionSet};

/// Minimum percentage that counts a topic level as passed.
pub const PASS_THRESHOLD: u8 = 70;

/// Floor on the XP awarded for finishing a quiz.
pub const MIN_XP: u32 = 10;

/// One answer from the caller's sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    /// Option text the user picked, `None` when the question timed out.
    #[serde(default)]
    pub selected: Option<String>,
}

/// Result for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResult {
    pub question_id: String,
    pub question_text: String,
    pub your_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
    pub options: [String; NUM_OPTIONS],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Outcome of grading one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeReport {
    pub correct: usize,
    pub total: usize,
    /// Percentage, rounded to the nearest integer.
    pub score: u8,
    pub passed: bool,
    pub xp_gained: u32,
    pub results: Vec<AnswerResult>,
}

/// Grade `answers` against `questions`.
///
/// Answers are matched by question id. Questions without an answer, and
/// answers naming an option the question does not have, count as wrong.
pub fn grade(questions: &QuestionSet, answers: &[Answer]) -> GradeReport {
    let results: Vec<AnswerResult> = questions
        .iter()
        .map(|question| {
            let your_answer = answers
                .iter()
                .find(|answer| answer.question_id == question.id)
                .and_then(|answer| answer.selected.clone());
            let is_correct = your_answer
                .as_deref()
                .is_some_and(|selected| question.is_correct(selected));

            AnswerResult {
                question_id: question.id.clone(),
                question_text: question.prompt.clone(),
                your_answer,
                correct_answer: question.correct_answer.clone(),
                is_correct,
                options: question.options.clone(),
                explanation: question.explanation.clone(),
            }
        })
        .collect();

    let correct = results.iter().filter(|r| r.is_correct).count();
    let total = results.len();
    let score = percentage(correct, total);

    GradeReport {
        correct,
        total,
        score,
        passed: score >= PASS_THRESHOLD,
        xp_gained: xp_for_score(score),
        results,
    }
}

fn percentage(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u8
}

/// XP for a percentage score: half the score, never less than [`MIN_XP`].
pub fn xp_for_score(score: u8) -> u32 {
    ((f64::from(score) / 2.0).round() as u32).max(MIN_XP)
}

/// Title earned from accumulated XP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Novice,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Rank {
    pub fn from_xp(xp: u32) -> Self {
        match xp {
            1000.. => Rank::Expert,
            500.. => Rank::Advanced,
            200.. => Rank::Intermediate,
            50.. => Rank::Beginner,
            _ => Rank::Novice,
        }
    }
}

/// Daily streak after finishing a quiz on `today`.
///
/// A quiz on the day after the last one (or the very first quiz) extends
/// the streak, another quiz on the same day leaves it alone, and any gap
/// restarts it at 1.
pub fn next_streak(current: u32, last_quiz_date: Option<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(last) = last_quiz_date else {
        return current.saturating_add(1);
    };

    if last == today {
        current
    } else if today.checked_sub_days(Days::new(1)) == Some(last) {
        current.saturating_add(1)
    } else {
        1
    }
}

/// Running average after one more quiz, rounded to the nearest integer.
pub fn next_average(average: u8, total_quizzes: u32, score: u8) -> u8 {
    let quizzes = f64::from(total_quizzes);
    let sum = f64::from(average) * quizzes + f64::from(score);
    (sum / (quizzes + 1.0)).round().min(100.0) as u8
}

/// A learner's accumulated stats, carried by the client between quizzes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Progress {
    pub total_quizzes: u32,
    pub average_score: u8,
    pub total_xp: u32,
    pub streak: u32,
    /// Topics passed at least once, in the order they were first passed.
    pub completed_topics: Vec<String>,
}

impl Progress {
    /// Stats after finishing the quiz graded in `report` on `today`.
    pub fn record(
        &self,
        report: &GradeReport,
        topic: Option<&str>,
        last_quiz_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Progress {
        let mut completed_topics = self.completed_topics.clone();
        if let Some(topic) = topic.map(str::trim).filter(|t| !t.is_empty()) {
            if report.passed && !completed_topics.iter().any(|t| t == topic) {
                completed_topics.push(topic.to_string());
            }
        }

        Progress {
            total_quizzes: self.total_quizzes.saturating_add(1),
            average_score: next_average(self.average_score, self.total_quizzes, report.score),
            total_xp: self.total_xp.saturating_add(report.xp_gained),
            streak: next_streak(self.streak, last_quiz_date, today),
            completed_topics,
        }
    }

    pub fn rank(&self) -> Rank {
        Rank::from_xp(self.total_xp)
    }
}
