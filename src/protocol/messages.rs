//! JSON bodies exchanged over the HTTP API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assembler::AssembledQuiz;
use crate::models::{Level, QuestionSet, Source};
use crate::scoring::{Answer, AnswerResult, GradeReport, Progress, Rank};

/// `POST /api/quiz` body.
///
/// Both fields are optional at the serde level so a missing one is reported
/// as a validation error rather than a generic decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub level: Option<i64>,
}

/// `POST /api/quiz` reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub quiz_id: Uuid,
    pub source: Source,
    pub topic: String,
    pub level: Level,
    pub attempt: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub questions: QuestionSet,
}

impl From<AssembledQuiz> for QuizResponse {
    fn from(quiz: AssembledQuiz) -> Self {
        Self {
            quiz_id: Uuid::new_v4(),
            source: quiz.source,
            topic: quiz.topic.display().to_string(),
            level: quiz.level,
            attempt: quiz.attempt,
            warning: quiz.warning,
            questions: quiz.questions,
        }
    }
}

/// `POST /api/quiz/grade` body: the quiz as served plus the user's answers
/// and their progress so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRequest {
    pub questions: QuestionSet,
    pub answers: Vec<Answer>,
    /// Topic the quiz was about; recorded as completed when the quiz passes.
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub last_quiz_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub progress: Progress,
}

/// `POST /api/quiz/grade` reply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResponse {
    pub correct: usize,
    pub total: usize,
    pub score: u8,
    pub passed: bool,
    pub xp_gained: u32,
    pub rank: Rank,
    #[serde(flatten)]
    pub progress: Progress,
    pub results: Vec<AnswerResult>,
}

impl GradeResponse {
    pub fn new(report: GradeReport, progress: Progress) -> Self {
        Self {
            correct: report.correct,
            total: report.total,
            score: report.score,
            passed: report.passed,
            xp_gained: report.xp_gained,
            rank: progress.rank(),
            progress,
            results: report.results,
        }
    }
}

/// Body of every error reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
