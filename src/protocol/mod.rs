//! HTTP API message types.

mod messages;

pub use messages::{ErrorResponse, GradeRequest, GradeResponse, QuizRequest, QuizResponse};
