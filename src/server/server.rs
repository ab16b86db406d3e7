//! HTTP server: routes, handlers and the serve loop.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::attempt::ATTEMPT_HEADER;
use crate::data::TopicSummary;
use crate::protocol::{GradeRequest, GradeResponse, QuizRequest, QuizResponse};
use crate::scoring::grade;

use super::error::ApiError;
use super::state::AppState;

#[derive(Serialize)]
struct TopicsResponse {
    topics: Vec<TopicSummary>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/topics", get(list_topics))
        .route("/api/quiz", post(create_quiz))
        .route("/api/quiz/grade", post(grade_quiz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind `address` and serve until the process is stopped.
pub async fn run(address: &str, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let topics = state.assembler.bank().topic_count();
    let listener = TcpListener::bind(address).await?;
    tracing::info!(address = %listener.local_addr()?, topics, "quiz server listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

async fn list_topics(State(state): State<AppState>) -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: state.assembler.bank().topics(),
    })
}

async fn create_quiz(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(request) = payload?;
    // A header that is present but not valid text still counts as explicit.
    let attempt_header = headers
        .get(ATTEMPT_HEADER)
        .map(|value| value.to_str().unwrap_or_default());

    // A missing level is reported the same way as an out-of-range one.
    let quiz = state
        .assembler
        .get_quiz(
            request.topic.as_deref().unwrap_or_default(),
            request.level.unwrap_or(0),
            attempt_header,
        )
        .await?;

    Ok(Json(QuizResponse::from(quiz)))
}

async fn grade_quiz(
    payload: Result<Json<GradeRequest>, JsonRejection>,
) -> Result<Json<GradeResponse>, ApiError> {
    let Json(request) = payload?;
    let report = grade(&request.questions, &request.answers);

    let today = Utc::now().date_naive();
    let progress = request.progress.record(
        &report,
        request.topic.as_deref(),
        request.last_quiz_date,
        today,
    );

    tracing::debug!(
        correct = report.correct,
        total = report.total,
        xp = report.xp_gained,
        "graded quiz"
    );
    Ok(Json(GradeResponse::new(report, progress)))
}
