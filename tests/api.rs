use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use topic_quiz::server::{AppState, router};
use topic_quiz::{QuizAssembler, StaticQuestionBank};

fn app() -> Router {
    let bank = StaticQuestionBank::builtin().unwrap();
    router(AppState::new(QuizAssembler::new(bank)))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn quiz_request(topic: &str, level: i64, attempt: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/quiz")
        .header("content-type", "application/json");
    if let Some(attempt) = attempt {
        builder = builder.header("x-quiz-attempt", attempt);
    }
    builder
        .body(Body::from(json!({ "topic": topic, "level": level }).to_string()))
        .unwrap()
}

fn question_ids(body: &Value) -> Vec<String> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn test_invalid_quiz_requests_are_rejected() {
    let (status, body) = send(quiz_request("", 1, None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Topic is required");

    for level in [0, 6] {
        let (status, body) = send(quiz_request("python", level, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Level must be 1-5");
    }

    let (status, body) = send(post_json("/api/quiz", json!({ "topic": "python" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Level must be 1-5");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/quiz")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_static_quiz_without_credential() {
    let (status, body) = send(quiz_request("JavaScript", 1, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "static");
    assert_eq!(body["topic"], "JavaScript");
    assert_eq!(body["level"], 1);
    assert!(body["warning"].is_string());
    assert!(body["quizId"].is_string());

    let attempt = body["attempt"].as_u64().unwrap();
    assert!((1..=4).contains(&attempt));

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    for question in questions {
        let options = question["options"].as_array().unwrap();
        assert_eq!(options.len(), 4);
        assert!(options.contains(&question["correctAnswer"]));
        assert!(question["id"].as_str().unwrap().starts_with("js-1"));
    }
}

#[tokio::test]
async fn test_generic_quiz_for_unknown_topic() {
    let (status, body) = send(quiz_request("quantum computing", 2, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "generic");

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    for question in questions {
        assert!(
            question["question"]
                .as_str()
                .unwrap()
                .contains("quantum computing")
        );
    }
}

#[tokio::test]
async fn test_long_and_separator_only_topics() {
    let long = "x".repeat(150);
    for topic in [long.as_str(), "---"] {
        let (status, body) = send(quiz_request(topic, 2, None)).await;
        assert_eq!(status, StatusCode::OK, "{topic}");
        assert_eq!(body["source"], "generic");
        assert_eq!(body["questions"].as_array().unwrap().len(), 5);
    }
}

#[tokio::test]
async fn test_unreadable_attempt_header_counts_as_one() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/quiz")
        .header("content-type", "application/json")
        .header(
            "x-quiz-attempt",
            axum::http::HeaderValue::from_bytes(b"\xff\xfe").unwrap(),
        )
        .body(Body::from(json!({ "topic": "python", "level": 1 }).to_string()))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["attempt"], 1);
    assert_eq!(question_ids(&body)[0], "py-1a-1");
}

#[tokio::test]
async fn test_attempt_header_rotates_static_sets() {
    let (_, first) = send(quiz_request("python", 1, Some("1"))).await;
    let (_, second) = send(quiz_request("python", 1, Some("2"))).await;
    let (_, third) = send(quiz_request("python", 1, Some("3"))).await;

    assert_eq!(first["attempt"], 1);
    assert_eq!(second["attempt"], 2);
    assert_eq!(question_ids(&first)[0], "py-1a-1");
    assert_eq!(question_ids(&second)[0], "py-1b-1");
    assert_eq!(question_ids(&first), question_ids(&third));
}

#[tokio::test]
async fn test_topic_variants_share_a_bank_entry() {
    let (_, spaced) = send(quiz_request("Data Structures", 1, Some("1"))).await;
    let (_, dashed) = send(quiz_request("data-structures", 1, Some("1"))).await;
    assert_eq!(spaced["source"], "static");
    assert_eq!(question_ids(&spaced), question_ids(&dashed));
}

#[tokio::test]
async fn test_grade_endpoint() {
    let (_, quiz) = send(quiz_request("python", 1, Some("1"))).await;
    let questions = quiz["questions"].clone();
    let answers: Vec<Value> = questions
        .as_array()
        .unwrap()
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let selected = if i < 4 {
                q["correctAnswer"].clone()
            } else {
                Value::Null
            };
            json!({ "questionId": q["id"], "selected": selected })
        })
        .collect();

    let (status, body) = send(post_json(
        "/api/quiz/grade",
        json!({
            "questions": questions,
            "answers": answers,
            "topic": "Python",
            "totalXp": 180,
            "totalQuizzes": 1,
            "averageScore": 60
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct"], 4);
    assert_eq!(body["total"], 5);
    assert_eq!(body["score"], 80);
    assert_eq!(body["passed"], true);
    assert_eq!(body["xpGained"], 40);
    assert_eq!(body["totalXp"], 220);
    assert_eq!(body["rank"], "Intermediate");
    assert_eq!(body["streak"], 1);
    assert_eq!(body["totalQuizzes"], 2);
    assert_eq!(body["averageScore"], 70);
    assert_eq!(body["completedTopics"], json!(["Python"]));
    assert_eq!(body["results"][4]["isCorrect"], false);
    assert!(body["results"][4]["yourAnswer"].is_null());
}

#[tokio::test]
async fn test_grade_rejects_invalid_question_set() {
    let (status, body) = send(post_json(
        "/api/quiz/grade",
        json!({ "questions": [], "answers": [] }),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_topics_endpoint() {
    let (status, body) = send(Request::get("/api/topics").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);

    let topics = body["topics"].as_array().unwrap();
    let names: Vec<&str> = topics.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"Python"));
    assert!(names.contains(&"Data Structures"));

    let python = topics.iter().find(|t| t["name"] == "Python").unwrap();
    assert_eq!(python["levels"][0]["sets"], 2);
}
