use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use trivia_api::db::queries::questions::create_question;
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::server::app::{api_router, AppState};

async fn test_app() -> (Router, SqlitePool, TempDir) {
    let temp = TempDir::new().expect("failed to create temp dir");
    let pool = establish_connection(temp.path().join("trivia.db"))
        .await
        .expect("failed to open test db");
    run_migrations(&pool).await.expect("migrations failed");
    let app = api_router(AppState::new(pool.clone()));
    (app, pool, temp)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let body = serde_json::from_slice(&bytes).expect("body was not json");
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

async fn seed_question(pool: &SqlitePool, text: &str, category: i64) -> i64 {
    create_question(pool, text, "an answer", category, 1)
        .await
        .expect("failed to seed question")
}

#[tokio::test]
async fn quiz_stays_inside_the_requested_category() {
    let (app, pool, _temp) = test_app().await;
    seed_question(&pool, "Who painted the Mona Lisa?", 2).await;
    seed_question(&pool, "What movement is Dali known for?", 2).await;
    seed_question(&pool, "Which country hosted the 2014 world cup?", 6).await;

    for _ in 0..5 {
        let (status, body) = send(
            &app,
            post_json(
                "/quizzes",
                json!({"previous_questions": [], "quiz_category": {"type": "Art", "id": 2}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["question"]["category"], 2);
    }
}

#[tokio::test]
async fn quiz_never_repeats_previous_questions() {
    let (app, pool, _temp) = test_app().await;
    seed_question(&pool, "Who discovered penicillin?", 5).await;
    seed_question(&pool, "What is the chemical symbol for gold?", 5).await;
    seed_question(&pool, "How many bones are in the human body?", 5).await;

    let mut previous: Vec<i64> = Vec::new();
    for _ in 0..3 {
        let (status, body) = send(
            &app,
            post_json(
                "/quizzes",
                json!({"previous_questions": previous, "quiz_category": {"type": "Entertainment", "id": 5}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = body["question"]["id"].as_i64().expect("no question served");
        assert!(!previous.contains(&id), "question {id} served twice");
        assert_eq!(body["question"]["category"], 5);
        previous.push(id);
    }

    // every question in the category has been seen
    let (status, body) = send(
        &app,
        post_json(
            "/quizzes",
            json!({"previous_questions": previous, "quiz_category": {"type": "Entertainment", "id": 5}}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["question"], Value::Null);
}

#[tokio::test]
async fn category_zero_draws_from_every_category() {
    let (app, pool, _temp) = test_app().await;
    seed_question(&pool, "What is the heaviest organ?", 1).await;
    seed_question(&pool, "Who painted the Mona Lisa?", 2).await;

    let mut previous: Vec<i64> = Vec::new();
    let mut seen_categories = Vec::new();
    for _ in 0..2 {
        let (status, body) = send(
            &app,
            post_json(
                "/quizzes",
                json!({"previous_questions": previous, "quiz_category": {"type": "click", "id": 0}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = body["question"]["id"].as_i64().expect("no question served");
        previous.push(id);
        seen_categories.push(body["question"]["category"].as_i64().unwrap());
    }
    seen_categories.sort();
    assert_eq!(seen_categories, vec![1, 2]);

    let (status, body) = send(
        &app,
        post_json(
            "/quizzes",
            json!({"previous_questions": previous, "quiz_category": {"type": "click", "id": 0}}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"], Value::Null);
}

#[tokio::test]
async fn category_id_may_arrive_as_a_string() {
    let (app, pool, _temp) = test_app().await;
    seed_question(&pool, "Who painted the Mona Lisa?", 2).await;

    let (status, body) = send(
        &app,
        post_json(
            "/quizzes",
            json!({"previous_questions": [], "quiz_category": {"type": "Art", "id": "2"}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["category"], 2);
}

#[tokio::test]
async fn missing_fields_are_bad_requests() {
    let (app, _pool, _temp) = test_app().await;

    let (status, body) = send(&app, post_json("/quizzes", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 400);
    assert_eq!(body["message"], "bad request");

    let (status, _body) = send(&app, post_json("/quizzes", json!({"previous_questions": []}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _body) = send(
        &app,
        post_json(
            "/quizzes",
            json!({"quiz_category": {"type": "Science", "id": 1}}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_previous_questions_is_a_bad_request() {
    let (app, _pool, _temp) = test_app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/quizzes",
            json!({"previous_questions": "nope", "quiz_category": {"type": "Science", "id": 1}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "bad request");
}

#[tokio::test]
async fn unknown_category_yields_no_question() {
    let (app, pool, _temp) = test_app().await;
    seed_question(&pool, "What is the heaviest organ?", 1).await;

    let (status, body) = send(
        &app,
        post_json(
            "/quizzes",
            json!({"previous_questions": [], "quiz_category": {"type": "mystery", "id": 999}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["question"], Value::Null);
}
