use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::db::queries::questions::{self, Question};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::extract::ApiJson;
use crate::telemetry::QUIZ_QUESTION_CNTR;

use super::ApiResponse;

/// Category id meaning "draw from every category".
const ANY_CATEGORY: i64 = 0;

#[derive(Deserialize)]
struct QuizRequest {
    previous_questions: Option<Vec<i64>>,
    quiz_category: Option<QuizCategory>,
}

// clients send the id either as a number or as a numeric string
#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    question: Option<Question>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    ApiJson(body): ApiJson<QuizRequest>,
) -> ApiResponse<QuizQuestion> {
    let previous = body.previous_questions.ok_or(ApiError::BadRequest)?;
    let category = body.quiz_category.ok_or(ApiError::BadRequest)?;

    let target = (category.id != ANY_CATEGORY).then_some(category.id);
    let question = questions::random_question(&pool, target, &previous).await?;
    if let Some(question) = &question {
        QUIZ_QUESTION_CNTR
            .with_label_values(&[&question.category.to_string()])
            .inc();
    }
    Ok(Json(QuizQuestion {
        success: true,
        question,
    }))
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
