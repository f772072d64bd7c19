use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::categories::{self, Category};
use crate::db::queries::questions::{self, Question};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::extract::ApiJson;
use crate::server::pagination::paginate;

use super::{parse_path_id, ApiResponse, PageQuery};

/// POST /questions body; `searchTerm` switches the endpoint into search mode,
/// everything else describes a question to create.
#[derive(Deserialize)]
struct QuestionsPost {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
    question: Option<String>,
    answer: Option<String>,
    category: Option<i64>,
    difficulty: Option<i64>,
}

#[derive(Serialize)]
struct QuestionList {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: Vec<Category>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct QuestionCreated {
    success: bool,
    created: Question,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct QuestionDeleted {
    success: bool,
    deleted: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    query: PageQuery,
) -> ApiResponse<QuestionList> {
    let selection = questions::get_all_questions(&pool).await?;
    let categories = categories::get_all_categories(&pool).await?;
    Ok(Json(QuestionList {
        success: true,
        questions: paginate(&selection, query.page()).to_vec(),
        total_questions: selection.len(),
        categories,
    }))
}

async fn create_or_search(
    State(pool): State<SqlitePool>,
    query: PageQuery,
    ApiJson(body): ApiJson<QuestionsPost>,
) -> Result<Response, ApiError> {
    if let Some(term) = body.search_term {
        let matches = questions::search_questions(&pool, &term).await?;
        return Ok(Json(SearchResults {
            success: true,
            questions: paginate(&matches, query.page()).to_vec(),
            total_questions: matches.len(),
        })
        .into_response());
    }

    let question = require_text(body.question, "question")?;
    let answer = require_text(body.answer, "answer")?;
    let category = body.category.ok_or(ApiError::MissingField("category"))?;
    let difficulty = body.difficulty.ok_or(ApiError::MissingField("difficulty"))?;

    categories::get_category(&pool, category)
        .await?
        .ok_or(ApiError::UnknownCategory(category))?;

    let id = questions::create_question(&pool, &question, &answer, category, difficulty).await?;
    let created = questions::get_question_by_id(&pool, id).await?;
    let selection = questions::get_all_questions(&pool).await?;
    Ok(Json(QuestionCreated {
        success: true,
        created,
        questions: paginate(&selection, query.page()).to_vec(),
        total_questions: selection.len(),
    })
    .into_response())
}

fn require_text(value: Option<String>, field: &'static str) -> Result<String, ApiError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ApiError::MissingField(field)),
    }
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(question_id): Path<String>,
    query: PageQuery,
) -> ApiResponse<QuestionDeleted> {
    let question_id = parse_path_id(&question_id)?;
    let removed = questions::delete_question(&pool, question_id).await?;
    if removed == 0 {
        return Err(ApiError::UnknownQuestion(question_id));
    }
    let selection = questions::get_all_questions(&pool).await?;
    Ok(Json(QuestionDeleted {
        success: true,
        deleted: question_id,
        questions: paginate(&selection, query.page()).to_vec(),
        total_questions: selection.len(),
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/{question_id}", delete(delete_question))
        .with_state(state)
}
