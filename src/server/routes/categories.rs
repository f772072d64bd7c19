use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::queries::categories::{self, Category};
use crate::db::queries::questions::{self, Question};
use crate::server::app::AppState;
use crate::server::error::ApiError;

use super::{parse_path_id, ApiResponse};

#[derive(Serialize)]
struct CategoryList {
    success: bool,
    categories: Vec<Category>,
    total_categories: usize,
}

#[derive(Serialize)]
struct CategoryQuestions {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    #[serde(rename = "currentCategory")]
    current_category: String,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoryList> {
    let categories = categories::get_all_categories(&pool).await?;
    Ok(Json(CategoryList {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

async fn questions_for_category(
    State(pool): State<SqlitePool>,
    Path(category_id): Path<String>,
) -> ApiResponse<CategoryQuestions> {
    let category_id = parse_path_id(&category_id)?;
    let category = categories::get_category(&pool, category_id)
        .await?
        .ok_or(ApiError::UnknownCategory(category_id))?;
    let questions = questions::get_questions_for_category(&pool, category_id).await?;
    Ok(Json(CategoryQuestions {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category.kind,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_for_category),
        )
        .with_state(state)
}
