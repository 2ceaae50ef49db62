use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    models::{NewQuestion, Question},
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
}

/// Deserialize a page number that may arrive as a number or an arbitrary
/// string. Anything that does not parse as a positive integer falls back to
/// the first page.
fn deserialize_lenient_page<'de, D: serde::Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = u32;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("number or numeric string")
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<u32, E> {
            Ok(u32::try_from(v).ok().filter(|&p| p >= 1).unwrap_or_else(first_page))
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<u32, E> {
            Ok(u32::try_from(v).ok().filter(|&p| p >= 1).unwrap_or_else(first_page))
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<u32, E> {
            Ok(v.parse().ok().filter(|&p| p >= 1).unwrap_or_else(first_page))
        }
    }
    d.deserialize_any(Vis)
}

fn first_page() -> u32 {
    1
}

#[derive(Deserialize)]
struct QuestionsQuery {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    cat: Option<String>,
    #[serde(default = "first_page", deserialize_with = "deserialize_lenient_page")]
    page: u32,
}

#[derive(Serialize)]
struct QuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<BTreeMap<i64, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_category: Option<i64>,
}

async fn list_questions(
    State(state): State<AppState>,
    params: Result<Query<QuestionsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    use crate::services::trivia::PageOutcome;

    let Query(params) = params.reject_input("invalid listing parameters")?;

    // Clients send empty strings for unused filters.
    let search = params.q.as_deref().filter(|s| !s.is_empty());
    let category = params.cat.as_deref().filter(|s| !s.is_empty());

    let outcome = state
        .trivia
        .question_page(search, category, params.page)
        .await
        .reject("could not get questions")?;

    match outcome {
        PageOutcome::Page(page) => Ok(Json(QuestionsResponse {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
            categories: page.categories,
            current_category: page.current_category,
        })),
        PageOutcome::FilterConflict => Err(AppError::MethodNotAllowed),
        PageOutcome::OutOfRange => Err(AppError::NotFound),
    }
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    question: Question,
}

async fn create_question(
    State(state): State<AppState>,
    body: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(new) = body.reject_input("invalid question payload")?;

    let question = state
        .trivia
        .add_question(&new)
        .await
        .reject_input("could not create question")?;

    Ok(Json(CreatedResponse {
        success: true,
        question,
    }))
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
}

async fn delete_question(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    // A non-numeric id segment never names a question.
    let Path(id) = id.reject_not_found("invalid question id")?;

    let removed = state
        .trivia
        .remove_question(id)
        .await
        .reject_not_found("could not delete question")?;

    if !removed {
        return Err(AppError::NotFound);
    }

    Ok(Json(DeletedResponse { success: true }))
}
