use std::collections::BTreeMap;

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::{
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/categories", get(list_categories))
}

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = state
        .trivia
        .category_map()
        .await
        .reject("could not get categories")?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}
