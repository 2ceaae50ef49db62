use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    models::Question,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/play", post(play))
}

#[derive(Deserialize)]
struct PlayBody {
    quiz_category: QuizCategory,
    previous_questions: Vec<i64>,
}

#[derive(Deserialize)]
struct QuizCategory {
    id: i64,
}

#[derive(Serialize)]
struct PlayResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<Question>,
}

async fn play(
    State(state): State<AppState>,
    body: Result<Json<PlayBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    use crate::services::trivia::DrawOutcome;

    let Json(body) = body.reject_input("invalid play payload")?;

    let outcome = state
        .trivia
        .draw_question(body.quiz_category.id, &body.previous_questions)
        .await
        .reject("could not draw a question")?;

    let question = match outcome {
        DrawOutcome::Drawn(question) => Some(question),
        // Running out of questions ends the game, it is not an error.
        DrawOutcome::PoolExhausted => None,
        DrawOutcome::CategoryExhausted => return Err(AppError::NotFound),
        DrawOutcome::InvalidHistory => return Err(AppError::BadRequest),
    };

    Ok(Json(PlayResponse {
        success: true,
        question,
    }))
}
