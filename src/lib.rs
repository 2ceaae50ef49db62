pub mod db;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;

use axum::Router;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub trivia: services::trivia::TriviaService,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::categories::routes())
        .merge(handlers::questions::routes())
        .merge(handlers::play::routes())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(cors())
        .with_state(state)
}

fn cors() -> CorsLayer {
    use axum::http::{header, Method};

    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
}

async fn not_found() -> rejections::AppError {
    rejections::AppError::NotFound
}

async fn method_not_allowed() -> rejections::AppError {
    rejections::AppError::MethodNotAllowed
}
