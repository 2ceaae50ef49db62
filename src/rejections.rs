use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors surfaced to API clients. Every variant maps to a fixed status
/// code and message; the JSON body shape is the same for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    NotFound,
    MethodNotAllowed,
    BadRequest,
    /// Reserved for payloads that parse but fail semantic checks. No
    /// current route emits it.
    Unprocessable,
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: &'static str,
}

impl AppError {
    fn status(self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(self) -> &'static str {
        match self {
            AppError::NotFound => "Resource Not Found",
            AppError::MethodNotAllowed => "Method not allowed",
            AppError::BadRequest => "Bad Request",
            AppError::Unprocessable => "Unprocessable",
            AppError::Internal => "Internal Server Error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            message: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Log an error and turn it into the rejection the route contract calls for.
pub trait ResultExt<T> {
    fn reject(self, msg: &'static str) -> Result<T, AppError>;
    fn reject_input(self, msg: &'static str) -> Result<T, AppError>;
    fn reject_not_found(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Internal
        })
    }

    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::BadRequest
        })
    }

    fn reject_not_found(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::NotFound
        })
    }
}
