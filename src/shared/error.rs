use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::modules::orders::validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbError(#[from] sea_orm::DbErr),

    #[error("Not found")]
    NotFound,

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("The user credentials were incorrect.")]
    InvalidCredentials,

    #[error("Validation failed: {0:?}")]
    Validation(ValidationErrors),

    #[error("order already cancelled or not found")]
    OrderNotCancellable,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DbError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_)
            | AppError::InvalidCredentials
            | AppError::OrderNotCancellable => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = status.as_u16();

        let body = match self {
            AppError::DbError(err) => {
                tracing::error!("Database error: {:?}", err);
                error_body("Internal server error", code)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                error_body("Internal server error", code)
            }
            AppError::NotFound => error_body("Not found", code),
            AppError::BadRequest(msg) => error_body(&msg, code),
            AppError::Unauthorized(reason) => {
                tracing::debug!("Rejected credential: {}", reason);
                error_body("Unauthorized", code)
            }
            AppError::InvalidCredentials => {
                error_body("The user credentials were incorrect.", code)
            }
            AppError::Validation(errors) => json!({
                "message": "Please fix the given errors",
                "type": "error",
                "code": code,
                "errors": errors,
            }),
            AppError::OrderNotCancellable => error_body("Please contact cx to cancel order", code),
        };

        (status, Json(body)).into_response()
    }
}

fn error_body(message: &str, code: u16) -> serde_json::Value {
    json!({
        "message": message,
        "type": "error",
        "code": code,
    })
}

pub type AppResult<T> = Result<T, AppError>;
