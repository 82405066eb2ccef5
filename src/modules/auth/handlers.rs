use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use super::service::{AuthService, Claims, LoginRequest, LoginResponse};
use crate::modules::users::repository::UserRepository;
use crate::shared::{
    error::{AppError, AppResult},
    response::ApiResponse,
    state::AppState,
};

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    let Json(request) =
        payload.map_err(|_| AppError::BadRequest("Invalid request payload".to_string()))?;

    let user_repo = state.repo_manager.get::<Arc<dyn UserRepository>>().ok_or(
        AppError::InternalServerError("UserRepository not registered".to_string()),
    )?;

    let response =
        AuthService::login(user_repo.as_ref(), state.token_service.as_ref(), request).await?;
    Ok(Json(response))
}

/// Tokens are stateless; logging out only confirms the token was valid.
pub async fn logout(claims: Claims) -> Json<ApiResponse<()>> {
    tracing::debug!(username = %claims.username, "User logged out");
    Json(ApiResponse::message_only("Successfully logged out"))
}
