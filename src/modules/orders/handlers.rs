use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use std::sync::Arc;

use super::dtos::{CreateOrderRequest, CreatedOrder, ListOrdersQuery, OrderPage};
use super::repository::OrderRepository;
use super::service::OrderService;
use crate::modules::auth::service::Claims;
use crate::shared::{
    error::{AppError, AppResult},
    response::ApiResponse,
    state::AppState,
};

fn order_repo(state: &AppState) -> AppResult<&Arc<dyn OrderRepository>> {
    state.repo_manager.get::<Arc<dyn OrderRepository>>().ok_or(
        AppError::InternalServerError("OrderRepository not registered".to_string()),
    )
}

pub async fn create_order(
    State(state): State<AppState>,
    claims: Claims,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<CreatedOrder>>> {
    let repo = order_repo(&state)?;
    let owner = OrderService::resolve_owner(repo.as_ref(), &claims.username).await?;

    let Json(request) = payload.map_err(|e| {
        tracing::debug!("Rejected order body: {}", e);
        AppError::BadRequest("Invalid request body".to_string())
    })?;

    let created = OrderService::create_order(repo.as_ref(), owner.id, request).await?;

    Ok(Json(ApiResponse::success(
        "Order Created Successfully",
        created,
    )))
}

pub async fn list_orders(
    State(state): State<AppState>,
    claims: Claims,
    Query(query): Query<ListOrdersQuery>,
) -> AppResult<Json<ApiResponse<OrderPage>>> {
    let repo = order_repo(&state)?;
    let owner = OrderService::resolve_owner(repo.as_ref(), &claims.username).await?;

    let page = OrderService::list_orders(repo.as_ref(), owner.id, &query).await?;

    Ok(Json(ApiResponse::success(
        "Orders successfully fetched.",
        page,
    )))
}

pub async fn cancel_order(
    State(state): State<AppState>,
    Path(consignment_id): Path<String>,
    _claims: Claims,
) -> AppResult<Json<ApiResponse<()>>> {
    let consignment_id = consignment_id
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest("Invalid consignment ID".to_string()))?;

    let repo = order_repo(&state)?;
    OrderService::cancel_order(repo.as_ref(), consignment_id).await?;

    Ok(Json(ApiResponse::message_only(
        "Order Cancelled Successfully",
    )))
}
