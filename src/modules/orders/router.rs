use super::handlers;
use crate::shared::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", post(handlers::create_order))
        .route("/orders/all", get(handlers::list_orders))
        .route(
            "/orders/:consignment_id/cancel",
            put(handlers::cancel_order),
        )
}
