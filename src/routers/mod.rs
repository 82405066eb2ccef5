use axum::{Router, routing::get};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::modules::{auth, orders};
use crate::shared::{
    handlers::{handler_404, handler_500},
    state::AppState,
};

pub fn init_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(auth::router::router())
        .merge(orders::router::router());

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/api/v1", api)
        .fallback(handler_404)
        .layer(CatchPanicLayer::custom(handler_500))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
