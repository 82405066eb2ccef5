use axum::extract::FromRef;
use std::sync::Arc;

use crate::modules::auth::service::TokenService;
use crate::shared::config::Config;
use crate::shared::repository::RepositoryManager;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub token_service: Arc<TokenService>,
    pub repo_manager: Arc<RepositoryManager>,
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        state.token_service.clone()
    }
}
