pub mod database;
pub mod repositories;
pub mod services;

use crate::shared::{config::Config, error::AppResult, state::AppState};
use std::sync::Arc;

pub async fn create_app_state(config: &Config) -> AppResult<AppState> {
    let db = if config.is_dev() {
        None
    } else {
        Some(database::connect_postgres(config).await?)
    };

    let repo_manager = repositories::init_repo_manager(config, db).await?;
    let token_service = services::init_token_service(config);

    Ok(AppState {
        config: Arc::new(config.clone()),
        token_service,
        repo_manager,
    })
}
