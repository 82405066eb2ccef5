use crate::modules::auth::service::TokenService;
use crate::shared::config::Config;
use std::sync::Arc;

pub fn init_token_service(config: &Config) -> Arc<TokenService> {
    Arc::new(TokenService::from_config(config))
}
