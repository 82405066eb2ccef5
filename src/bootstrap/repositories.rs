use crate::modules::orders::infra::persistence::{InMemoryOrderRepository, PostgresOrderRepository};
use crate::modules::orders::repository::OrderRepository;
use crate::modules::users::infra::persistence::{InMemoryUserRepository, PostgresUserRepository};
use crate::modules::users::repository::UserRepository;
use crate::shared::config::Config;
use crate::shared::error::{AppError, AppResult};
use crate::shared::repository::RepositoryManager;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub async fn init_repo_manager(
    config: &Config,
    db: Option<DatabaseConnection>,
) -> AppResult<Arc<RepositoryManager>> {
    let mut manager = RepositoryManager::new();

    if config.is_dev() {
        tracing::warn!("Using in-memory repositories for dev environment");
        let users = InMemoryUserRepository::new();
        if let (Some(username), Some(password)) = (&config.seed_username, &config.seed_password) {
            let seeded = users.insert(username, password).await?;
            tracing::info!(user_id = seeded.id, "Seeded dev user {}", seeded.username);
        }
        let orders = InMemoryOrderRepository::new(users.clone());

        manager.register::<Arc<dyn UserRepository>>(Arc::new(users));
        manager.register::<Arc<dyn OrderRepository>>(Arc::new(orders));
    } else {
        let db = Arc::new(db.ok_or(AppError::InternalServerError(
            "Database connection is required outside dev".to_string(),
        ))?);

        manager.register::<Arc<dyn UserRepository>>(Arc::new(PostgresUserRepository::new(
            db.clone(),
        )));
        manager.register::<Arc<dyn OrderRepository>>(Arc::new(PostgresOrderRepository::new(db)));
    }

    Ok(Arc::new(manager))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dev_registers_in_memory_repositories_with_seed_user() {
        let mut config = Config::for_tests();
        config.app_env = "dev".to_string();
        config.seed_username = Some("demo".to_string());
        config.seed_password = Some("demo-pass".to_string());

        let manager = init_repo_manager(&config, None).await.unwrap();
        let users = manager.get::<Arc<dyn UserRepository>>().unwrap();
        let orders = manager.get::<Arc<dyn OrderRepository>>().unwrap();

        let seeded = users.find_by_username("demo").await.unwrap().unwrap();
        let owner = orders.find_user_by_username("demo").await.unwrap().unwrap();
        assert_eq!(seeded.id, owner.id);
    }

    #[tokio::test]
    async fn test_non_dev_requires_connection() {
        let config = Config::for_tests();
        assert!(init_repo_manager(&config, None).await.is_err());
    }
}
