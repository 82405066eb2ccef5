use async_trait::async_trait;
use sea_orm::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex as AsyncMutex;

use crate::modules::users::entities::user;
use crate::modules::users::repository::UserRepository;
use crate::shared::error::{AppError, AppResult};
use crate::shared::infra::repository::SeaOrmRepository;

// =========================================================================
// Postgres Implementation
// =========================================================================

pub type PostgresUserRepository = SeaOrmRepository<user::Entity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<user::Model>> {
        user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.connection())
            .await
            .map_err(AppError::DbError)
    }
}

// =========================================================================
// InMemory Implementation
// =========================================================================

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<AsyncMutex<BTreeMap<i32, user::Model>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user, enforcing the same username uniqueness as the `users` table.
    pub async fn insert(&self, username: &str, password: &str) -> AppResult<user::Model> {
        let mut users = self.users.lock().await;
        if users.values().any(|u| u.username == username) {
            return Err(AppError::DbError(DbErr::Custom(format!(
                "duplicate username: {}",
                username
            ))));
        }

        let id = users.keys().next_back().copied().unwrap_or(0) + 1;
        let model = user::Model {
            id,
            username: username.to_string(),
            password: password.to_string(),
        };
        users.insert(id, model.clone());
        Ok(model)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<user::Model>> {
        let users = self.users.lock().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_postgres_find_by_username() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![user::Model {
                    id: 7,
                    username: "merchant".to_owned(),
                    password: "secret".to_owned(),
                }],
                vec![],
            ])
            .into_connection();
        let repo = PostgresUserRepository::new(Arc::new(db));

        let found = repo.find_by_username("merchant").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(7));

        let missing = repo.find_by_username("ghost").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_postgres_storage_failure_is_an_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_owned())])
            .into_connection();
        let repo = PostgresUserRepository::new(Arc::new(db));

        let result = repo.find_by_username("merchant").await;
        assert!(matches!(result, Err(AppError::DbError(_))));
    }

    #[tokio::test]
    async fn test_in_memory_insert_and_find() {
        let repo = InMemoryUserRepository::new();
        let first = repo.insert("alice", "pw1").await.unwrap();
        let second = repo.insert("bob", "pw2").await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let found = repo.find_by_username("bob").await.unwrap().unwrap();
        assert!(found.password_matches("pw2"));
        assert!(!found.password_matches("pw1"));
        assert!(repo.find_by_username("carol").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_rejects_duplicate_username() {
        let repo = InMemoryUserRepository::new();
        repo.insert("alice", "pw").await.unwrap();
        assert!(repo.insert("alice", "other").await.is_err());
    }
}
