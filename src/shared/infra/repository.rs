use sea_orm::{DatabaseConnection, EntityTrait};
use std::marker::PhantomData;
use std::sync::Arc;

/// Shared base for the sea-orm backed repositories.
#[derive(Clone)]
pub struct SeaOrmRepository<E>
where
    E: EntityTrait,
{
    pub db: Arc<DatabaseConnection>,
    _marker: PhantomData<E>,
}

impl<E> SeaOrmRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        tracing::debug!("Creating SeaOrmRepository for {}", std::any::type_name::<E>());
        Self {
            db,
            _marker: PhantomData,
        }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }
}
