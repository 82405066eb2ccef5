use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::sync::Arc;
use tokio::sync::Mutex as AsyncMutex;

use crate::modules::orders::entities::order::{self, ORDER_STATUS_CANCELLED, ORDER_STATUS_PENDING};
use crate::modules::orders::repository::{NewOrder, OrderListFilter, OrderListPage, OrderRepository};
use crate::modules::users::entities::user;
use crate::modules::users::infra::persistence::InMemoryUserRepository;
use crate::modules::users::repository::UserRepository;
use crate::shared::error::{AppError, AppResult};
use crate::shared::infra::repository::SeaOrmRepository;

// =========================================================================
// Postgres Implementation
// =========================================================================

pub type PostgresOrderRepository = SeaOrmRepository<order::Entity>;

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, order: NewOrder) -> AppResult<i32> {
        let now = chrono::Utc::now().naive_utc();
        let created = order
            .into_active_model(now)
            .insert(self.connection())
            .await
            .map_err(AppError::DbError)?;
        Ok(created.id)
    }

    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<user::Model>> {
        user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.connection())
            .await
            .map_err(AppError::DbError)
    }

    async fn list(&self, filter: &OrderListFilter) -> AppResult<OrderListPage> {
        let db = self.connection();

        let orders = order::Entity::find()
            .filter(order::Column::OrderStatus.eq(filter.order_status.as_str()))
            .filter(order::Column::Archive.eq(filter.archive))
            .filter(order::Column::UserId.eq(filter.owner_id))
            .order_by_asc(order::Column::Id)
            .limit(filter.pagination.limit)
            .offset(filter.pagination.offset())
            .all(db)
            .await
            .map_err(AppError::DbError)?;

        // Not scoped to the owner
        let total = order::Entity::find()
            .filter(order::Column::OrderStatus.eq(filter.order_status.as_str()))
            .filter(order::Column::Archive.eq(filter.archive))
            .count(db)
            .await
            .map_err(AppError::DbError)?;

        Ok(OrderListPage { orders, total })
    }

    async fn cancel(&self, consignment_id: i32) -> AppResult<()> {
        let result = order::Entity::update_many()
            .col_expr(order::Column::OrderStatus, Expr::value(ORDER_STATUS_CANCELLED))
            .filter(order::Column::Id.eq(consignment_id))
            .filter(order::Column::OrderStatus.ne(ORDER_STATUS_CANCELLED))
            .exec(self.connection())
            .await
            .map_err(AppError::DbError)?;

        if result.rows_affected == 0 {
            return Err(AppError::OrderNotCancellable);
        }
        Ok(())
    }
}

// =========================================================================
// InMemory Implementation
// =========================================================================

/// Shares its user table with an `InMemoryUserRepository` so that owner
/// lookups see the same users as login.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<AsyncMutex<Vec<order::Model>>>,
    users: InMemoryUserRepository,
}

impl InMemoryOrderRepository {
    pub fn new(users: InMemoryUserRepository) -> Self {
        Self {
            orders: Arc::default(),
            users,
        }
    }

    /// Test and seeding hook for orders in states the API cannot produce.
    pub async fn set_archived(&self, consignment_id: i32, archive: bool) -> AppResult<()> {
        let mut orders = self.orders.lock().await;
        let order = orders
            .iter_mut()
            .find(|o| o.id == consignment_id)
            .ok_or(AppError::NotFound)?;
        order.archive = archive;
        Ok(())
    }

    pub async fn find(&self, consignment_id: i32) -> Option<order::Model> {
        let orders = self.orders.lock().await;
        orders.iter().find(|o| o.id == consignment_id).cloned()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: NewOrder) -> AppResult<i32> {
        let mut orders = self.orders.lock().await;
        let id = orders.last().map_or(0, |o| o.id) + 1;
        let model = order::Model {
            id,
            user_id: order.user_id,
            store_id: order.store_id,
            merchant_order_id: order.merchant_order_id,
            recipient_name: order.recipient_name,
            recipient_phone: order.recipient_phone,
            recipient_address: order.recipient_address,
            recipient_city: order.recipient_city,
            recipient_zone: order.recipient_zone,
            recipient_area: order.recipient_area,
            delivery_type: order.delivery_type,
            item_type: order.item_type,
            special_instruction: order.special_instruction,
            item_quantity: order.item_quantity,
            item_weight: order.item_weight,
            amount_to_collect: order.amount_to_collect,
            item_description: order.item_description,
            order_type_id: order::DEFAULT_ORDER_TYPE_ID,
            total_fee: order.total_fee,
            cod_fee: order.cod_fee,
            promo_discount: 0.0,
            discount: 0.0,
            delivery_fee: order.delivery_fee,
            archive: false,
            order_status: ORDER_STATUS_PENDING.to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        };
        orders.push(model);
        Ok(id)
    }

    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<user::Model>> {
        self.users.find_by_username(username).await
    }

    async fn list(&self, filter: &OrderListFilter) -> AppResult<OrderListPage> {
        let orders = self.orders.lock().await;
        let matches_filter =
            |o: &&order::Model| o.order_status == filter.order_status && o.archive == filter.archive;

        let total = orders.iter().filter(matches_filter).count() as u64;
        let page = orders
            .iter()
            .filter(matches_filter)
            .filter(|o| o.user_id == filter.owner_id)
            .skip(filter.pagination.offset() as usize)
            .take(filter.pagination.limit as usize)
            .cloned()
            .collect();

        Ok(OrderListPage {
            orders: page,
            total,
        })
    }

    async fn cancel(&self, consignment_id: i32) -> AppResult<()> {
        let mut orders = self.orders.lock().await;
        match orders
            .iter_mut()
            .find(|o| o.id == consignment_id && o.order_status != ORDER_STATUS_CANCELLED)
        {
            Some(order) => {
                order.order_status = ORDER_STATUS_CANCELLED.to_string();
                Ok(())
            }
            None => Err(AppError::OrderNotCancellable),
        }
    }
}
