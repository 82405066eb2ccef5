use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, Set};

use super::entities::order::{self, DEFAULT_ORDER_TYPE_ID};
use super::dtos::Pagination;
use crate::modules::users::entities::user;
use crate::shared::error::AppResult;

/// A fully priced order ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: i32,
    pub store_id: i32,
    pub merchant_order_id: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub recipient_address: String,
    pub recipient_city: i32,
    pub recipient_zone: i32,
    pub recipient_area: i32,
    pub delivery_type: i32,
    pub item_type: i32,
    pub special_instruction: String,
    pub item_quantity: i32,
    pub item_weight: f64,
    pub amount_to_collect: f64,
    pub item_description: String,
    pub total_fee: f64,
    pub cod_fee: f64,
    pub delivery_fee: f64,
}

impl NewOrder {
    /// Leaves `order_status` unset so the column default applies.
    pub fn into_active_model(self, now: chrono::NaiveDateTime) -> order::ActiveModel {
        order::ActiveModel {
            id: NotSet,
            user_id: Set(self.user_id),
            store_id: Set(self.store_id),
            merchant_order_id: Set(self.merchant_order_id),
            recipient_name: Set(self.recipient_name),
            recipient_phone: Set(self.recipient_phone),
            recipient_address: Set(self.recipient_address),
            recipient_city: Set(self.recipient_city),
            recipient_zone: Set(self.recipient_zone),
            recipient_area: Set(self.recipient_area),
            delivery_type: Set(self.delivery_type),
            item_type: Set(self.item_type),
            special_instruction: Set(self.special_instruction),
            item_quantity: Set(self.item_quantity),
            item_weight: Set(self.item_weight),
            amount_to_collect: Set(self.amount_to_collect),
            item_description: Set(self.item_description),
            order_type_id: Set(DEFAULT_ORDER_TYPE_ID),
            total_fee: Set(self.total_fee),
            cod_fee: Set(self.cod_fee),
            promo_discount: Set(0.0),
            discount: Set(0.0),
            delivery_fee: Set(self.delivery_fee),
            archive: Set(false),
            order_status: NotSet,
            created_at: Set(now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderListFilter {
    pub order_status: String,
    pub archive: bool,
    pub pagination: Pagination,
    pub owner_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderListPage {
    pub orders: Vec<order::Model>,
    /// Matches on status and archive only; it is not scoped to the owner.
    pub total: u64,
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Returns the consignment id of the inserted order.
    async fn create(&self, order: NewOrder) -> AppResult<i32>;

    /// `Ok(None)` when no user has that username.
    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<user::Model>>;

    /// Owner's orders with exactly the given status and archive flag, in
    /// insertion order.
    async fn list(&self, filter: &OrderListFilter) -> AppResult<OrderListPage>;

    /// Marks the order `Cancelled` in a single conditional write. Fails with
    /// `AppError::OrderNotCancellable` when the order is unknown or already
    /// cancelled.
    async fn cancel(&self, consignment_id: i32) -> AppResult<()>;
}
