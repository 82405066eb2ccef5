use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Status the `orders.order_status` column defaults to on insert.
pub const ORDER_STATUS_PENDING: &str = "Pending";
pub const ORDER_STATUS_CANCELLED: &str = "Cancelled";

/// Every order created through the API is a regular delivery order.
pub const DEFAULT_ORDER_TYPE_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub store_id: i32,
    pub merchant_order_id: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    #[sea_orm(column_type = "Text")]
    pub recipient_address: String,
    pub recipient_city: i32,
    pub recipient_zone: i32,
    pub recipient_area: i32,
    pub delivery_type: i32,
    pub item_type: i32,
    #[sea_orm(column_type = "Text")]
    pub special_instruction: String,
    pub item_quantity: i32,
    pub item_weight: f64,
    pub amount_to_collect: f64,
    #[sea_orm(column_type = "Text")]
    pub item_description: String,
    pub order_type_id: i32,
    pub total_fee: f64,
    pub cod_fee: f64,
    pub promo_discount: f64,
    pub discount: f64,
    pub delivery_fee: f64,
    pub archive: bool,
    pub order_status: String,
    #[serde(skip_deserializing)]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::users::entities::user::Entity",
        from = "Column::UserId",
        to = "crate::modules::users::entities::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    User,
}

impl Related<crate::modules::users::entities::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
