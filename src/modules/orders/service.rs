use super::dtos::{CreateOrderRequest, CreatedOrder, ListOrdersQuery, OrderPage, OrderSummary};
use super::fee::calculate_fees;
use super::repository::{NewOrder, OrderListFilter, OrderRepository};
use super::validation::validate_order;
use crate::modules::users::entities::user;
use crate::shared::error::{AppError, AppResult};

pub struct OrderService;

impl OrderService {
    /// Resolves the authenticated username to the user that will own orders.
    ///
    /// A valid token for a username that no longer exists is rejected as
    /// unauthorized before anything is read or written on its behalf.
    pub async fn resolve_owner(
        repo: &dyn OrderRepository,
        username: &str,
    ) -> AppResult<user::Model> {
        repo.find_user_by_username(username)
            .await?
            .ok_or_else(|| AppError::Unauthorized(format!("unknown user {}", username)))
    }

    pub async fn create_order(
        repo: &dyn OrderRepository,
        owner_id: i32,
        request: CreateOrderRequest,
    ) -> AppResult<CreatedOrder> {
        validate_order(&request).map_err(AppError::Validation)?;

        let fees = calculate_fees(
            request.recipient_city,
            request.item_weight,
            request.amount_to_collect,
        );

        let merchant_order_id = request.merchant_order_id.clone();
        let new_order = NewOrder {
            user_id: owner_id,
            store_id: request.store_id,
            merchant_order_id: request.merchant_order_id,
            recipient_name: request.recipient_name,
            recipient_phone: request.recipient_phone,
            recipient_address: request.recipient_address,
            recipient_city: request.recipient_city,
            recipient_zone: request.recipient_zone,
            recipient_area: request.recipient_area,
            delivery_type: request.delivery_type,
            item_type: request.item_type,
            special_instruction: request.special_instruction,
            item_quantity: request.item_quantity,
            item_weight: request.item_weight,
            amount_to_collect: request.amount_to_collect,
            item_description: request.item_description,
            total_fee: fees.total_fee,
            cod_fee: fees.cod_fee,
            delivery_fee: fees.delivery_fee,
        };

        let consignment_id = repo.create(new_order).await?;
        tracing::info!(
            consignment_id,
            owner_id,
            total_fee = fees.total_fee,
            "Order created"
        );

        Ok(CreatedOrder::new(
            consignment_id,
            merchant_order_id,
            fees.delivery_fee,
        ))
    }

    pub async fn list_orders(
        repo: &dyn OrderRepository,
        owner_id: i32,
        query: &ListOrdersQuery,
    ) -> AppResult<OrderPage> {
        let pagination = query.pagination();
        let filter = OrderListFilter {
            order_status: query.status_filter().to_string(),
            archive: query.archive_filter()?,
            pagination,
            owner_id,
        };

        let page = repo.list(&filter).await?;
        let data: Vec<OrderSummary> = page.orders.into_iter().map(OrderSummary::from).collect();

        Ok(OrderPage {
            total_in_page: data.len(),
            total: page.total,
            current_page: pagination.page,
            per_page: pagination.limit,
            last_page: pagination.last_page(page.total),
            data,
        })
    }

    pub async fn cancel_order(repo: &dyn OrderRepository, consignment_id: i32) -> AppResult<()> {
        repo.cancel(consignment_id).await?;
        tracing::info!(consignment_id, "Order cancelled");
        Ok(())
    }
}
