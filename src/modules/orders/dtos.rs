use serde::{Deserialize, Serialize};

use super::entities::order::{self, ORDER_STATUS_PENDING};
use crate::shared::error::{AppError, AppResult};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// `transfer_status` value selecting pending orders; anything else selects
/// the `Cancel` filter.
pub const TRANSFER_STATUS_PENDING: &str = "1";
pub const CANCEL_STATUS_FILTER: &str = "Cancel";

/// Body of `POST /orders`.
///
/// Missing fields decode to zero or empty so that the validator can report
/// them alongside every other violation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateOrderRequest {
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
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreatedOrder {
    pub consignment_id: i32,
    pub merchant_order_id: String,
    pub order_status: &'static str,
    pub delivery_fee: f64,
}

impl CreatedOrder {
    pub fn new(consignment_id: i32, merchant_order_id: String, delivery_fee: f64) -> Self {
        Self {
            consignment_id,
            merchant_order_id,
            order_status: ORDER_STATUS_PENDING,
            delivery_fee,
        }
    }
}

/// Query string of `GET /orders/all`. Values are kept raw and interpreted
/// leniently, so a bad `page` or `limit` falls back to its default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOrdersQuery {
    pub transfer_status: Option<String>,
    pub archive: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl ListOrdersQuery {
    pub fn status_filter(&self) -> &'static str {
        match self.transfer_status.as_deref() {
            Some(TRANSFER_STATUS_PENDING) => ORDER_STATUS_PENDING,
            _ => CANCEL_STATUS_FILTER,
        }
    }

    pub fn archive_filter(&self) -> AppResult<bool> {
        let raw = self.archive.as_deref().unwrap_or_default();
        parse_archive_flag(raw)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid archive filter: {:?}", raw)))
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

/// Accepts the boolean literals the `orders.archive` column accepts.
fn parse_archive_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "t" | "true" | "y" | "yes" | "on" | "1" => Some(true),
        "f" | "false" | "n" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(limit).unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Saturates at `i64::MAX`, the largest offset Postgres accepts, so an
    /// absurd page yields an empty page instead of an error.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }

    pub fn last_page(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<i64>().ok().filter(|v| *v >= 1).map(|v| v as u64)
}

/// One row of the order listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderSummary {
    pub order_consignment_id: String,
    pub order_created_at: String,
    pub order_description: String,
    pub merchant_order_id: String,
    pub recipient_name: String,
    pub recipient_address: String,
    pub recipient_phone: String,
    pub order_amount: f64,
    pub delivery_fee: f64,
    pub cod_fee: f64,
    pub promo_discount: f64,
    pub discount: f64,
    pub order_status: String,
    pub order_type: String,
    pub item_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub instruction: String,
    pub total_fee: f64,
}

impl From<order::Model> for OrderSummary {
    fn from(order: order::Model) -> Self {
        Self {
            order_consignment_id: order.id.to_string(),
            order_created_at: order.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            order_description: order.item_description,
            merchant_order_id: order.merchant_order_id,
            recipient_name: order.recipient_name,
            recipient_address: order.recipient_address,
            recipient_phone: order.recipient_phone,
            order_amount: order.amount_to_collect,
            delivery_fee: order.delivery_fee,
            cod_fee: order.cod_fee,
            promo_discount: order.promo_discount,
            discount: order.discount,
            order_status: order.order_status,
            order_type: order.order_type_id.to_string(),
            item_type: order.item_type.to_string(),
            instruction: order.special_instruction,
            total_fee: order.total_fee,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderPage {
    pub data: Vec<OrderSummary>,
    pub total: u64,
    pub current_page: u64,
    pub per_page: u64,
    pub total_in_page: usize,
    pub last_page: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn query(transfer_status: Option<&str>, archive: Option<&str>) -> ListOrdersQuery {
        ListOrdersQuery {
            transfer_status: transfer_status.map(str::to_string),
            archive: archive.map(str::to_string),
            ..ListOrdersQuery::default()
        }
    }

    #[rstest]
    #[case(Some("1"), "Pending")]
    #[case(Some("0"), "Cancel")]
    #[case(Some("true"), "Cancel")]
    #[case(Some(""), "Cancel")]
    #[case(None, "Cancel")]
    fn test_status_filter_collapses_to_two_values(
        #[case] transfer_status: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(query(transfer_status, None).status_filter(), expected);
    }

    #[rstest]
    #[case("0", false)]
    #[case("false", false)]
    #[case("f", false)]
    #[case("1", true)]
    #[case("TRUE", true)]
    #[case(" yes ", true)]
    fn test_archive_filter(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(query(None, Some(raw)).archive_filter().unwrap(), expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("archived"))]
    fn test_archive_filter_rejects_unknown_values(#[case] raw: Option<&str>) {
        assert!(matches!(
            query(None, raw).archive_filter(),
            Err(AppError::BadRequest(_))
        ));
    }

    #[rstest]
    #[case(None, None, 1, 10)]
    #[case(Some("2"), Some("25"), 2, 25)]
    #[case(Some("0"), Some("-5"), 1, 10)]
    #[case(Some("abc"), Some("1.5"), 1, 10)]
    #[case(Some(" 3 "), Some("5"), 3, 5)]
    fn test_pagination_defaults(
        #[case] page: Option<&str>,
        #[case] limit: Option<&str>,
        #[case] expected_page: u64,
        #[case] expected_limit: u64,
    ) {
        let pagination = Pagination::from_raw(page, limit);
        assert_eq!(pagination.page, expected_page);
        assert_eq!(pagination.limit, expected_limit);
    }

    #[rstest]
    #[case(25, 10, 3)]
    #[case(20, 10, 2)]
    #[case(0, 10, 0)]
    #[case(1, 10, 1)]
    fn test_last_page(#[case] total: u64, #[case] limit: u64, #[case] expected: u64) {
        let pagination = Pagination { page: 2, limit };
        assert_eq!(pagination.last_page(total), expected);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Pagination { page: 1, limit: 10 }.offset(), 0);
        assert_eq!(Pagination { page: 3, limit: 10 }.offset(), 20);
    }

    #[rstest]
    #[case(Some("9223372036854775807"), Some("10"))]
    #[case(Some("9223372036854775807"), Some("9223372036854775807"))]
    #[case(Some("4611686018427387905"), Some("2"))]
    fn test_offset_saturates_for_huge_pages(
        #[case] page: Option<&str>,
        #[case] limit: Option<&str>,
    ) {
        let pagination = Pagination::from_raw(page, limit);
        assert_eq!(pagination.offset(), i64::MAX as u64);
    }

    #[test]
    fn test_request_decodes_missing_fields_as_empty() {
        let request: CreateOrderRequest =
            serde_json::from_str(r#"{"store_id": 4, "item_weight": 1.5}"#).unwrap();
        assert_eq!(request.store_id, 4);
        assert_eq!(request.item_weight, 1.5);
        assert_eq!(request.item_quantity, 0);
        assert!(request.recipient_name.is_empty());
    }
}
