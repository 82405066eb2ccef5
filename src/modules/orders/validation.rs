//! Field checks for incoming order requests.
//!
//! Every field is checked and every violation is collected, so a client sees
//! all of its mistakes in one 422 response.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::dtos::CreateOrderRequest;

/// National mobile format: `01`, an operator digit 3-9, then eight digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^01[3-9][0-9]{8}$").expect("Invalid phone regex pattern"));

/// Request fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderField {
    StoreId,
    RecipientName,
    RecipientPhone,
    RecipientAddress,
    DeliveryType,
    AmountToCollect,
    ItemQuantity,
    ItemWeight,
    ItemType,
}

impl OrderField {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderField::StoreId => "store_id",
            OrderField::RecipientName => "recipient_name",
            OrderField::RecipientPhone => "recipient_phone",
            OrderField::RecipientAddress => "recipient_address",
            OrderField::DeliveryType => "delivery_type",
            OrderField::AmountToCollect => "amount_to_collect",
            OrderField::ItemQuantity => "item_quantity",
            OrderField::ItemWeight => "item_weight",
            OrderField::ItemType => "item_type",
        }
    }
}

/// Serialized under the request field name it refers to.
impl Serialize for OrderField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Messages per field, serialized as `{"field": ["message", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<OrderField, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: OrderField, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: OrderField) -> Option<&[String]> {
        self.0.get(&field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = OrderField> + '_ {
        self.0.keys().copied()
    }

    fn require(&mut self, failed: bool, field: OrderField, message: &str) {
        if failed {
            self.add(field, message);
        }
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

pub fn validate_order(request: &CreateOrderRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    errors.require(
        request.store_id == 0,
        OrderField::StoreId,
        "The store field is required",
    );
    errors.require(
        request.recipient_name.is_empty(),
        OrderField::RecipientName,
        "The recipient name field is required",
    );
    errors.require(
        !is_valid_phone(&request.recipient_phone),
        OrderField::RecipientPhone,
        "Invalid phone number",
    );
    errors.require(
        request.recipient_address.is_empty(),
        OrderField::RecipientAddress,
        "The recipient address field is required",
    );
    errors.require(
        request.delivery_type == 0,
        OrderField::DeliveryType,
        "The delivery type field is required",
    );
    errors.require(
        request.amount_to_collect == 0.0,
        OrderField::AmountToCollect,
        "The amount to collect field is required",
    );
    errors.require(
        request.item_quantity == 0,
        OrderField::ItemQuantity,
        "The item quantity field is required",
    );
    errors.require(
        request.item_weight == 0.0,
        OrderField::ItemWeight,
        "The item weight field is required",
    );
    errors.require(
        request.item_type == 0,
        OrderField::ItemType,
        "The item type field is required",
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
