//! Stock-item model.
//!
//! Stock items are the feed inventory consumption entries reference. Names
//! are unique across the whole collection; the uniqueness rule lives in the
//! stock handlers since it needs the stored collection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Id;

/// A stock item as stored and served over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: Id,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    /// Feed category, e.g. oats or pellets.
    #[serde(rename = "type")]
    pub item_type: String,
    pub amount_in_stock: Decimal,
    pub price_per_kilo: Decimal,
}

/// Payload for `POST /stock/`; the id is assigned by the service.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStockItem {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub amount_in_stock: Decimal,
    pub price_per_kilo: Decimal,
}
