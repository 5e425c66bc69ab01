use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A demanded quantity of one product.
///
/// `product_name` and `unit_price` are snapshots of the product at creation
/// time and are never refreshed, so `total_value` always equals
/// `quantity * unit_price` regardless of later price changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: Uuid,
    pub product_code: String,
    pub product_name: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub total_value: Decimal,
}
