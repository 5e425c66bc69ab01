use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A tracked material, keyed by its product code.
///
/// Re-registering a product under the same code replaces the stored entry.
/// Requirements and PIMs created against the old entry keep the name/price
/// snapshots they took at creation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product code, e.g. "MP-1".
    pub code: String,
    pub name: String,
    /// Unit price snapshotted into requirements and PIMs created later.
    pub price: Decimal,
    /// Date of the most recent import of this material.
    pub last_import: NaiveDate,
}
