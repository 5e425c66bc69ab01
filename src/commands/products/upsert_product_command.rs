use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use validator::Validate;

use crate::{
    commands::{validate_non_negative, validate_not_blank, Command},
    errors::ServiceError,
    models::Product,
    store::RecordStore,
};

/// Registers a product, replacing any existing entry with the same code.
///
/// Requirements and PIMs already recorded against the code keep the
/// name/price snapshots they took; replacement never rewrites history.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertProductCommand {
    #[validate(custom = "validate_not_blank")]
    pub code: String,
    #[validate(custom = "validate_not_blank")]
    pub name: String,
    #[validate(custom = "validate_non_negative")]
    pub price: Decimal,
    pub last_import: NaiveDate,
}

impl Command for UpsertProductCommand {
    type Result = Product;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut RecordStore) -> Result<Self::Result, ServiceError> {
        self.validate().map_err(|e| {
            let msg = format!("Invalid product input: {}", e);
            error!("{}", msg);
            ServiceError::ValidationError(msg)
        })?;

        let product = Product {
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            price: self.price,
            last_import: self.last_import,
        };
        store.upsert_product(product.clone());

        info!("Product registered with code: {}", product.code);
        Ok(product)
    }
}
