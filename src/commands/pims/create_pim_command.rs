use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use validator::Validate;

use crate::{
    commands::{validate_not_blank, validate_positive, Command},
    errors::ServiceError,
    models::{PaymentMethod, Pim, PimStatus},
    queries::{Query, RemainingForProductQuery},
    store::RecordStore,
};

/// Issues an import permit against a product's remaining requirement
/// balance.
///
/// The balance check runs before the permit is inserted; a rejected permit
/// leaves every collection as it was.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePimCommand {
    #[validate(custom = "validate_not_blank")]
    pub parent_id: String,
    pub sub_id: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub factory: String,
    #[validate(custom = "validate_not_blank")]
    pub supplier: String,
    pub product_code: String,
    #[validate(custom = "validate_positive")]
    pub quantity: Decimal,
    pub payment: PaymentMethod,
}

impl Command for CreatePimCommand {
    type Result = Pim;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut RecordStore) -> Result<Self::Result, ServiceError> {
        self.validate().map_err(|e| {
            let msg = format!("Invalid PIM input: {}", e);
            error!("{}", msg);
            ServiceError::ValidationError(msg)
        })?;

        let product = store.product(&self.product_code).cloned().ok_or_else(|| {
            let msg = format!("Unknown product code: {}", self.product_code);
            error!("{}", msg);
            ServiceError::ValidationError(msg)
        })?;

        let id = Pim::derive_id(&self.parent_id, self.sub_id.as_deref());
        if store.pim(&id).is_some() {
            let msg = format!("A PIM with id {} already exists", id);
            error!("{}", msg);
            return Err(ServiceError::ValidationError(msg));
        }

        let remaining = RemainingForProductQuery {
            product_code: product.code.clone(),
        }
        .execute(store);
        if self.quantity > remaining {
            let msg = format!(
                "Quantity {} exceeds the remaining balance {} for product {}",
                self.quantity, remaining, product.code
            );
            error!("{}", msg);
            return Err(ServiceError::CapacityExceeded(msg));
        }

        let status = PimStatus::ContractPending;
        let pim = Pim {
            id,
            sub_id: self
                .sub_id
                .as_deref()
                .map(str::trim)
                .filter(|sub| !sub.is_empty())
                .map(str::to_string),
            factory: self.factory.trim().to_string(),
            supplier: self.supplier.trim().to_string(),
            product_code: product.code.clone(),
            quantity: self.quantity,
            payment: self.payment,
            status,
            total_value: self.quantity * product.price,
            workflow_stage: status.workflow_stage(),
        };
        store.push_pim(pim.clone());

        info!(
            "PIM created with id: {} ({} of product {})",
            pim.id, pim.quantity, pim.product_code
        );
        Ok(pim)
    }
}
