use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::{
    commands::{validate_positive, Command},
    errors::ServiceError,
    models::Requirement,
    store::RecordStore,
};

/// Records demand for a product, snapshotting its current name and price.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddRequirementCommand {
    pub product_code: String,
    #[validate(custom = "validate_positive")]
    pub quantity: Decimal,
}

impl Command for AddRequirementCommand {
    type Result = Requirement;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut RecordStore) -> Result<Self::Result, ServiceError> {
        self.validate().map_err(|e| {
            let msg = format!("Invalid requirement input: {}", e);
            error!("{}", msg);
            ServiceError::ValidationError(msg)
        })?;

        let product = store.product(&self.product_code).ok_or_else(|| {
            let msg = format!("Unknown product code: {}", self.product_code);
            error!("{}", msg);
            ServiceError::ValidationError(msg)
        })?;

        let requirement = Requirement {
            id: Uuid::new_v4(),
            product_code: product.code.clone(),
            product_name: product.name.clone(),
            quantity: self.quantity,
            unit_price: product.price,
            total_value: self.quantity * product.price,
        };
        store.push_requirement(requirement.clone());

        info!(
            "Requirement {} recorded: {} of product {}",
            requirement.id, requirement.quantity, requirement.product_code
        );
        Ok(requirement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn store_with_product(price: Decimal) -> RecordStore {
        let mut store = RecordStore::new();
        crate::commands::products::UpsertProductCommand {
            code: "MP-1".into(),
            name: "Steel coil".into(),
            price,
            last_import: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        }
        .execute(&mut store)
        .unwrap();
        store
    }

    #[test]
    fn snapshots_name_price_and_total_value() {
        let mut store = store_with_product(dec!(100));
        let requirement = AddRequirementCommand {
            product_code: "MP-1".into(),
            quantity: dec!(50),
        }
        .execute(&mut store)
        .unwrap();

        assert_eq!(requirement.product_name, "Steel coil");
        assert_eq!(requirement.unit_price, dec!(100));
        assert_eq!(requirement.total_value, dec!(5000));
    }

    #[test]
    fn snapshot_survives_a_later_price_change() {
        let mut store = store_with_product(dec!(100));
        AddRequirementCommand {
            product_code: "MP-1".into(),
            quantity: dec!(50),
        }
        .execute(&mut store)
        .unwrap();

        // Re-register the product at a different price.
        crate::commands::products::UpsertProductCommand {
            code: "MP-1".into(),
            name: "Steel coil".into(),
            price: dec!(250),
            last_import: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
        .execute(&mut store)
        .unwrap();

        let requirement = &store.requirements()[0];
        assert_eq!(requirement.unit_price, dec!(100));
        assert_eq!(requirement.total_value, requirement.quantity * requirement.unit_price);
    }

    #[test]
    fn unknown_product_is_rejected() {
        let mut store = RecordStore::new();
        let err = AddRequirementCommand {
            product_code: "MP-404".into(),
            quantity: dec!(10),
        }
        .execute(&mut store)
        .unwrap_err();

        assert_matches!(err, ServiceError::ValidationError(_));
        assert!(store.requirements().is_empty());
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        let mut store = store_with_product(dec!(100));
        for quantity in [dec!(0), dec!(-5)] {
            let err = AddRequirementCommand {
                product_code: "MP-1".into(),
                quantity,
            }
            .execute(&mut store)
            .unwrap_err();
            assert_matches!(err, ServiceError::ValidationError(_));
        }
        assert!(store.requirements().is_empty());
    }

    #[test]
    fn total_value_equals_quantity_times_unit_price() {
        let mut store = store_with_product(dec!(37.5));
        let requirement = AddRequirementCommand {
            product_code: "MP-1".into(),
            quantity: dec!(8),
        }
        .execute(&mut store)
        .unwrap();

        assert_eq!(requirement.total_value, dec!(300));
    }
}
