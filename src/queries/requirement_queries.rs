use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{queries::Query, store::RecordStore};

/// Unallocated balance of one product: requirement demand minus PIM
/// allocations, floored at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemainingForProductQuery {
    pub product_code: String,
}

impl Query for RemainingForProductQuery {
    type Result = Decimal;

    fn execute(&self, store: &RecordStore) -> Decimal {
        let required: Decimal = store
            .requirements()
            .iter()
            .filter(|requirement| requirement.product_code == self.product_code)
            .map(|requirement| requirement.quantity)
            .sum();
        let allocated: Decimal = store
            .pims()
            .iter()
            .filter(|pim| pim.product_code == self.product_code)
            .map(|pim| pim.quantity)
            .sum();
        (required - allocated).max(Decimal::ZERO)
    }
}

/// Total demanded quantity and value across all requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalsQuery;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementTotals {
    pub total_quantity: Decimal,
    pub total_value: Decimal,
}

impl Query for TotalsQuery {
    type Result = RequirementTotals;

    fn execute(&self, store: &RecordStore) -> RequirementTotals {
        RequirementTotals {
            total_quantity: store
                .requirements()
                .iter()
                .map(|requirement| requirement.quantity)
                .sum(),
            total_value: store
                .requirements()
                .iter()
                .map(|requirement| requirement.total_value)
                .sum(),
        }
    }
}

/// Demand left after subtracting PIM allocations, floored at zero.
///
/// The quantity and value remainders are each computed over the aggregate
/// sums, not per product and then added up. An over-allocated product can
/// therefore absorb slack from another in these figures, while
/// `RemainingForProductQuery` still floors each product on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemainingTotalsQuery;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemainingTotals {
    pub quantity: Decimal,
    pub value: Decimal,
}

impl Query for RemainingTotalsQuery {
    type Result = RemainingTotals;

    fn execute(&self, store: &RecordStore) -> RemainingTotals {
        let totals = TotalsQuery.execute(store);
        let allocated_quantity: Decimal = store.pims().iter().map(|pim| pim.quantity).sum();
        let allocated_value: Decimal = store.pims().iter().map(|pim| pim.total_value).sum();
        RemainingTotals {
            quantity: (totals.total_quantity - allocated_quantity).max(Decimal::ZERO),
            value: (totals.total_value - allocated_value).max(Decimal::ZERO),
        }
    }
}
