//! Property-based tests for the aggregation engine.
//!
//! These verify the balance invariants across arbitrary record mixes,
//! including over-allocations that can only enter through out-of-band
//! snapshot edits.

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use comex_desk::{
    models::{PaymentMethod, Pim, PimStatus, Requirement},
    persistence::Snapshot,
    queries::{Query, RemainingForProductQuery, RemainingTotalsQuery, TotalsQuery},
    RecordStore,
};

const UNIT_PRICE: i64 = 100;

fn requirement(code: &str, quantity: i64) -> Requirement {
    let quantity = Decimal::from(quantity);
    let unit_price = Decimal::from(UNIT_PRICE);
    Requirement {
        id: Uuid::new_v4(),
        product_code: code.into(),
        product_name: format!("{code} material"),
        quantity,
        unit_price,
        total_value: quantity * unit_price,
    }
}

fn pim(index: usize, code: &str, quantity: i64) -> Pim {
    let quantity = Decimal::from(quantity);
    let status = PimStatus::ContractPending;
    Pim {
        id: format!("PIM-{index}"),
        sub_id: None,
        factory: "Planta Norte".into(),
        supplier: "Acme Trading".into(),
        product_code: code.into(),
        quantity,
        payment: PaymentMethod::OpenAccount,
        status,
        total_value: quantity * Decimal::from(UNIT_PRICE),
        workflow_stage: status.workflow_stage(),
    }
}

fn store_with(code: &str, requirement_quantities: &[i64], pim_quantities: &[i64]) -> RecordStore {
    RecordStore::from_snapshot(Snapshot {
        requirements: requirement_quantities
            .iter()
            .map(|quantity| requirement(code, *quantity))
            .collect(),
        pims: pim_quantities
            .iter()
            .enumerate()
            .map(|(index, quantity)| pim(index, code, *quantity))
            .collect(),
        ..Snapshot::default()
    })
}

fn quantity_strategy() -> impl Strategy<Value = i64> {
    1i64..100_000
}

proptest! {
    #[test]
    fn remaining_is_never_negative(
        requirements in prop::collection::vec(quantity_strategy(), 0..8),
        pims in prop::collection::vec(quantity_strategy(), 0..8),
    ) {
        let store = store_with("MP-1", &requirements, &pims);
        let remaining = RemainingForProductQuery {
            product_code: "MP-1".into(),
        }
        .execute(&store);
        prop_assert!(remaining >= Decimal::ZERO);
    }

    #[test]
    fn a_product_without_requirements_has_zero_remaining(
        pims in prop::collection::vec(quantity_strategy(), 0..8),
    ) {
        let store = store_with("MP-9", &[], &pims);
        let remaining = RemainingForProductQuery {
            product_code: "MP-9".into(),
        }
        .execute(&store);
        prop_assert_eq!(remaining, Decimal::ZERO);
    }

    #[test]
    fn totals_equal_the_requirement_sums(
        requirements in prop::collection::vec(quantity_strategy(), 0..8),
    ) {
        let store = store_with("MP-1", &requirements, &[]);
        let expected_quantity: i64 = requirements.iter().sum();

        let totals = TotalsQuery.execute(&store);
        prop_assert_eq!(totals.total_quantity, Decimal::from(expected_quantity));
        prop_assert_eq!(
            totals.total_value,
            Decimal::from(expected_quantity * UNIT_PRICE)
        );
    }

    #[test]
    fn remaining_totals_are_never_negative(
        requirements in prop::collection::vec(quantity_strategy(), 0..8),
        pims in prop::collection::vec(quantity_strategy(), 0..8),
    ) {
        let store = store_with("MP-1", &requirements, &pims);
        let remaining = RemainingTotalsQuery.execute(&store);
        prop_assert!(remaining.quantity >= Decimal::ZERO);
        prop_assert!(remaining.value >= Decimal::ZERO);
    }

    #[test]
    fn unallocated_demand_equals_the_plain_difference(
        requirements in prop::collection::vec(quantity_strategy(), 1..8),
    ) {
        // With no PIMs at all, nothing is floored away.
        let store = store_with("MP-1", &requirements, &[]);
        let expected: i64 = requirements.iter().sum();

        let remaining = RemainingForProductQuery {
            product_code: "MP-1".into(),
        }
        .execute(&store);
        prop_assert_eq!(remaining, Decimal::from(expected));

        let totals = RemainingTotalsQuery.execute(&store);
        prop_assert_eq!(totals.quantity, Decimal::from(expected));
        prop_assert_eq!(totals.value, Decimal::from(expected * UNIT_PRICE));
    }
}
