use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    models::{Pim, PimStatus, WorkflowStage},
    queries::Query,
    store::RecordStore,
};

/// Buckets every PIM under its current workflow stage.
///
/// All six stages are present in the result even when empty, in pipeline
/// order, so a board renders fixed columns. PIMs keep store order inside
/// each bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PimsByStageQuery;

impl Query for PimsByStageQuery {
    type Result = BTreeMap<WorkflowStage, Vec<Pim>>;

    fn execute(&self, store: &RecordStore) -> Self::Result {
        let mut stages: BTreeMap<WorkflowStage, Vec<Pim>> = WorkflowStage::iter()
            .map(|stage| (stage, Vec::new()))
            .collect();
        for pim in store.pims() {
            stages.entry(pim.workflow_stage).or_default().push(pim.clone());
        }
        stages
    }
}

/// Counts PIMs per status. Only statuses currently in use appear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusHistogramQuery;

impl Query for StatusHistogramQuery {
    type Result = BTreeMap<PimStatus, usize>;

    fn execute(&self, store: &RecordStore) -> Self::Result {
        let mut histogram = BTreeMap::new();
        for pim in store.pims() {
            *histogram.entry(pim.status).or_insert(0) += 1;
        }
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentMethod;
    use crate::persistence::Snapshot;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn pim(id: &str, status: PimStatus, quantity: Decimal) -> Pim {
        Pim {
            id: id.into(),
            sub_id: None,
            factory: "Planta Norte".into(),
            supplier: "Acme Trading".into(),
            product_code: "MP-1".into(),
            quantity,
            payment: PaymentMethod::DirectRemittance,
            status,
            total_value: quantity * dec!(100),
            workflow_stage: status.workflow_stage(),
        }
    }

    #[test]
    fn every_stage_is_present_even_on_an_empty_store() {
        let board = PimsByStageQuery.execute(&RecordStore::new());

        assert_eq!(board.len(), 6);
        assert!(board.values().all(Vec::is_empty));
        let stages: Vec<WorkflowStage> = board.keys().copied().collect();
        assert_eq!(stages, WorkflowStage::iter().collect::<Vec<_>>());
    }

    #[test]
    fn pims_land_in_their_current_stage_in_store_order() {
        let store = RecordStore::from_snapshot(Snapshot {
            pims: vec![
                pim("PIM-1", PimStatus::ContractPending, dec!(10)),
                pim("PIM-2", PimStatus::ContractValidated, dec!(5)),
                pim("PIM-3", PimStatus::ContractPending, dec!(2)),
            ],
            ..Snapshot::default()
        });

        let board = PimsByStageQuery.execute(&store);
        let created: Vec<&str> = board[&WorkflowStage::PimCreated]
            .iter()
            .map(|pim| pim.id.as_str())
            .collect();
        assert_eq!(created, ["PIM-1", "PIM-3"]);
        assert_eq!(board[&WorkflowStage::ContractValidated].len(), 1);
        assert!(board[&WorkflowStage::Dispatch].is_empty());
    }

    #[test]
    fn histogram_counts_only_statuses_in_use() {
        let store = RecordStore::from_snapshot(Snapshot {
            pims: vec![
                pim("PIM-1", PimStatus::ContractPending, dec!(10)),
                pim("PIM-2", PimStatus::ContractPending, dec!(5)),
                pim("PIM-3", PimStatus::Dispatched, dec!(2)),
            ],
            ..Snapshot::default()
        });

        let histogram = StatusHistogramQuery.execute(&store);
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram[&PimStatus::ContractPending], 2);
        assert_eq!(histogram[&PimStatus::Dispatched], 1);
    }
}
