use serde::{Deserialize, Serialize};

use crate::{
    models::{ContractRecord, SlaStatus},
    queries::Query,
    store::RecordStore,
};

/// Number of contract entries recorded late against their SLA window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlaRiskCountQuery;

impl Query for SlaRiskCountQuery {
    type Result = usize;

    fn execute(&self, store: &RecordStore) -> usize {
        store
            .contracts()
            .iter()
            .filter(|contract| contract.sla_status == SlaStatus::Late)
            .count()
    }
}

/// Contract timeline, newest first, optionally narrowed to one PIM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractTimelineQuery {
    pub pim_id: Option<String>,
}

impl Query for ContractTimelineQuery {
    type Result = Vec<ContractRecord>;

    fn execute(&self, store: &RecordStore) -> Vec<ContractRecord> {
        store
            .contracts()
            .iter()
            .filter(|contract| match &self.pim_id {
                Some(pim_id) => &contract.pim_id == pim_id,
                None => true,
            })
            .cloned()
            .collect()
    }
}
