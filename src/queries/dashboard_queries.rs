use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    models::{Pim, PimStatus, WorkflowStage},
    queries::{
        contract_queries::SlaRiskCountQuery,
        pim_queries::{PimsByStageQuery, StatusHistogramQuery},
        requirement_queries::{
            RemainingTotals, RemainingTotalsQuery, RequirementTotals, TotalsQuery,
        },
        Query,
    },
    store::RecordStore,
};

/// Everything the summary surfaces render, derived in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub totals: RequirementTotals,
    pub remaining: RemainingTotals,
    pub stage_board: BTreeMap<WorkflowStage, Vec<Pim>>,
    pub status_histogram: BTreeMap<PimStatus, usize>,
    pub sla_risk_count: usize,
}

/// Recomputes the full derived view of the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardQuery;

impl Query for DashboardQuery {
    type Result = DashboardView;

    fn execute(&self, store: &RecordStore) -> DashboardView {
        DashboardView {
            totals: TotalsQuery.execute(store),
            remaining: RemainingTotalsQuery.execute(store),
            stage_board: PimsByStageQuery.execute(store),
            status_histogram: StatusHistogramQuery.execute(store),
            sla_risk_count: SlaRiskCountQuery.execute(store),
        }
    }
}
