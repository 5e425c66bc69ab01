use crate::store::RecordStore;

/// Query trait for read-only derivations over the record store.
///
/// Queries are pure: they never mutate the store, hold no intermediate
/// state, and are safe to run repeatedly between mutations. Unlike
/// commands they cannot fail.
pub trait Query {
    /// The derived value produced by this query
    type Result;

    /// Compute the derivation over the current store contents
    fn execute(&self, store: &RecordStore) -> Self::Result;
}

pub mod contract_queries;
pub mod dashboard_queries;
pub mod pim_queries;
pub mod requirement_queries;

pub use contract_queries::{ContractTimelineQuery, SlaRiskCountQuery};
pub use dashboard_queries::{DashboardQuery, DashboardView};
pub use pim_queries::{PimsByStageQuery, StatusHistogramQuery};
pub use requirement_queries::{
    RemainingForProductQuery, RemainingTotals, RemainingTotalsQuery, RequirementTotals,
    TotalsQuery,
};
