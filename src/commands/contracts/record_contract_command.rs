use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use validator::Validate;

use crate::{
    commands::Command,
    errors::ServiceError,
    models::{ContractRecord, PimStatus, SlaStatus},
    store::RecordStore,
};

/// Appends a status event to a PIM's contract timeline and moves the PIM to
/// the workflow stage matching the new status.
///
/// The SLA verdict is evaluated once, against the wall clock at recording
/// time, and frozen into the entry; later clock ticks never flip it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordContractCommand {
    pub pim_id: String,
    pub status: PimStatus,
    pub start_date: NaiveDate,
    /// Agreed service window in days.
    #[validate(range(min = 1))]
    pub sla_days: u32,
    pub notification: String,
}

impl Command for RecordContractCommand {
    type Result = ContractRecord;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut RecordStore) -> Result<Self::Result, ServiceError> {
        self.validate().map_err(|e| {
            let msg = format!("Invalid contract input: {}", e);
            error!("{}", msg);
            ServiceError::ValidationError(msg)
        })?;

        let now = Utc::now();
        let due_date = self
            .start_date
            .checked_add_days(Days::new(u64::from(self.sla_days)))
            .ok_or_else(|| {
                let msg = format!(
                    "SLA window of {} days overflows the calendar",
                    self.sla_days
                );
                error!("{}", msg);
                ServiceError::ValidationError(msg)
            })?;

        let pim = store.pim_mut(&self.pim_id).ok_or_else(|| {
            let msg = format!("Unknown PIM id: {}", self.pim_id);
            error!("{}", msg);
            ServiceError::ValidationError(msg)
        })?;
        pim.status = self.status;
        pim.workflow_stage = self.status.workflow_stage();

        let record = ContractRecord {
            pim_id: pim.id.clone(),
            status: self.status,
            sla_days: self.sla_days,
            notification: self.notification.trim().to_string(),
            due_date,
            sla_status: SlaStatus::evaluate(due_date, now),
            updated_at: now,
        };
        store.prepend_contract(record.clone());

        info!(
            "Contract recorded for PIM {} with status {} ({})",
            record.pim_id, record.status, record.sla_status
        );
        Ok(record)
    }
}
