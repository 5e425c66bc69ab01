use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::pim::PimStatus;

/// Whether a contract met its SLA window at the moment it was recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum SlaStatus {
    OnTime,
    Late,
}

impl SlaStatus {
    /// Evaluates lateness of `due_date` against an instant in time.
    ///
    /// The deadline is the start of the due date in UTC. Contract records
    /// store the result of a single evaluation at creation time and never
    /// re-evaluate it afterwards.
    pub fn evaluate(due_date: NaiveDate, at: DateTime<Utc>) -> Self {
        let deadline = due_date.and_time(NaiveTime::MIN).and_utc();
        if at > deadline {
            SlaStatus::Late
        } else {
            SlaStatus::OnTime
        }
    }
}

/// One entry in the append-only status timeline of a PIM.
///
/// Records are never mutated once written; they disappear only when their
/// PIM is deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub pim_id: String,
    pub status: PimStatus,
    /// Agreed service window in days, counted from the contract start date.
    pub sla_days: u32,
    pub notification: String,
    pub due_date: NaiveDate,
    pub sla_status: SlaStatus,
    pub updated_at: DateTime<Utc>,
}
