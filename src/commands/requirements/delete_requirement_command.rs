use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{commands::Command, errors::ServiceError, store::RecordStore};

/// Deletes a requirement by id. No cascade: PIMs already issued against the
/// product keep their allocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequirementCommand {
    pub id: Uuid,
}

impl Command for DeleteRequirementCommand {
    type Result = ();

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut RecordStore) -> Result<Self::Result, ServiceError> {
        if store.remove_requirement(self.id) {
            info!("Requirement deleted with id: {}", self.id);
        }
        Ok(())
    }
}
