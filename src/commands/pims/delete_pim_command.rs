use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{commands::Command, errors::ServiceError, store::RecordStore};

/// Deletes a PIM and its contract timeline. Deleting an unknown id is a
/// no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePimCommand {
    pub id: String,
}

impl Command for DeletePimCommand {
    type Result = ();

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut RecordStore) -> Result<Self::Result, ServiceError> {
        if store.remove_pim(&self.id) {
            info!("PIM deleted with id: {}", self.id);
        }
        Ok(())
    }
}
