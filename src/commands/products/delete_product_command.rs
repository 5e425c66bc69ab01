use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{commands::Command, errors::ServiceError, store::RecordStore};

/// Deletes a product and cascades to its requirements, its PIMs, and the
/// PIMs' contract timelines. Deleting an unknown code is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteProductCommand {
    pub code: String,
}

impl Command for DeleteProductCommand {
    type Result = ();

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut RecordStore) -> Result<Self::Result, ServiceError> {
        if store.remove_product(&self.code) {
            info!("Product deleted with code: {}", self.code);
        }
        Ok(())
    }
}
