use tracing::warn;

use crate::{
    commands::{
        contracts::RecordContractCommand,
        pims::{CreatePimCommand, DeletePimCommand},
        products::{DeleteProductCommand, UpsertProductCommand},
        requirements::{AddRequirementCommand, DeleteRequirementCommand},
        Command,
    },
    config::DeskConfig,
    errors::ServiceError,
    models::{ContractRecord, Pim, Product, Requirement},
    persistence::{FileSnapshotStore, SnapshotStore},
    queries::{DashboardQuery, DashboardView, Query},
    store::RecordStore,
};

/// Service owning the record store and its snapshot slot.
///
/// Every successful mutation is followed by a best-effort snapshot save;
/// save failures are logged and swallowed so in-memory consistency always
/// wins over durability. Derived views are recomputed from the store on
/// demand through [`DashboardQuery`].
pub struct TradeDeskService {
    store: RecordStore,
    snapshots: Box<dyn SnapshotStore>,
}

impl TradeDeskService {
    /// Opens a desk backed by the given snapshot slot.
    ///
    /// An absent snapshot starts an empty desk; an unreadable one does too,
    /// after a warning. Load problems are never surfaced.
    pub fn open(snapshots: Box<dyn SnapshotStore>) -> Self {
        let store = match snapshots.load() {
            Ok(Some(snapshot)) => RecordStore::from_snapshot(snapshot),
            Ok(None) => RecordStore::new(),
            Err(e) => {
                warn!("Failed to load snapshot, starting empty: {}", e);
                RecordStore::new()
            }
        };
        Self { store, snapshots }
    }

    /// Opens a desk on the file slot named by the configuration.
    pub fn from_config(config: &DeskConfig) -> Self {
        Self::open(Box::new(FileSnapshotStore::new(
            &config.data_dir,
            &config.namespace,
        )))
    }

    /// Read access for rendering tables directly from the store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Recomputes the full derived dashboard view.
    pub fn dashboard(&self) -> DashboardView {
        DashboardQuery.execute(&self.store)
    }

    pub fn upsert_product(
        &mut self,
        command: UpsertProductCommand,
    ) -> Result<Product, ServiceError> {
        self.apply(command)
    }

    pub fn delete_product(&mut self, command: DeleteProductCommand) -> Result<(), ServiceError> {
        self.apply(command)
    }

    pub fn add_requirement(
        &mut self,
        command: AddRequirementCommand,
    ) -> Result<Requirement, ServiceError> {
        self.apply(command)
    }

    pub fn delete_requirement(
        &mut self,
        command: DeleteRequirementCommand,
    ) -> Result<(), ServiceError> {
        self.apply(command)
    }

    pub fn create_pim(&mut self, command: CreatePimCommand) -> Result<Pim, ServiceError> {
        self.apply(command)
    }

    pub fn delete_pim(&mut self, command: DeletePimCommand) -> Result<(), ServiceError> {
        self.apply(command)
    }

    pub fn record_contract(
        &mut self,
        command: RecordContractCommand,
    ) -> Result<ContractRecord, ServiceError> {
        self.apply(command)
    }

    /// Clears all four collections unconditionally and persists the empty
    /// snapshot. Asking the user first is the caller's concern.
    pub fn reset_all(&mut self) {
        self.store.clear();
        self.persist();
    }

    fn apply<C: Command>(&mut self, command: C) -> Result<C::Result, ServiceError> {
        let result = command.execute(&mut self.store)?;
        self.persist();
        Ok(result)
    }

    fn persist(&self) {
        if let Err(e) = self.snapshots.save(&self.store.snapshot()) {
            warn!("Failed to persist snapshot: {}", e);
        }
    }
}
