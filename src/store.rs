use uuid::Uuid;

use crate::models::{ContractRecord, Pim, Product, Requirement};
use crate::persistence::Snapshot;

/// In-memory source of truth for all trade desk records.
///
/// Four ordered collections with lookup by key and cascading deletes. The
/// store performs no input validation; commands validate before touching it.
/// Product codes are unique through upsert-replace, requirement ids are
/// UUIDs, and PIM id uniqueness is enforced at creation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordStore {
    products: Vec<Product>,
    requirements: Vec<Requirement>,
    pims: Vec<Pim>,
    contracts: Vec<ContractRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from a persisted snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            products: snapshot.products,
            requirements: snapshot.requirements,
            pims: snapshot.pims,
            contracts: snapshot.contracts,
        }
    }

    /// Full copy of the store in its persisted form.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            products: self.products.clone(),
            requirements: self.requirements.clone(),
            pims: self.pims.clone(),
            contracts: self.contracts.clone(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn pims(&self) -> &[Pim] {
        &self.pims
    }

    /// Contract timeline, newest first.
    pub fn contracts(&self) -> &[ContractRecord] {
        &self.contracts
    }

    pub fn product(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.code == code)
    }

    pub fn requirement(&self, id: Uuid) -> Option<&Requirement> {
        self.requirements
            .iter()
            .find(|requirement| requirement.id == id)
    }

    pub fn pim(&self, id: &str) -> Option<&Pim> {
        self.pims.iter().find(|pim| pim.id == id)
    }

    pub(crate) fn pim_mut(&mut self, id: &str) -> Option<&mut Pim> {
        self.pims.iter_mut().find(|pim| pim.id == id)
    }

    /// Inserts a product, replacing any existing entry with the same code.
    /// The replacement takes the last position in iteration order.
    pub(crate) fn upsert_product(&mut self, product: Product) {
        self.products.retain(|existing| existing.code != product.code);
        self.products.push(product);
    }

    pub(crate) fn push_requirement(&mut self, requirement: Requirement) {
        self.requirements.push(requirement);
    }

    pub(crate) fn push_pim(&mut self, pim: Pim) {
        self.pims.push(pim);
    }

    pub(crate) fn prepend_contract(&mut self, contract: ContractRecord) {
        self.contracts.insert(0, contract);
    }

    /// Removes a product and everything recorded against it: its
    /// requirements, its PIMs, and (through the PIMs) their contract
    /// timelines. Returns false without touching anything when the code is
    /// unknown.
    pub fn remove_product(&mut self, code: &str) -> bool {
        if self.product(code).is_none() {
            return false;
        }
        self.products.retain(|product| product.code != code);
        self.requirements
            .retain(|requirement| requirement.product_code != code);
        let cascading: Vec<String> = self
            .pims
            .iter()
            .filter(|pim| pim.product_code == code)
            .map(|pim| pim.id.clone())
            .collect();
        for id in cascading {
            self.remove_pim(&id);
        }
        true
    }

    /// Removes a requirement by id; no cascade.
    pub fn remove_requirement(&mut self, id: Uuid) -> bool {
        let before = self.requirements.len();
        self.requirements.retain(|requirement| requirement.id != id);
        self.requirements.len() < before
    }

    /// Removes a PIM together with its contract timeline.
    pub fn remove_pim(&mut self, id: &str) -> bool {
        let before = self.pims.len();
        self.pims.retain(|pim| pim.id != id);
        if self.pims.len() == before {
            return false;
        }
        self.contracts.retain(|contract| contract.pim_id != id);
        true
    }

    /// Drops every record unconditionally.
    pub fn clear(&mut self) {
        self.products.clear();
        self.requirements.clear();
        self.pims.clear();
        self.contracts.clear();
    }
}
