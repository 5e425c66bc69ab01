use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Enum representing the ordered pipeline stages a PIM moves through.
///
/// The declaration order is the pipeline order; `Ord` follows it, so stage
/// collections sort into board columns without an extra index.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum WorkflowStage {
    RequirementApproved,
    PimCreated,
    ContractUnderReview,
    ContractValidated,
    PaymentInProgress,
    Dispatch,
}

/// Enum representing the possible statuses of a PIM.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum PimStatus {
    /// Initial status of a freshly issued permit.
    ContractPending,
    ContractUnderReview,
    ContractValidated,
    PaymentInProgress,
    Dispatched,
}

impl PimStatus {
    /// Workflow stage a PIM carrying this status sits in.
    ///
    /// Total over the enum; a permit never maps below `PimCreated`, the
    /// stage it starts in.
    pub fn workflow_stage(self) -> WorkflowStage {
        match self {
            PimStatus::ContractPending => WorkflowStage::PimCreated,
            PimStatus::ContractUnderReview => WorkflowStage::ContractUnderReview,
            PimStatus::ContractValidated => WorkflowStage::ContractValidated,
            PimStatus::PaymentInProgress => WorkflowStage::PaymentInProgress,
            PimStatus::Dispatched => WorkflowStage::Dispatch,
        }
    }
}

/// Payment terms agreed with the supplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum PaymentMethod {
    LetterOfCredit,
    DirectRemittance,
    OpenAccount,
}

/// An import permit allocating product quantity against the requirement
/// balance.
///
/// Only `status` and `workflow_stage` change after creation, driven by
/// contract recording; everything else is fixed at issue time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pim {
    /// Derived identifier: the parent permit id, or "parent / sub" when a
    /// sub-permit id was given.
    pub id: String,
    pub sub_id: Option<String>,
    pub factory: String,
    pub supplier: String,
    pub product_code: String,
    pub quantity: Decimal,
    pub payment: PaymentMethod,
    pub status: PimStatus,
    /// quantity × product price at creation time.
    pub total_value: Decimal,
    pub workflow_stage: WorkflowStage,
}

impl Pim {
    /// Builds the derived permit id from its parts. A blank sub-id counts
    /// as absent.
    pub fn derive_id(parent_id: &str, sub_id: Option<&str>) -> String {
        match sub_id.map(str::trim).filter(|sub| !sub.is_empty()) {
            Some(sub) => format!("{} / {}", parent_id.trim(), sub),
            None => parent_id.trim().to_string(),
        }
    }
}
