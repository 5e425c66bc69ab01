pub mod contract;
pub mod pim;
pub mod product;
pub mod requirement;

pub use contract::{ContractRecord, SlaStatus};
pub use pim::{PaymentMethod, Pim, PimStatus, WorkflowStage};
pub use product::Product;
pub use requirement::Requirement;
