use rust_decimal::Decimal;
use validator::ValidationError;

use crate::{errors::ServiceError, store::RecordStore};

/// Command trait for implementing the Command Pattern
///
/// This trait encapsulates all the logic needed to execute one business
/// operation: validate the input, apply the mutation to the record store,
/// and return the affected entity. A command that fails leaves the store
/// untouched; validation and balance checks run before the first write.
pub trait Command {
    /// The return type of the command when executed successfully
    type Result;

    /// Execute the command against the given record store
    fn execute(&self, store: &mut RecordStore) -> Result<Self::Result, ServiceError>;
}

pub mod contracts;
pub mod pims;
pub mod products;
pub mod requirements;

/// Rejects strings that are empty once trimmed.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("Must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Rejects quantities that are not strictly positive.
pub(crate) fn validate_positive(quantity: &Decimal) -> Result<(), ValidationError> {
    if *quantity <= Decimal::ZERO {
        let mut err = ValidationError::new("positive");
        err.message = Some("Must be greater than zero".into());
        return Err(err);
    }
    Ok(())
}

/// Rejects negative prices; zero is allowed.
pub(crate) fn validate_non_negative(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("Must not be negative".into());
        return Err(err);
    }
    Ok(())
}
