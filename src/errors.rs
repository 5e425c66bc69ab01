use serde::Serialize;

/// Errors surfaced by mutation operations.
///
/// Both kinds are locally recoverable: the caller is expected to show the
/// condition to the user and retry with corrected input. A command that
/// returns one of these has left the record store untouched.
#[derive(Debug, thiserror::Error, Serialize)]
pub enum ServiceError {
    /// Malformed or missing input, a product/PIM reference that does not
    /// resolve, or a duplicate derived PIM id.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A PIM quantity would exceed the remaining requirement balance for
    /// its product.
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_the_offending_detail() {
        let err = ServiceError::ValidationError("quantity must be positive".into());
        assert_eq!(err.to_string(), "Validation error: quantity must be positive");

        let err = ServiceError::CapacityExceeded("25 > 20".into());
        assert_eq!(err.to_string(), "Capacity exceeded: 25 > 20");
    }
}
