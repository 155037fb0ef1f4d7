//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic input failures (missing fields,
/// malformed numbers, out-of-range values). Delivery failures are not domain
/// errors; they are reported as outcomes by the notifications crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. negative stock, empty name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A required numeric field was absent or blank.
    #[error("missing field: {field}")]
    MissingField { field: &'static str },

    /// A numeric field could not be parsed.
    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }

    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field } | Self::InvalidNumber { field, .. } => Some(*field),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_number_message_quotes_the_raw_value() {
        let err = DomainError::invalid_number("current_stock", "12a");
        assert_eq!(err.to_string(), "invalid number for current_stock: \"12a\"");
        assert_eq!(err.field(), Some("current_stock"));
    }

    #[test]
    fn validation_has_no_field() {
        assert_eq!(DomainError::validation("bad").field(), None);
    }
}
