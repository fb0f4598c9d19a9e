//! Domain validation errors for core domain types.
//!
//! These errors are returned by validation methods when domain invariants
//! are violated, e.g. a rule pairing an operator with a field that does not
//! support it.

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Segment names must be non-empty.
    #[error("segment name cannot be empty")]
    EmptyName,

    /// The operator is not valid for the rule's field.
    #[error("operator '{operator}' is not valid for field '{field}'")]
    OperatorNotSupported {
        /// The field being filtered.
        field: String,
        /// The offending operator.
        operator: String,
    },

    /// Range rules need both bounds.
    #[error("range rule on '{field}' requires both min and max bounds")]
    MissingRangeBounds {
        /// The field being filtered.
        field: String,
    },

    /// A numeric value was required but the rule carries text.
    #[error("field '{field}' requires a numeric value, got '{value}'")]
    NonNumericValue {
        /// The field being filtered.
        field: String,
        /// The value that failed to parse as a number.
        value: String,
    },
}
