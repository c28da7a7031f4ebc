//! Error types for variant access and construction.

use thiserror::Error;

use crate::ownership::Ownership;
use crate::types::AnyType;

/// Errors raised by asserted accessors and container appends.
///
/// Lookups that simply find nothing (bad index, missing key, wrong kind through
/// an `as_*` accessor) are not errors; they return `None`.
#[derive(Error, Debug)]
pub enum AnyError {
    /// An asserted accessor (`require_*`, `expect_type`) was used on a value of
    /// another kind.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: AnyType, found: AnyType },

    /// A child was appended to a container of the other ownership mode, e.g. a
    /// borrowed reference pushed into an owning vector.
    #[error("Ownership mismatch: {container} container rejects {child} child")]
    OwnershipMismatch {
        container: Ownership,
        child: Ownership,
    },

    /// A raw type code outside the known table.
    #[error("Unknown type code: {0}")]
    UnknownTypeCode(u8),

    /// A foreign value with no counterpart among the variant kinds.
    #[error("Unrepresentable value: {0}")]
    Unrepresentable(String),

    /// A serde serializer rejected a tree while converting to JSON.
    #[error("JSON conversion error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout any-core.
pub type Result<T> = std::result::Result<T, AnyError>;
