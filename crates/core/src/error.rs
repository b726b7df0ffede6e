//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type VendingResult<T> = Result<T, VendingError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VendingError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An offer edit addressed an entry position that does not exist.
    #[error("entry index {index} out of range (offer has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// An offer edit supplied a price that is not strictly positive.
    #[error("invalid price: {0} (must be strictly positive)")]
    InvalidPrice(u64),

    /// An offer edit supplied a negative count.
    #[error("invalid count: {0} (must be non-negative)")]
    InvalidCount(i64),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl VendingError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
