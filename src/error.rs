use thiserror::Error;

use crate::types::ReviewId;

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// A single field-level validation failure, surfaced to the user before any
/// mutation takes place.
#[derive(Debug, Clone, Error)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// StorageError
// ---------------------------------------------------------------------------

/// Backend I/O failures. Read paths normalize absent or malformed payloads to
/// the empty state instead of raising, so these surface only on writes.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to serialize collection")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// AuthError
// ---------------------------------------------------------------------------

/// Mutation attempted without the admin capability flag. This is a policy
/// gate, not a security boundary: anyone with access to the durable store can
/// set the flag directly.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Admin mode is not enabled")]
    NotAdmin,
}

// ---------------------------------------------------------------------------
// MutationError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Error)]
pub enum MutationError {
    #[error("Review not found: {id}")]
    NotFound { id: ReviewId },
}

// ---------------------------------------------------------------------------
// CinelogError — top-level rollup
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum CinelogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Mutation(#[from] MutationError),
}

/// Convenience alias — the default error type is `CinelogError`.
pub type Result<T, E = CinelogError> = std::result::Result<T, E>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
