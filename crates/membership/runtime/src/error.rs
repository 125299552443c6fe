//! Error types for the in-memory store

use membership_types::{DomainId, MembershipError};
use thiserror::Error;

/// Errors returned by [`InMemoryDomainStore`](crate::InMemoryDomainStore)
#[derive(Debug, Error)]
pub enum StoreError {
    /// The domain is not known to the store
    #[error("Domain not found: {0}")]
    DomainNotFound(DomainId),

    /// Validation failure
    #[error(transparent)]
    Membership(#[from] MembershipError),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
