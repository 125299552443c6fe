//! Error types for membership operations

use crate::{DomainId, IdentifierKind, MemberId};
use serde::{Deserialize, Serialize};

/// Errors that can occur while planning or applying membership changes
///
/// Serialisable so that a remote store can report per-entry failures in an
/// [`ApplyReport`](crate::ApplyReport).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum MembershipError {
    #[error("Invalid role '{input}': expected one of view, edit, admin")]
    InvalidRole { input: String },

    #[error("No members given")]
    EmptyMemberList,

    #[error("The owner's role cannot be changed or removed: {identifier}")]
    OwnerRoleImmutable { identifier: String },

    #[error("Member not found: {kind} {value}")]
    NotFound { kind: IdentifierKind, value: String },

    #[error("Login '{login}' is ambiguous: it matches {matches} members, use --ids instead")]
    AmbiguousLogin { login: String, matches: usize },

    #[error("Domain {domain} has more than one owner")]
    MultipleOwners { domain: DomainId },

    #[error("Member already exists: {id}")]
    DuplicateMember { id: MemberId },
}

/// Result type alias for membership operations
pub type MembershipResult<T> = Result<T, MembershipError>;
