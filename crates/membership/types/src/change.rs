//! Change requests: validated, not yet applied membership mutations

use crate::RoleChange;
use serde::{Deserialize, Serialize};

/// How a user-supplied identifier should be interpreted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    #[default]
    Login,
    Id,
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierKind::Login => f.write_str("login"),
            IdentifierKind::Id => f.write_str("id"),
        }
    }
}

/// One membership mutation addressed by login or id
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub kind: IdentifierKind,
    pub value: String,
    pub change: RoleChange,
}

impl ChangeEntry {
    pub fn new(kind: IdentifierKind, value: impl Into<String>, change: RoleChange) -> Self {
        Self {
            kind,
            value: value.into(),
            change,
        }
    }
}

impl std::fmt::Display for ChangeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The unit of work produced by the reconciler
///
/// `RemoveAllNonOwners` is a distinct shape rather than an enumeration of
/// identifiers: the caller does not know the current members up front.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "entries", rename_all = "snake_case")]
pub enum ChangeRequest {
    Entries(Vec<ChangeEntry>),
    RemoveAllNonOwners,
}

impl ChangeRequest {
    /// Entries of a per-identifier request; empty for `RemoveAllNonOwners`
    pub fn entries(&self) -> &[ChangeEntry] {
        match self {
            ChangeRequest::Entries(entries) => entries,
            ChangeRequest::RemoveAllNonOwners => &[],
        }
    }
}
