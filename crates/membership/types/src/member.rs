//! A single member of a domain

use crate::{MemberId, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One person's relationship to a domain
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable, unique identifier
    pub id: MemberId,
    /// Human-readable identifier, not guaranteed unique
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current role
    pub role: Role,
    /// Whether this member owns the domain
    #[serde(default)]
    pub is_owner: bool,
    /// When the member was added, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

impl Member {
    pub fn new(id: MemberId, role: Role) -> Self {
        Self {
            id,
            login: None,
            name: None,
            role,
            is_owner: false,
            added_at: None,
        }
    }

    /// Create the owner of a domain
    pub fn owner(id: MemberId, role: Role) -> Self {
        Self {
            is_owner: true,
            ..Self::new(id, role)
        }
    }

    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_added_at(mut self, added_at: DateTime<Utc>) -> Self {
        self.added_at = Some(added_at);
        self
    }

    /// Whether the name adds information beyond the login
    pub fn has_distinguishing_name(&self) -> bool {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => self.login.as_deref() != Some(name),
            _ => false,
        }
    }

    /// Login, falling back to the id for members without one
    pub fn login_or_id(&self) -> &str {
        self.login.as_deref().unwrap_or(self.id.as_str())
    }

    /// Name used for display ordering.
    ///
    /// `use_names` is the set-wide decision from
    /// [`MembershipSet::has_distinguishing_names`](crate::MembershipSet::has_distinguishing_names).
    pub fn display_name(&self, use_names: bool) -> &str {
        match self.name.as_deref() {
            Some(name) if use_names && !name.is_empty() => name,
            _ => self.login_or_id(),
        }
    }
}
