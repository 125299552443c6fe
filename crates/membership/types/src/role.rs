//! Membership roles
//!
//! A role is one of `view`, `edit` or `admin`. Removal is not a role: it is
//! expressed with [`RoleChange::Remove`] so that [`Role::parse`] stays strict.

use crate::{MembershipError, MembershipResult};
use serde::{Deserialize, Serialize};

/// Role a member holds on a domain
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Read-only access
    View,
    /// Read and write access
    #[default]
    Edit,
    /// Full access, including membership management
    Admin,
}

impl Role {
    /// All persisted roles in ascending weight order
    pub const ALL: [Role; 3] = [Role::View, Role::Edit, Role::Admin];

    /// Parse a role name.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace, so
    /// `"Admin"` and `" edit "` are accepted. Anything other than the three
    /// role names fails with [`MembershipError::InvalidRole`].
    pub fn parse(input: &str) -> MembershipResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "view" => Ok(Role::View),
            "edit" => Ok(Role::Edit),
            "admin" => Ok(Role::Admin),
            _ => Err(MembershipError::InvalidRole {
                input: input.to_string(),
            }),
        }
    }

    /// Sort weight: `view = 1 < edit = 2 < admin = 3`
    pub fn weight(self) -> u8 {
        match self {
            Role::View => 1,
            Role::Edit => 2,
            Role::Admin => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::View => "view",
            Role::Edit => "edit",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = MembershipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s)
    }
}

/// Target of a change entry: assign a role, or remove the member
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "role", rename_all = "snake_case")]
pub enum RoleChange {
    Set(Role),
    Remove,
}

impl From<Role> for RoleChange {
    fn from(role: Role) -> Self {
        RoleChange::Set(role)
    }
}

impl std::fmt::Display for RoleChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleChange::Set(role) => write!(f, "{}", role),
            RoleChange::Remove => f.write_str("none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_roles() {
        assert_eq!(Role::parse("view").unwrap(), Role::View);
        assert_eq!(Role::parse("edit").unwrap(), Role::Edit);
        assert_eq!(Role::parse("admin").unwrap(), Role::Admin);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Role::parse("ADMIN").unwrap(), Role::Admin);
        assert_eq!(Role::parse(" View ").unwrap(), Role::View);
    }

    #[test]
    fn test_parse_rejects_unknown_roles() {
        let err = Role::parse("superuser").unwrap_err();
        assert_eq!(
            err,
            MembershipError::InvalidRole {
                input: "superuser".into()
            }
        );

        // "none" is a removal marker, never a parseable role
        assert!(Role::parse("none").is_err());
        assert!(Role::parse("owner").is_err());
        assert!(Role::parse("").is_err());
    }

    #[test]
    fn test_default_role_is_edit() {
        assert_eq!(Role::default(), Role::Edit);
    }

    #[test]
    fn test_weight_order() {
        assert!(Role::View.weight() < Role::Edit.weight());
        assert!(Role::Edit.weight() < Role::Admin.weight());

        let weights: Vec<u8> = Role::ALL.iter().map(|r| r.weight()).collect();
        assert_eq!(weights, vec![1, 2, 3]);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_change_serialization() {
        let set = serde_json::to_value(RoleChange::Set(Role::Admin)).unwrap();
        assert_eq!(set, serde_json::json!({ "action": "set", "role": "admin" }));

        let remove = serde_json::to_value(RoleChange::Remove).unwrap();
        assert_eq!(remove, serde_json::json!({ "action": "remove" }));
    }
}
