//! Per-entry results of applying a change request
//!
//! Partial application is never hidden: every entry ends up either in
//! `succeeded` or in `failed`, in request order.

use crate::{ChangeEntry, MembershipError, Role};
use serde::{Deserialize, Serialize};

/// What applying a single entry did
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ChangeOutcome {
    /// A new member was created with the requested role
    Inserted { role: Role },
    /// An existing member's role changed
    RoleUpdated { from: Role, to: Role },
    /// The member already had the requested role
    Unchanged { role: Role },
    /// The member was removed
    Removed,
    /// Removal target did not exist
    Absent,
}

/// An entry that was applied
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedChange {
    pub entry: ChangeEntry,
    pub outcome: ChangeOutcome,
}

/// An entry that was rejected
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedChange {
    pub entry: ChangeEntry,
    pub error: MembershipError,
}

/// Result of applying a change request
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyReport {
    #[serde(default)]
    pub succeeded: Vec<AppliedChange>,
    #[serde(default)]
    pub failed: Vec<FailedChange>,
}

impl ApplyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, entry: ChangeEntry, outcome: ChangeOutcome) {
        self.succeeded.push(AppliedChange { entry, outcome });
    }

    pub fn record_failure(&mut self, entry: ChangeEntry, error: MembershipError) {
        self.failed.push(FailedChange { entry, error });
    }

    /// True when no entry failed
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn succeeded_identifiers(&self) -> Vec<&str> {
        self.succeeded.iter().map(|c| c.entry.value.as_str()).collect()
    }

    pub fn failed_identifiers(&self) -> Vec<&str> {
        self.failed.iter().map(|c| c.entry.value.as_str()).collect()
    }

    /// Number of entries that changed membership state
    pub fn changed_count(&self) -> usize {
        self.succeeded
            .iter()
            .filter(|c| {
                !matches!(
                    c.outcome,
                    ChangeOutcome::Unchanged { .. } | ChangeOutcome::Absent
                )
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IdentifierKind, RoleChange};

    #[test]
    fn test_report_tracks_both_sides() {
        let mut report = ApplyReport::new();
        report.record_success(
            ChangeEntry::new(IdentifierKind::Login, "b", RoleChange::Set(Role::Admin)),
            ChangeOutcome::RoleUpdated {
                from: Role::View,
                to: Role::Admin,
            },
        );
        report.record_failure(
            ChangeEntry::new(IdentifierKind::Login, "a", RoleChange::Set(Role::Admin)),
            MembershipError::OwnerRoleImmutable {
                identifier: "a".into(),
            },
        );

        assert!(!report.is_success());
        assert_eq!(report.succeeded_identifiers(), vec!["b"]);
        assert_eq!(report.failed_identifiers(), vec!["a"]);
        assert_eq!(report.changed_count(), 1);
    }

    #[test]
    fn test_report_wire_format() {
        let mut report = ApplyReport::new();
        report.record_failure(
            ChangeEntry::new(IdentifierKind::Id, "1", RoleChange::Remove),
            MembershipError::OwnerRoleImmutable {
                identifier: "1".into(),
            },
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["failed"][0]["error"]["code"], "owner_role_immutable");
        assert_eq!(json["failed"][0]["entry"]["kind"], "id");

        let restored: ApplyReport = serde_json::from_value(json).unwrap();
        assert_eq!(restored, report);
    }
}
