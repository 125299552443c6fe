//! Membership set: who belongs to a domain
//!
//! The membership set is keyed by member id, with login as a secondary,
//! not necessarily unique, lookup key. Applying a change is pure: it returns
//! a new set and leaves the receiver untouched. This is the single place
//! where the owner invariant is enforced.

use crate::{
    ApplyReport, ChangeEntry, ChangeOutcome, ChangeRequest, DomainId, IdentifierKind, Member,
    MemberId, MembershipError, MembershipResult, RoleChange,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// The current membership of one domain
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MembershipSnapshot", into = "MembershipSnapshot")]
pub struct MembershipSet {
    domain: DomainId,
    members: BTreeMap<MemberId, Member>,
}

/// Wire representation: a flat member list
#[derive(Clone, Debug, Serialize, Deserialize)]
struct MembershipSnapshot {
    domain: DomainId,
    #[serde(default)]
    members: Vec<Member>,
}

impl TryFrom<MembershipSnapshot> for MembershipSet {
    type Error = MembershipError;

    fn try_from(snapshot: MembershipSnapshot) -> Result<Self, Self::Error> {
        MembershipSet::from_members(snapshot.domain, snapshot.members)
    }
}

impl From<MembershipSet> for MembershipSnapshot {
    fn from(set: MembershipSet) -> Self {
        Self {
            domain: set.domain,
            members: set.members.into_values().collect(),
        }
    }
}

impl MembershipSet {
    /// Create an empty membership set
    pub fn new(domain: DomainId) -> Self {
        Self {
            domain,
            members: BTreeMap::new(),
        }
    }

    /// Build a set from a member list, rejecting duplicate ids and a second owner
    pub fn from_members(
        domain: DomainId,
        members: impl IntoIterator<Item = Member>,
    ) -> MembershipResult<Self> {
        let mut set = Self::new(domain);
        for member in members {
            set.insert(member)?;
        }
        Ok(set)
    }

    /// Insert a member
    pub fn insert(&mut self, member: Member) -> MembershipResult<()> {
        if self.members.contains_key(&member.id) {
            return Err(MembershipError::DuplicateMember { id: member.id });
        }
        if member.is_owner && self.owner().is_some() {
            return Err(MembershipError::MultipleOwners {
                domain: self.domain.clone(),
            });
        }
        self.members.insert(member.id.clone(), member);
        Ok(())
    }

    pub fn domain(&self) -> &DomainId {
        &self.domain
    }

    pub fn owner(&self) -> Option<&Member> {
        self.members.values().find(|m| m.is_owner)
    }

    pub fn get(&self, id: &MemberId) -> Option<&Member> {
        self.members.get(id)
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look a member up by id (exact, unique) or login (exact).
    ///
    /// A login shared by several members is an error rather than a silent
    /// first match: the caller has to fall back to ids.
    pub fn resolve(&self, kind: IdentifierKind, value: &str) -> MembershipResult<&Member> {
        let not_found = || MembershipError::NotFound {
            kind,
            value: value.to_string(),
        };

        match kind {
            IdentifierKind::Id => self.members.get(&MemberId::new(value)).ok_or_else(not_found),
            IdentifierKind::Login => {
                let mut matches = self
                    .members
                    .values()
                    .filter(|m| m.login.as_deref() == Some(value));
                let first = matches.next().ok_or_else(not_found)?;
                let others = matches.count();
                if others > 0 {
                    return Err(MembershipError::AmbiguousLogin {
                        login: value.to_string(),
                        matches: others + 1,
                    });
                }
                Ok(first)
            }
        }
    }

    /// Whether any member has a name distinct from its login.
    ///
    /// This is a set-wide decision: when false, names are left out of the
    /// listing entirely instead of being shown per row.
    pub fn has_distinguishing_names(&self) -> bool {
        self.members.values().any(Member::has_distinguishing_name)
    }

    /// Members in display order: owner first, then ascending by role weight
    /// and display name. Names compare case-sensitively; ids break any
    /// remaining tie.
    pub fn sorted_for_display(&self) -> Vec<&Member> {
        let use_names = self.has_distinguishing_names();
        let mut members: Vec<&Member> = self.members.values().collect();
        members.sort_by(|a, b| display_order(a, b, use_names));
        members
    }

    /// Apply one entry, returning the updated set and what happened.
    ///
    /// Any entry resolving to the owner fails with `OwnerRoleImmutable`.
    /// Setting a role on an unknown identifier inserts a new member;
    /// removing an unknown identifier is a no-op.
    pub fn apply_change(&self, entry: &ChangeEntry) -> MembershipResult<(Self, ChangeOutcome)> {
        let existing = match self.resolve(entry.kind, &entry.value) {
            Ok(member) => Some(member),
            Err(MembershipError::NotFound { .. }) => None,
            Err(e) => return Err(e),
        };

        let Some(member) = existing else {
            return match entry.change {
                RoleChange::Remove => Ok((self.clone(), ChangeOutcome::Absent)),
                RoleChange::Set(role) => {
                    let member = match entry.kind {
                        IdentifierKind::Id => Member::new(MemberId::new(&entry.value), role),
                        IdentifierKind::Login => {
                            Member::new(MemberId::generate(), role).with_login(&entry.value)
                        }
                    }
                    .with_added_at(Utc::now());

                    let mut next = self.clone();
                    next.insert(member)?;
                    Ok((next, ChangeOutcome::Inserted { role }))
                }
            };
        };

        if member.is_owner {
            return Err(MembershipError::OwnerRoleImmutable {
                identifier: entry.value.clone(),
            });
        }

        let id = member.id.clone();
        let current = member.role;
        let mut next = self.clone();

        match entry.change {
            RoleChange::Remove => {
                next.members.remove(&id);
                Ok((next, ChangeOutcome::Removed))
            }
            RoleChange::Set(role) if role == current => {
                Ok((next, ChangeOutcome::Unchanged { role }))
            }
            RoleChange::Set(role) => {
                if let Some(m) = next.members.get_mut(&id) {
                    m.role = role;
                }
                Ok((next, ChangeOutcome::RoleUpdated { from: current, to: role }))
            }
        }
    }

    /// Remove every member except the owner
    pub fn remove_all_non_owners(&self) -> Self {
        Self {
            domain: self.domain.clone(),
            members: self
                .members
                .iter()
                .filter(|(_, m)| m.is_owner)
                .map(|(id, m)| (id.clone(), m.clone()))
                .collect(),
        }
    }

    /// Apply a whole request.
    ///
    /// Entries are applied in order. A failed entry leaves the set as it was
    /// before that entry and does not stop the remaining entries.
    pub fn apply(&self, request: &ChangeRequest) -> (Self, ApplyReport) {
        let mut report = ApplyReport::new();

        match request {
            ChangeRequest::Entries(entries) => {
                let mut current = self.clone();
                for entry in entries {
                    match current.apply_change(entry) {
                        Ok((next, outcome)) => {
                            current = next;
                            report.record_success(entry.clone(), outcome);
                        }
                        Err(e) => report.record_failure(entry.clone(), e),
                    }
                }
                (current, report)
            }
            ChangeRequest::RemoveAllNonOwners => {
                for member in self.members.values().filter(|m| !m.is_owner) {
                    report.record_success(
                        ChangeEntry::new(IdentifierKind::Id, member.id.as_str(), RoleChange::Remove),
                        ChangeOutcome::Removed,
                    );
                }
                (self.remove_all_non_owners(), report)
            }
        }
    }
}

fn display_order(a: &Member, b: &Member, use_names: bool) -> Ordering {
    b.is_owner
        .cmp(&a.is_owner)
        .then_with(|| a.role.weight().cmp(&b.role.weight()))
        .then_with(|| a.display_name(use_names).cmp(b.display_name(use_names)))
        .then_with(|| a.id.cmp(&b.id))
}
