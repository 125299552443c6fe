//! Membership Reconciler: turns raw input into a validated change request
//!
//! Validation here happens before any store interaction. The reconciler has
//! no view of current membership, so the owner invariant is left to
//! [`MembershipSet::apply`](membership_types::MembershipSet::apply).

use membership_types::{
    ChangeEntry, ChangeRequest, IdentifierKind, MembershipError, MembershipResult, Role,
    RoleChange,
};
use tracing::debug;

/// Builds change requests for add and remove operations
#[derive(Clone, Copy, Debug, Default)]
pub struct MembershipReconciler {
    /// Role applied by `plan_add` when none is requested
    default_role: Role,
}

impl MembershipReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_role(mut self, role: Role) -> Self {
        self.default_role = role;
        self
    }

    pub fn default_role(&self) -> Role {
        self.default_role
    }

    /// Plan adding (or updating) members.
    ///
    /// One entry per identifier, in input order, each with `role` or the
    /// default role. Fails with `EmptyMemberList` when no identifier remains
    /// after trimming.
    pub fn plan_add<I, S>(
        &self,
        identifiers: I,
        kind: IdentifierKind,
        role: Option<Role>,
    ) -> MembershipResult<ChangeRequest>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let role = role.unwrap_or(self.default_role);
        let entries = build_entries(identifiers, kind, RoleChange::Set(role))?;

        debug!(entries = entries.len(), kind = %kind, role = %role, "Planned member add");
        Ok(ChangeRequest::Entries(entries))
    }

    /// Plan removing members.
    ///
    /// With `remove_all` the identifiers are ignored and the request removes
    /// every non-owner member; this never fails. Otherwise each identifier
    /// becomes a removal entry and an empty list fails with `EmptyMemberList`.
    pub fn plan_remove<I, S>(
        &self,
        identifiers: I,
        kind: IdentifierKind,
        remove_all: bool,
    ) -> MembershipResult<ChangeRequest>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if remove_all {
            debug!("Planned removal of all non-owner members");
            return Ok(ChangeRequest::RemoveAllNonOwners);
        }

        let entries = build_entries(identifiers, kind, RoleChange::Remove)?;

        debug!(entries = entries.len(), kind = %kind, "Planned member removal");
        Ok(ChangeRequest::Entries(entries))
    }
}

fn build_entries<I, S>(
    identifiers: I,
    kind: IdentifierKind,
    change: RoleChange,
) -> MembershipResult<Vec<ChangeEntry>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let entries: Vec<ChangeEntry> = identifiers
        .into_iter()
        .filter_map(|id| {
            let id = id.as_ref().trim();
            (!id.is_empty()).then(|| ChangeEntry::new(kind, id, change))
        })
        .collect();

    if entries.is_empty() {
        return Err(MembershipError::EmptyMemberList);
    }
    Ok(entries)
}
