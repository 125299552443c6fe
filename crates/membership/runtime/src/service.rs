//! Membership service: list, add and remove members of a domain

use membership_types::{
    ApplyReport, ChangeRequest, DomainId, IdentifierKind, Member, MembershipSet, Role,
};
use serde::Serialize;
use tracing::info;

use crate::reconciler::MembershipReconciler;
use crate::store::DomainStore;

/// Members of a domain in display order
#[derive(Clone, Debug, Serialize)]
pub struct MemberListing {
    pub domain: DomainId,
    pub members: Vec<Member>,
    /// Whether the name column should be shown at all
    pub show_names: bool,
}

impl From<&MembershipSet> for MemberListing {
    fn from(set: &MembershipSet) -> Self {
        Self {
            domain: set.domain().clone(),
            members: set.sorted_for_display().into_iter().cloned().collect(),
            show_names: set.has_distinguishing_names(),
        }
    }
}

/// Validates requests with a [`MembershipReconciler`] and applies them
/// through a [`DomainStore`]
pub struct MembershipService<S> {
    store: S,
    reconciler: MembershipReconciler,
}

impl<S: DomainStore> MembershipService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            reconciler: MembershipReconciler::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn reconciler(&self) -> &MembershipReconciler {
        &self.reconciler
    }

    /// Current members, sorted for display
    pub async fn list(&self, domain: &DomainId) -> Result<MemberListing, S::Error> {
        let set = self.store.members(domain).await?;
        Ok(MemberListing::from(&set))
    }

    /// Add members, or update their role if they already belong to the domain
    pub async fn add(
        &self,
        domain: &DomainId,
        identifiers: &[String],
        kind: IdentifierKind,
        role: Option<Role>,
    ) -> Result<ApplyReport, S::Error> {
        let request = self.reconciler.plan_add(identifiers, kind, role)?;
        self.apply(domain, &request).await
    }

    /// Remove the given members, or every non-owner member when `all` is set
    pub async fn remove(
        &self,
        domain: &DomainId,
        identifiers: &[String],
        kind: IdentifierKind,
        all: bool,
    ) -> Result<ApplyReport, S::Error> {
        let request = self.reconciler.plan_remove(identifiers, kind, all)?;
        self.apply(domain, &request).await
    }

    /// Send an already validated request to the store
    pub async fn apply(
        &self,
        domain: &DomainId,
        request: &ChangeRequest,
    ) -> Result<ApplyReport, S::Error> {
        let report = match request {
            ChangeRequest::Entries(entries) => {
                info!(domain = %domain, entries = entries.len(), "Updating members");
                self.store.update_members(domain, entries).await?
            }
            ChangeRequest::RemoveAllNonOwners => {
                info!(domain = %domain, "Removing all non-owner members");
                self.store.delete_members(domain).await?
            }
        };
        Ok(report)
    }
}
