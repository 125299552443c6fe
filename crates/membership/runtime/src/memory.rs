//! In-memory domain store for development and testing.
//!
//! Applies requests locally through
//! [`MembershipSet::apply`](membership_types::MembershipSet::apply).
//! Not suitable for production use.

use async_trait::async_trait;
use dashmap::DashMap;
use membership_types::{ApplyReport, ChangeEntry, ChangeRequest, DomainId, MembershipSet};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::store::DomainStore;

/// In-memory store implementation.
#[derive(Clone, Default)]
pub struct InMemoryDomainStore {
    /// Membership sets indexed by domain.
    domains: Arc<DashMap<DomainId, MembershipSet>>,
}

impl InMemoryDomainStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or replace a domain's membership.
    pub fn insert_domain(&self, set: MembershipSet) {
        self.domains.insert(set.domain().clone(), set);
    }

    /// Number of known domains.
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    fn apply(&self, domain: &DomainId, request: &ChangeRequest) -> StoreResult<ApplyReport> {
        let mut set = self
            .domains
            .get_mut(domain)
            .ok_or_else(|| StoreError::DomainNotFound(domain.clone()))?;

        let (next, report) = set.apply(request);
        *set = next;

        if !report.is_success() {
            warn!(
                domain = %domain,
                failed = ?report.failed_identifiers(),
                "Some membership changes were rejected"
            );
        }
        info!(
            domain = %domain,
            applied = report.succeeded.len(),
            failed = report.failed.len(),
            "Applied membership changes"
        );

        Ok(report)
    }
}

#[async_trait]
impl DomainStore for InMemoryDomainStore {
    type Error = StoreError;

    async fn members(&self, domain: &DomainId) -> StoreResult<MembershipSet> {
        self.domains
            .get(domain)
            .map(|set| set.clone())
            .ok_or_else(|| StoreError::DomainNotFound(domain.clone()))
    }

    async fn update_members(
        &self,
        domain: &DomainId,
        entries: &[ChangeEntry],
    ) -> StoreResult<ApplyReport> {
        self.apply(domain, &ChangeRequest::Entries(entries.to_vec()))
    }

    async fn delete_members(&self, domain: &DomainId) -> StoreResult<ApplyReport> {
        self.apply(domain, &ChangeRequest::RemoveAllNonOwners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use membership_types::{IdentifierKind, Member, MemberId, Role, RoleChange};

    fn seeded() -> (InMemoryDomainStore, DomainId) {
        let domain = DomainId::new("docs");
        let store = InMemoryDomainStore::new();
        store.insert_domain(
            MembershipSet::from_members(
                domain.clone(),
                vec![
                    Member::owner(MemberId::new("1"), Role::Admin).with_login("a"),
                    Member::new(MemberId::new("2"), Role::View).with_login("b"),
                ],
            )
            .unwrap(),
        );
        (store, domain)
    }

    #[tokio::test]
    async fn test_members_snapshot() {
        let (store, domain) = seeded();
        let set = store.members(&domain).await.unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(store.domain_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_domain() {
        let store = InMemoryDomainStore::new();
        let result = store.members(&DomainId::new("missing")).await;
        assert!(matches!(result, Err(StoreError::DomainNotFound(_))));
    }

    #[tokio::test]
    async fn test_update_persists_successes_and_reports_failures() {
        let (store, domain) = seeded();
        let entries = vec![
            ChangeEntry::new(IdentifierKind::Login, "a", RoleChange::Set(Role::View)),
            ChangeEntry::new(IdentifierKind::Login, "b", RoleChange::Set(Role::Edit)),
        ];

        let report = store.update_members(&domain, &entries).await.unwrap();
        assert_eq!(report.failed_identifiers(), vec!["a"]);
        assert_eq!(report.succeeded_identifiers(), vec!["b"]);

        let set = store.members(&domain).await.unwrap();
        assert_eq!(set.resolve(IdentifierKind::Login, "b").unwrap().role, Role::Edit);
        assert_eq!(set.owner().unwrap().role, Role::Admin);
    }

    #[tokio::test]
    async fn test_delete_members_keeps_owner() {
        let (store, domain) = seeded();
        let report = store.delete_members(&domain).await.unwrap();
        assert_eq!(report.succeeded.len(), 1);

        let set = store.members(&domain).await.unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.owner().is_some());
    }
}
