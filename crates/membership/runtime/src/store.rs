//! Collaborator interface for the system that owns domain membership

use async_trait::async_trait;
use membership_types::{ApplyReport, ChangeEntry, DomainId, MembershipError, MembershipSet};

/// Resolves a domain and reads or mutates its membership.
///
/// Implementations decide whether a request is applied as one batch or as
/// sequential calls, but they must report every entry: a rejected entry
/// belongs in [`ApplyReport::failed`], never silently dropped or rolled back.
/// Transport errors are returned as `Self::Error` unchanged and are not
/// retried.
#[async_trait]
pub trait DomainStore: Send + Sync {
    /// Error type; core validation errors convert into it
    type Error: std::error::Error + From<MembershipError> + Send + Sync + 'static;

    /// Current membership snapshot
    async fn members(&self, domain: &DomainId) -> Result<MembershipSet, Self::Error>;

    /// Apply per-identifier changes
    async fn update_members(
        &self,
        domain: &DomainId,
        entries: &[ChangeEntry],
    ) -> Result<ApplyReport, Self::Error>;

    /// Remove every member except the owner
    async fn delete_members(&self, domain: &DomainId) -> Result<ApplyReport, Self::Error>;
}
