//! Domain Membership Runtime
//!
//! Turns raw user input into validated change requests and applies them
//! through a [`DomainStore`].
//!
//! - [`MembershipReconciler`] validates input and builds a
//!   [`ChangeRequest`](membership_types::ChangeRequest). It has no view of
//!   current membership, so it never checks the owner invariant.
//! - [`DomainStore`] is the collaborator that owns the membership snapshot
//!   and applies requests. The owner check happens there, inside
//!   [`MembershipSet::apply`](membership_types::MembershipSet::apply).
//! - [`MembershipService`] wires the two together: validation always runs
//!   before the first store call.

#![deny(unsafe_code)]

mod error;
mod memory;
mod reconciler;
mod service;
mod store;

pub use error::*;
pub use memory::InMemoryDomainStore;
pub use reconciler::MembershipReconciler;
pub use service::{MemberListing, MembershipService};
pub use store::DomainStore;
