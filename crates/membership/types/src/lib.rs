//! Domain Membership Types
//!
//! This crate defines the value types used to manage role-based membership
//! on a domain: who belongs to it, with which role, and which member is the
//! owner.
//!
//! # Key Concepts
//!
//! - **Role**: `view`, `edit` or `admin`. Roles are totally ordered by weight
//!   for display purposes.
//! - **Owner**: exactly one member per domain whose role can never be changed
//!   or removed through a change request.
//! - **ChangeRequest**: a validated, not yet applied list of membership
//!   mutations, or the distinct "remove every non-owner" instruction.
//! - **MembershipSet**: the current membership of one domain. Applying a
//!   change is a pure function returning a new set; the owner check lives here
//!   and nowhere else.
//!
//! # Architecture
//!
//! This is a pure types crate with no runtime dependencies. All types
//! implement `Clone`, `Debug`, `Serialize`, `Deserialize`. IDs use the
//! newtype pattern and implement `Display` and `new()`.

#![deny(unsafe_code)]

mod change;
mod errors;
mod ids;
mod member;
mod membership;
mod report;
mod role;

pub use change::*;
pub use errors::*;
pub use ids::*;
pub use member::*;
pub use membership::*;
pub use report::*;
pub use role::*;
