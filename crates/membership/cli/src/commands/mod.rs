//! CLI command implementations

pub mod members;
