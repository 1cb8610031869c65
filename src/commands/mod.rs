//! Command implementations for portalkit CLI

pub mod check;
pub mod completions;
pub mod helpers;
pub mod resolve;
pub mod validate;
pub mod version;
