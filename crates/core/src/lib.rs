//! Domain primitives shared by the db and api crates.
//!
//! - [`error`] -- the `CoreError` taxonomy every layer maps into.
//! - [`types`] -- id and timestamp aliases.
//! - [`roles`] -- well-known employee-type ids and entity field defaults.
//! - [`policy`] -- the authorization decision function.

pub mod error;
pub mod policy;
pub mod roles;
pub mod types;
