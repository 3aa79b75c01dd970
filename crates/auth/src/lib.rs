//! `arbor-auth` — user accounts and password rotation rules.
//!
//! This crate is intentionally decoupled from storage, hashing and sessions:
//! it only states what a user is and which mutation a rotation policy applies.

pub mod group;
pub mod rotation;
pub mod user;

pub use group::Group;
pub use rotation::{PasswordChangeBatchConfig, RotationPolicy, UserScope, staleness_threshold};
pub use user::User;
