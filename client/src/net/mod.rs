//! Identity types and the credential-verification seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the persisted identity schema and `credentials` the
//! collaborator that turns a username/password pair into a `User`.

pub mod credentials;
pub mod types;
