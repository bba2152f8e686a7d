//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the plain state value; `auth` is the controller that owns
//! and transitions it.

pub mod auth;
pub mod session;
