//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and read identity from the auth controller
//! in Leptos context.

pub mod admin_layout;
pub mod navbar;
