//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page declares its access requirement by wrapping content in a
//! `RouteGuard` (directly or through `AdminLayout`) and delegates chrome to
//! `components`.

pub mod admin;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
