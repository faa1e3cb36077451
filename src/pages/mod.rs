//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, submissions,
//! fetches) and delegates rendering details to `components`. Auth gating is
//! declared here by wrapping page bodies in `RequireAuth`/`RequireGuest`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
pub mod upload_context;
