//! HTTP client modules for the Replexify backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_api` covers registration, login, OTP and session endpoints;
//! `context_api` covers the context upload CRUD surface; `types` defines the
//! wire DTOs and `error` the closed set of request failure kinds.

pub mod auth_api;
pub mod context_api;
pub mod error;
pub mod types;
