//! Shared application state provided via Leptos context at the app root.
//!
//! DESIGN
//! ======
//! State machines are plain types with pure transition functions so they can
//! be unit-tested without a rendering harness; pages and components hold
//! them in `RwSignal`s obtained from context.

pub mod otp;
pub mod session;
pub mod toast;
