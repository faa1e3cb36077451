//! Session state machine: the single source of truth for "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and identity-aware chrome read this state; only the flows in
//! this module write it. The actual credential is an HttpOnly cookie owned
//! by the backend — this state is a cached, in-memory view of it that lives
//! for the tab's lifetime.
//!
//! DESIGN
//! ======
//! Exactly one phase holds at any time. `Unknown` exists only between app
//! mount and the first session fetch resolving; guards wait on it rather
//! than guessing.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::auth_api;
use crate::net::types::UserProfile;

/// Tri-state session phase.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionPhase {
    /// Initial state: the first session check has not resolved yet.
    #[default]
    Unknown,
    /// Resolved: no user is logged in.
    Anonymous,
    /// Resolved: this user is logged in.
    Authenticated(UserProfile),
}

impl SessionPhase {
    /// Phase after a session fetch resolves. Any failure, including a 401,
    /// has already been collapsed into `None` by the API client.
    pub fn resolved(fetched: Option<UserProfile>) -> Self {
        match fetched {
            Some(profile) => Self::Authenticated(profile),
            None => Self::Anonymous,
        }
    }

    /// Whether the initial session check has completed.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The logged-in profile, if any.
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }
}

/// Injectable session store. Provided once at the app root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub phase: SessionPhase,
}

/// Set the store to `Authenticated(profile)`. The caller guarantees the
/// profile came from a trusted login/OTP response.
pub fn login_session(session: RwSignal<SessionState>, profile: UserProfile) {
    session.update(|s| s.phase = SessionPhase::Authenticated(profile));
}

/// Re-check the backend session and resolve the phase. Never surfaces an
/// error: an unauthenticated or failed check resolves to `Anonymous`.
pub async fn refresh_session(session: RwSignal<SessionState>) {
    let fetched = auth_api::fetch_current_user().await;
    session.update(|s| s.phase = SessionPhase::resolved(fetched));
}

/// Log out: fire the backend call, then clear local state regardless of the
/// call's outcome (failures are logged inside the API client).
pub async fn logout_session(session: RwSignal<SessionState>) {
    auth_api::logout().await;
    session.update(|s| s.phase = SessionPhase::Anonymous);
}
