//! Route guards over the session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! These guards improve UX by redirecting based on resolved session state;
//! they do not enforce security. The backend validates the session cookie on
//! every request regardless of what renders here.
//!
//! DESIGN
//! ======
//! The render-or-redirect choice is a pure function of the session phase so
//! it can be unit-tested without a UI harness. A guard never renders
//! children and navigates in the same evaluation: `Redirect` renders nothing,
//! which avoids a protected-content flash.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionPhase, SessionState};

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// What a guard does for a given session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still unresolved: show a loading indicator, do not navigate.
    Wait,
    /// Render the wrapped children.
    Render,
    /// Navigate to the target and render nothing this cycle.
    Redirect(&'static str),
}

/// Decision table for routes that require a logged-in user.
pub fn require_auth_decision(phase: &SessionPhase) -> GuardDecision {
    match phase {
        SessionPhase::Unknown => GuardDecision::Wait,
        SessionPhase::Anonymous => GuardDecision::Redirect(LOGIN_ROUTE),
        SessionPhase::Authenticated(_) => GuardDecision::Render,
    }
}

/// Decision table for routes reserved for logged-out visitors. Exact
/// complement of [`require_auth_decision`] with the dashboard as target.
pub fn require_guest_decision(phase: &SessionPhase) -> GuardDecision {
    match phase {
        SessionPhase::Unknown => GuardDecision::Wait,
        SessionPhase::Anonymous => GuardDecision::Render,
        SessionPhase::Authenticated(_) => GuardDecision::Redirect(DASHBOARD_ROUTE),
    }
}

/// One navigation per entry into `Redirect`. Returns whether to navigate
/// now and the next latch value; leaving `Redirect` re-arms the latch so a
/// later redirect on the same mounted guard navigates again.
fn redirect_latch(decision: GuardDecision, latched: bool) -> (bool, bool) {
    match decision {
        GuardDecision::Redirect(_) => (!latched, true),
        GuardDecision::Wait | GuardDecision::Render => (false, false),
    }
}

/// Renders children only for authenticated users; anonymous visitors are
/// sent to the login page once the session resolves.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guard_view(children, require_auth_decision)
}

/// Renders children only for anonymous visitors; logged-in users are sent
/// to the dashboard once the session resolves.
#[component]
pub fn RequireGuest(children: ChildrenFn) -> impl IntoView {
    guard_view(children, require_guest_decision)
}

fn guard_view(children: ChildrenFn, decide: fn(&SessionPhase) -> GuardDecision) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // The latch keeps re-renders of a not-yet-unmounted guard from stacking
    // history entries while the phase stays in Redirect.
    let redirected = RwSignal::new(false);
    Effect::new(move || {
        let decision = decide(&session.get().phase);
        let (navigate_now, latched) = redirect_latch(decision, redirected.get_untracked());
        redirected.set(latched);
        if navigate_now {
            if let GuardDecision::Redirect(target) = decision {
                navigate(target, NavigateOptions::default());
            }
        }
    });

    view! {
        {move || match decide(&session.get().phase) {
            GuardDecision::Wait => view! {
                <div class="route-guard__loading">
                    <p>"Loading..."</p>
                </div>
            }
            .into_any(),
            GuardDecision::Redirect(_) => ().into_any(),
            GuardDecision::Render => children().into_any(),
        }}
    }
}
