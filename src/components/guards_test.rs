use super::*;
use crate::net::types::UserProfile;

fn authed() -> SessionPhase {
    SessionPhase::Authenticated(UserProfile {
        id: 1,
        email: "a@b.com".to_owned(),
        verified: true,
        role: None,
        organization_details: None,
    })
}

#[test]
fn require_auth_waits_while_unknown() {
    assert_eq!(require_auth_decision(&SessionPhase::Unknown), GuardDecision::Wait);
}

#[test]
fn require_auth_redirects_anonymous_to_login() {
    assert_eq!(
        require_auth_decision(&SessionPhase::Anonymous),
        GuardDecision::Redirect(LOGIN_ROUTE)
    );
}

#[test]
fn require_auth_renders_only_when_authenticated() {
    assert_eq!(require_auth_decision(&authed()), GuardDecision::Render);
}

#[test]
fn require_guest_waits_while_unknown() {
    assert_eq!(require_guest_decision(&SessionPhase::Unknown), GuardDecision::Wait);
}

#[test]
fn require_guest_redirects_authenticated_to_dashboard() {
    assert_eq!(
        require_guest_decision(&authed()),
        GuardDecision::Redirect(DASHBOARD_ROUTE)
    );
}

#[test]
fn guards_are_logical_complements_once_resolved() {
    for phase in [SessionPhase::Anonymous, authed()] {
        let auth = require_auth_decision(&phase);
        let guest = require_guest_decision(&phase);
        // Exactly one of the two renders; the other redirects.
        assert_eq!(
            matches!(auth, GuardDecision::Render),
            matches!(guest, GuardDecision::Redirect(_))
        );
        assert_eq!(
            matches!(guest, GuardDecision::Render),
            matches!(auth, GuardDecision::Redirect(_))
        );
    }
}

#[test]
fn latch_allows_one_navigation_per_redirect_stretch() {
    // Anonymous on a guest-only page, then login, then logout while the
    // guard stays mounted. Each entry into Redirect navigates exactly once.
    let phases = [SessionPhase::Anonymous, authed(), authed(), SessionPhase::Anonymous, authed()];
    let mut latched = false;
    let mut navigations = 0;
    for phase in &phases {
        let (navigate_now, next) = redirect_latch(require_guest_decision(phase), latched);
        latched = next;
        if navigate_now {
            navigations += 1;
        }
    }
    assert_eq!(navigations, 2);
}

#[test]
fn latch_rearms_after_leaving_redirect() {
    let (nav, latched) = redirect_latch(GuardDecision::Redirect(DASHBOARD_ROUTE), false);
    assert!(nav && latched);
    let (nav, latched) = redirect_latch(GuardDecision::Redirect(DASHBOARD_ROUTE), latched);
    assert!(!nav && latched);
    let (nav, latched) = redirect_latch(GuardDecision::Render, latched);
    assert!(!nav && !latched);
    let (nav, _) = redirect_latch(GuardDecision::Redirect(DASHBOARD_ROUTE), latched);
    assert!(nav);
}

#[test]
fn login_transition_renders_without_a_loading_flash() {
    // Authenticated immediately after login: no Wait in between.
    assert_eq!(require_auth_decision(&authed()), GuardDecision::Render);
}
