use super::*;

fn profile(id: i64) -> UserProfile {
    UserProfile {
        id,
        email: format!("user{id}@example.com"),
        verified: true,
        role: None,
        organization_details: None,
    }
}

#[test]
fn initial_phase_is_unknown() {
    assert_eq!(SessionState::default().phase, SessionPhase::Unknown);
    assert!(!SessionPhase::default().is_resolved());
}

#[test]
fn resolved_with_profile_is_authenticated() {
    let phase = SessionPhase::resolved(Some(profile(1)));
    assert!(phase.is_authenticated());
    assert_eq!(phase.user().map(|u| u.id), Some(1));
}

#[test]
fn resolved_without_profile_is_anonymous() {
    let phase = SessionPhase::resolved(None);
    assert_eq!(phase, SessionPhase::Anonymous);
    assert!(phase.is_resolved());
    assert!(!phase.is_authenticated());
}

#[test]
fn phase_is_exactly_one_state_at_a_time() {
    // A user is present if and only if the phase is Authenticated.
    for phase in [
        SessionPhase::Unknown,
        SessionPhase::Anonymous,
        SessionPhase::Authenticated(profile(3)),
    ] {
        assert_eq!(phase.user().is_some(), phase.is_authenticated());
    }
}

#[test]
fn repeated_resolutions_are_idempotent_per_input() {
    let a = SessionPhase::resolved(Some(profile(5)));
    let b = SessionPhase::resolved(Some(profile(5)));
    assert_eq!(a, b);
    assert_eq!(SessionPhase::resolved(None), SessionPhase::resolved(None));
}
