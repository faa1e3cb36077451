use super::*;

fn profile(verified: bool) -> UserProfile {
    UserProfile {
        id: 1,
        email: "a@b.com".to_owned(),
        verified,
        role: None,
        organization_details: None,
    }
}

#[test]
fn verified_profile_logs_in() {
    assert_eq!(classify_login(&profile(true)), LoginOutcome::Verified);
}

#[test]
fn unverified_profile_goes_back_to_otp() {
    assert_eq!(classify_login(&profile(false)), LoginOutcome::NeedsVerification);
}
