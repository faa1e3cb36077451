use super::*;

#[test]
fn sanitize_discards_non_digits_as_typed() {
    assert_eq!(sanitize_otp_input("12a3456"), "123456");
    assert_eq!(sanitize_otp_input("abc"), "");
    assert_eq!(sanitize_otp_input(" 1 2-3"), "123");
}

#[test]
fn sanitize_caps_length_at_six() {
    assert_eq!(sanitize_otp_input("1234567890"), "123456");
    assert_eq!(sanitize_otp_input("12x34567"), "123456");
}

#[test]
fn otp_ready_requires_exactly_six_digits() {
    assert!(otp_ready("123456"));
    assert!(!otp_ready("12345"));
    assert!(!otp_ready("1234567"));
    assert!(!otp_ready(""));
    assert!(!otp_ready("12345a"));
}

#[test]
fn flow_opens_with_pending_email() {
    let flow = OtpFlow::open("a@b.com");
    assert!(flow.is_open());
    assert!(!flow.is_verifying());
    assert_eq!(flow.email(), Some("a@b.com"));
}

#[test]
fn begin_verify_only_fires_from_open() {
    let verifying = OtpFlow::open("a@b.com").begin_verify();
    assert!(verifying.is_verifying());
    // Already verifying: a second submit is a no-op transition.
    assert_eq!(verifying.clone().begin_verify(), verifying);
    assert_eq!(OtpFlow::Closed.begin_verify(), OtpFlow::Closed);
}

#[test]
fn failure_returns_to_open_for_retry() {
    let flow = OtpFlow::open("a@b.com").begin_verify().fail();
    assert_eq!(flow, OtpFlow::open("a@b.com"));
}

#[test]
fn close_drops_pending_email_from_any_state() {
    assert_eq!(OtpFlow::open("a@b.com").close(), OtpFlow::Closed);
    assert_eq!(OtpFlow::open("a@b.com").begin_verify().close(), OtpFlow::Closed);
    assert_eq!(OtpFlow::Closed.close(), OtpFlow::Closed);
}
