use super::*;

#[test]
fn credentials_payload_carries_both_fields() {
    assert_eq!(
        credentials_payload("a@b.com", "secret1!"),
        serde_json::json!({ "email": "a@b.com", "password": "secret1!" })
    );
}

#[test]
fn verify_otp_payload_uses_code_field() {
    assert_eq!(
        verify_otp_payload("a@b.com", "123456"),
        serde_json::json!({ "email": "a@b.com", "code": "123456" })
    );
}

#[test]
fn resend_otp_payload_is_email_only() {
    assert_eq!(
        resend_otp_payload("a@b.com"),
        serde_json::json!({ "email": "a@b.com" })
    );
}

#[test]
fn fallback_messages_match_operation_defaults() {
    assert_eq!(REGISTER_FALLBACK, "Registration failed");
    assert_eq!(LOGIN_FALLBACK, "Login failed");
    assert_eq!(VERIFY_OTP_FALLBACK, "OTP verification failed");
    assert_eq!(RESEND_OTP_FALLBACK, "Failed to resend OTP");
}
