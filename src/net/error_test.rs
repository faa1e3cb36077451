use super::*;

#[test]
fn status_error_prefers_server_error_field() {
    let err = status_error(400, r#"{"error": "Email already registered"}"#, "Registration failed");
    assert_eq!(
        err,
        ApiError::Status {
            status: 400,
            message: "Email already registered".to_owned()
        }
    );
}

#[test]
fn status_error_falls_back_on_unparseable_body() {
    let err = status_error(500, "<html>oops</html>", "Login failed");
    assert_eq!(err.message(), "Login failed");
}

#[test]
fn status_error_falls_back_on_empty_body() {
    let err = status_error(502, "", "Failed to resend OTP");
    assert_eq!(err.message(), "Failed to resend OTP");
}

#[test]
fn is_unauthenticated_matches_only_401() {
    assert!(status_error(401, "", "x").is_unauthenticated());
    assert!(!status_error(403, "", "x").is_unauthenticated());
    assert!(!ApiError::Network("down".to_owned()).is_unauthenticated());
}

#[test]
fn message_passes_through_each_variant() {
    assert_eq!(ApiError::Network("down".to_owned()).message(), "down");
    assert_eq!(ApiError::Decode("bad json".to_owned()).message(), "bad json");
}
