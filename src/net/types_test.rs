use super::*;

#[test]
fn user_profile_deserializes_camel_case_payload() {
    let json = r#"{
        "id": 42,
        "email": "a@b.com",
        "verified": true,
        "role": "admin",
        "organizationDetails": {"name": "Acme"}
    }"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.id, 42);
    assert_eq!(profile.email, "a@b.com");
    assert!(profile.verified);
    assert_eq!(profile.role.as_deref(), Some("admin"));
    assert!(profile.organization_details.is_some());
}

#[test]
fn user_profile_tolerates_missing_optional_fields() {
    let json = r#"{"id": 1, "email": "a@b.com", "verified": false}"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.role, None);
    assert_eq!(profile.organization_details, None);
}

#[test]
fn otp_verify_response_converts_to_profile() {
    let resp = OtpVerifyResponse {
        id: 7,
        email: "a@b.com".to_owned(),
        verified: true,
        role: None,
    };
    let profile = resp.into_profile();
    assert_eq!(profile.id, 7);
    assert!(profile.verified);
    assert_eq!(profile.organization_details, None);
}

#[test]
fn context_item_deserializes_with_counts() {
    let json = r#"{
        "id": "ctx-1",
        "contextName": "Docs",
        "status": "ready",
        "createdAt": "2025-01-01T00:00:00Z",
        "fileCount": 3
    }"#;
    let item: ContextItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.context_name, "Docs");
    assert_eq!(item.file_count, Some(3));
    assert_eq!(item.text_length, None);
}

#[test]
fn api_error_body_extracts_error_field() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
    assert_eq!(body.error, "nope");
}
