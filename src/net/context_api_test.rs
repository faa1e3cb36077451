use super::*;

#[test]
fn multipart_field_names_match_backend_contract() {
    assert_eq!(FIELD_NAME, "contextName");
    assert_eq!(FIELD_FILES, "files");
    assert_eq!(FIELD_TEXT, "text");
}

#[test]
fn fallback_messages_match_operation_defaults() {
    assert_eq!(UPLOAD_FALLBACK, "Context upload failed");
    assert_eq!(LIST_FALLBACK, "Failed to fetch contexts");
    assert_eq!(DELETE_FALLBACK, "Failed to delete context");
}
