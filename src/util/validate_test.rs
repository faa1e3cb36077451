use super::*;

#[test]
fn validate_email_accepts_plain_addresses() {
    assert_eq!(validate_email("a@b.com"), Ok(()));
    assert_eq!(validate_email("  user@mail.example.org  "), Ok(()));
}

#[test]
fn validate_email_rejects_malformed_addresses() {
    assert!(validate_email("").is_err());
    assert!(validate_email("nodomain").is_err());
    assert!(validate_email("@b.com").is_err());
    assert!(validate_email("a@").is_err());
    assert!(validate_email("a@nodot").is_err());
    assert!(validate_email("a@dot.").is_err());
}

#[test]
fn validate_password_enforces_length_and_mix() {
    assert_eq!(validate_password("abcdef1h"), Ok(()));
    assert!(validate_password("").is_err());
    assert!(validate_password("short1").is_err());
    assert!(validate_password("onlyletters").is_err());
    assert!(validate_password("12345678").is_err());
}

#[test]
fn validate_confirm_requires_exact_match() {
    assert_eq!(validate_confirm("secret12", "secret12"), Ok(()));
    assert!(validate_confirm("secret12", "secret13").is_err());
}

#[test]
fn validate_register_collects_all_field_errors() {
    let errors = validate_register("bad", "short", "different", false);
    assert!(errors.email.is_some());
    assert!(errors.password.is_some());
    assert!(errors.confirm.is_some());
    assert!(errors.terms.is_some());
    assert!(!errors.is_empty());
}

#[test]
fn validate_register_passes_a_clean_form() {
    let errors = validate_register("a@b.com", "secret12", "secret12", true);
    assert!(errors.is_empty());
}
