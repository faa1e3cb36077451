//! Client-side form validation, run before any network call.
//!
//! Errors render inline next to the offending field; a backend request is
//! only issued once every field validates.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Minimal email shape check: one `@` with a dotted domain after it.
///
/// # Errors
///
/// Returns the inline message to show next to the field.
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Enter a valid email address");
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.ends_with('.') {
        return Err("Enter a valid email address");
    }
    Ok(())
}

/// Password policy: at least eight characters with a letter and a digit.
///
/// # Errors
///
/// Returns the inline message to show next to the field.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters");
    }
    if !password.chars().any(char::is_alphabetic) || !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain a letter and a number");
    }
    Ok(())
}

/// Confirm-password check for registration.
///
/// # Errors
///
/// Returns the inline message to show next to the field.
pub fn validate_confirm(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password == confirm {
        Ok(())
    } else {
        Err("Passwords do not match")
    }
}

/// Per-field inline errors for the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm: Option<&'static str>,
    pub terms: Option<&'static str>,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.confirm.is_none() && self.terms.is_none()
    }
}

/// Validate the whole registration form at once so every invalid field gets
/// its inline message in a single pass.
pub fn validate_register(
    email: &str,
    password: &str,
    confirm: &str,
    agreed_to_terms: bool,
) -> RegisterErrors {
    RegisterErrors {
        email: validate_email(email).err(),
        password: validate_password(password).err(),
        confirm: validate_confirm(password, confirm).err(),
        terms: (!agreed_to_terms).then_some("You must agree to the terms to continue"),
    }
}
