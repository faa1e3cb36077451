//! OTP verification modal state machine and input rules.
//!
//! DESIGN
//! ======
//! `Closed -> Open(email) -> Verifying -> Open (retry) | Closed (done)`.
//! The pending email is captured when registration succeeds and dropped when
//! the modal closes, so a stale address can never be verified. Input
//! filtering happens as the user types: non-digits are discarded, not
//! rejected with an error.

#[cfg(test)]
#[path = "otp_test.rs"]
mod otp_test;

/// Required OTP length.
pub const OTP_LEN: usize = 6;

/// Cosmetic client-side resend cooldown; the backend enforces its own.
pub const RESEND_COOLDOWN_SECS: u32 = 60;

/// Where the verification modal is in its lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OtpFlow {
    /// No registration is awaiting verification.
    #[default]
    Closed,
    /// The modal is open for this email, accepting input.
    Open { email: String },
    /// A verify request is in flight; the submit control is disabled.
    Verifying { email: String },
}

impl OtpFlow {
    /// Open the modal for an email that just registered.
    pub fn open(email: impl Into<String>) -> Self {
        Self::Open { email: email.into() }
    }

    /// The pending email, while one exists.
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Open { email } | Self::Verifying { email } => Some(email),
            Self::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_verifying(&self) -> bool {
        matches!(self, Self::Verifying { .. })
    }

    /// Transition into `Verifying`. Only legal from `Open`; other states are
    /// returned unchanged so a double submit cannot double-fire.
    pub fn begin_verify(self) -> Self {
        match self {
            Self::Open { email } => Self::Verifying { email },
            other => other,
        }
    }

    /// A verify attempt failed: back to `Open` for a retry.
    pub fn fail(self) -> Self {
        match self {
            Self::Verifying { email } => Self::Open { email },
            other => other,
        }
    }

    /// Close the modal and drop the pending email.
    pub fn close(self) -> Self {
        Self::Closed
    }
}

/// Filter raw input down to at most [`OTP_LEN`] digits.
pub fn sanitize_otp_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(OTP_LEN).collect()
}

/// Whether a sanitized code is submittable (exactly six digits).
pub fn otp_ready(code: &str) -> bool {
    code.len() == OTP_LEN && code.chars().all(|c| c.is_ascii_digit())
}
