//! Wire DTOs for the backend's JSON responses.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase payloads via serde renames so
//! deserialization stays schema-driven. Organization details are an opaque
//! JSON value; nothing in the UI interprets them beyond presence.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The current user's identity as returned by `GET /auth`, login, and
/// OTP verification. Held in memory for the session's lifetime only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub verified: bool,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub organization_details: Option<serde_json::Value>,
}

/// Response from `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub id: i64,
    pub email: String,
    pub verified: bool,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub organization_id: Option<i64>,
}

/// Response from `POST /otp/verifyOtp`. Verified accounts are logged in
/// server-side as part of the same call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpVerifyResponse {
    pub id: i64,
    pub email: String,
    pub verified: bool,
    #[serde(default)]
    pub role: Option<String>,
}

impl OtpVerifyResponse {
    /// The verified identity as a session profile.
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email,
            verified: self.verified,
            role: self.role,
            organization_details: None,
        }
    }
}

/// Response from `POST /otp/resendOtp`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResendOtpResponse {
    pub message: String,
}

/// A named bundle of uploaded text/files grounding automated replies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextItem {
    pub id: String,
    pub context_name: String,
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub file_count: Option<u32>,
    #[serde(default)]
    pub text_length: Option<u64>,
}

/// Response from `GET /context`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContextListResponse {
    pub contexts: Vec<ContextItem>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Response from `POST /context/upload`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadContextResponse {
    pub id: String,
    pub context_name: String,
    pub status: String,
}

/// Response from `DELETE /context/{id}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DeleteContextResponse {
    pub message: String,
}

/// Error body shape the backend uses on non-2xx responses.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
