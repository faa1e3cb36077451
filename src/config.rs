//! API base URL and endpoint path configuration.
//!
//! DESIGN
//! ======
//! The backend origin is baked in at compile time via `REPLEXIFY_API_URL` so
//! the shipped WASM bundle has no runtime configuration surface. Endpoint
//! builders are plain functions so request code stays free of string
//! assembly and the paths can be unit-tested.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Product name used in page titles and chrome.
pub const APP_NAME: &str = "Replexify";

/// Backend origin, without a trailing slash.
pub fn api_base_url() -> &'static str {
    option_env!("REPLEXIFY_API_URL").unwrap_or("http://localhost:4000")
}

/// Prefix a backend endpoint path with the configured origin.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base_url())
}

pub const AUTH_REGISTER: &str = "/auth/register";
pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_SESSION: &str = "/auth";
pub const AUTH_LOGOUT: &str = "/auth/logout";
pub const OTP_VERIFY: &str = "/otp/verifyOtp";
pub const OTP_RESEND: &str = "/otp/resendOtp";
pub const CONTEXT_UPLOAD: &str = "/context/upload";

/// Paginated context listing path.
pub fn context_list_path(page: u32, limit: u32) -> String {
    format!("/context?page={page}&limit={limit}")
}

/// Path for a single context resource.
pub fn context_item_path(id: &str) -> String {
    format!("/context/{id}")
}
