//! Registration, login, OTP, and session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, cookies included.
//! Server-side (SSR): stubs returning errors/`None` since the session cookie
//! only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call maps transport and status failures into [`ApiError`]. The one
//! deliberate exception is `fetch_current_user`, where a 401 is a legitimate
//! "no session" outcome and resolves to `None` instead of an error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_api_test.rs"]
mod auth_api_test;

use super::error::ApiError;
use super::types::{OtpVerifyResponse, RegisterResponse, ResendOtpResponse, UserProfile};
#[cfg(feature = "hydrate")]
use crate::config;

#[cfg(any(test, feature = "hydrate"))]
const REGISTER_FALLBACK: &str = "Registration failed";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FALLBACK: &str = "Login failed";
#[cfg(any(test, feature = "hydrate"))]
const VERIFY_OTP_FALLBACK: &str = "OTP verification failed";
#[cfg(any(test, feature = "hydrate"))]
const RESEND_OTP_FALLBACK: &str = "Failed to resend OTP";

#[cfg(any(test, feature = "hydrate"))]
fn credentials_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_otp_payload(email: &str, code: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "code": code })
}

#[cfg(any(test, feature = "hydrate"))]
fn resend_otp_payload(email: &str) -> serde_json::Value {
    serde_json::json!({ "email": email })
}

/// POST a JSON payload and decode a JSON response, mapping non-2xx statuses
/// through the operation's fallback message.
#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    path: &str,
    payload: &serde_json::Value,
    fallback: &str,
) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(&config::api_url(path))
        .credentials(web_sys::RequestCredentials::Include)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(super::error::status_error(resp.status(), &body, fallback));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create an account via `POST /auth/register`. A successful response means
/// an OTP email is on its way; the account is not yet verified.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
pub async fn register(email: &str, password: &str) -> Result<RegisterResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = credentials_payload(email, password);
        post_json(config::AUTH_REGISTER, &payload, REGISTER_FALLBACK).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Log in via `POST /auth/login`. The backend sets the session cookie on
/// success; the returned profile is the caller's to feed into the store.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
pub async fn login(email: &str, password: &str) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = credentials_payload(email, password);
        post_json(config::AUTH_LOGIN, &payload, LOGIN_FALLBACK).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Verify a registration OTP via `POST /otp/verifyOtp`. On success the
/// backend also establishes the session cookie.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
pub async fn verify_otp(email: &str, code: &str) -> Result<OtpVerifyResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = verify_otp_payload(email, code);
        post_json(config::OTP_VERIFY, &payload, VERIFY_OTP_FALLBACK).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Request a fresh OTP via `POST /otp/resendOtp`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
pub async fn resend_otp(email: &str) -> Result<ResendOtpResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = resend_otp_payload(email);
        post_json(config::OTP_RESEND, &payload, RESEND_OTP_FALLBACK).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the current session's profile via `GET /auth`.
///
/// Returns `None` when unauthenticated (401), on any other failure, or on
/// the server — a missing session is never an error here.
pub async fn fetch_current_user() -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config::api_url(config::AUTH_SESSION))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            if resp.status() != 401 {
                log::warn!("session check failed with status {}", resp.status());
            }
            return None;
        }
        resp.json::<UserProfile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Clear the session cookie via `POST /auth/logout`. Best-effort: failures
/// are logged and never propagated, since local state is cleared regardless.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(&config::api_url(config::AUTH_LOGOUT))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
        {
            log::warn!("logout request failed: {e}");
        }
    }
}
