//! Context upload CRUD endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! A "context" is a named bundle of documents or pasted text the backend
//! uses to ground automated support replies. Upload is the one multipart
//! endpoint in the app; list and delete are plain JSON.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "context_api_test.rs"]
mod context_api_test;

use super::error::ApiError;
use super::types::{ContextListResponse, DeleteContextResponse};
#[cfg(feature = "hydrate")]
use super::types::UploadContextResponse;
#[cfg(feature = "hydrate")]
use crate::config;

#[cfg(any(test, feature = "hydrate"))]
const UPLOAD_FALLBACK: &str = "Context upload failed";
#[cfg(any(test, feature = "hydrate"))]
const LIST_FALLBACK: &str = "Failed to fetch contexts";
#[cfg(any(test, feature = "hydrate"))]
const DELETE_FALLBACK: &str = "Failed to delete context";

/// Multipart field names expected by `POST /context/upload`.
#[cfg(any(test, feature = "hydrate"))]
const FIELD_NAME: &str = "contextName";
#[cfg(any(test, feature = "hydrate"))]
const FIELD_FILES: &str = "files";
#[cfg(any(test, feature = "hydrate"))]
const FIELD_TEXT: &str = "text";

/// Upload a new context as multipart form data: the context name, zero or
/// more files (field repeated per file), and optional pasted text. The
/// browser supplies the multipart boundary, so no Content-Type is set here.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
#[cfg(feature = "hydrate")]
pub async fn upload_context(
    name: &str,
    files: &[web_sys::File],
    text: Option<&str>,
) -> Result<UploadContextResponse, ApiError> {
    let build_err = |_| ApiError::Network("failed to build upload form".to_owned());
    let form = web_sys::FormData::new().map_err(build_err)?;
    form.append_with_str(FIELD_NAME, name).map_err(build_err)?;
    for file in files {
        form.append_with_blob_and_filename(FIELD_FILES, file, &file.name())
            .map_err(build_err)?;
    }
    if let Some(text) = text {
        form.append_with_str(FIELD_TEXT, text).map_err(build_err)?;
    }

    let resp = gloo_net::http::Request::post(&config::api_url(config::CONTEXT_UPLOAD))
        .credentials(web_sys::RequestCredentials::Include)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(super::error::status_error(resp.status(), &body, UPLOAD_FALLBACK));
    }
    resp.json::<UploadContextResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch a page of contexts via `GET /context`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
pub async fn list_contexts(page: u32, limit: u32) -> Result<ContextListResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = config::context_list_path(page, limit);
        let resp = gloo_net::http::Request::get(&config::api_url(&path))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(super::error::status_error(resp.status(), &body, LIST_FALLBACK));
        }
        resp.json::<ContextListResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, limit);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a context via `DELETE /context/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
pub async fn delete_context(id: &str) -> Result<DeleteContextResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = config::context_item_path(id);
        let resp = gloo_net::http::Request::delete(&config::api_url(&path))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(super::error::status_error(resp.status(), &body, DELETE_FALLBACK));
        }
        resp.json::<DeleteContextResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
