//! Shared HTTP utilities for the commit gateway.

use http::header::HeaderValue;

use crate::github::error::ResolveError;
use crate::github::models::ApiCommit;

/// Builds the `Authorization` header value for a token.
///
/// An empty token yields an empty header value rather than no header; GitHub
/// then serves the request as anonymous. Non-empty tokens are sent verbatim.
pub(super) fn authorization_value(access_key: &str) -> Result<HeaderValue, ResolveError> {
    if access_key.is_empty() {
        return Ok(HeaderValue::from_static(""));
    }

    let mut value = HeaderValue::from_str(&format!("Bearer {access_key}")).map_err(|error| {
        ResolveError::Configuration {
            message: format!("access key is not a valid header value: {error}"),
        }
    })?;
    value.set_sensitive(true);
    Ok(value)
}

pub(super) fn extract_github_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

/// Decodes a page of commits; an empty or `null` body is an empty page.
pub(super) fn decode_commit_page(body: &str) -> Result<Vec<ApiCommit>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let page: Option<Vec<ApiCommit>> = serde_json::from_str(body)?;
    Ok(page.unwrap_or_default())
}
