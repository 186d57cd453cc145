//! Header policy applied to every API request.

use clinic_http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use clinic_http::{HeaderMap, HeaderName, HeaderValue, HttpError};

use crate::error::ApiError;
use crate::tenant::TenantHeaders;

const APPLICATION_JSON: &str = "application/json";

/// How the request body is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    /// JSON (also used when there is no body)
    Json,
    /// `multipart/form-data`; the encoder supplies the content type
    Multipart,
}

/// Compute the headers for one request.
///
/// In order: `Accept`, JSON `Content-Type` (not for multipart), bearer
/// `Authorization` when a token is stored, tenant and branch scope, then
/// `overrides`, which replace computed values of the same name.
///
/// A stored token that cannot be sent as a header counts as no token.
///
/// # Errors
/// Returns `ApiError::Transport` when a tenant id or override is not a
/// valid header value.
pub fn build_headers(
    tenant: Option<&TenantHeaders>,
    token: Option<&str>,
    encoding: BodyEncoding,
    overrides: &HeaderMap,
) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    if encoding == BodyEncoding::Json {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    }

    if let Some(value) = token.and_then(bearer) {
        headers.insert(AUTHORIZATION, value);
    }

    if let Some(tenant) = tenant {
        for (name, value) in tenant.header_pairs() {
            headers.insert(name, header_value(value)?);
        }
    }

    for name in overrides.keys() {
        headers.remove(name);
    }
    for (name, value) in overrides {
        headers.append(name.clone(), value.clone());
    }

    Ok(headers)
}

/// Parse caller-supplied `(name, value)` pairs into an override map.
///
/// # Errors
/// Returns `ApiError::Transport` for an invalid header name or value.
pub fn header_overrides<'a>(
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<HeaderMap, ApiError> {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        let name = HeaderName::try_from(name).map_err(HttpError::InvalidHeaderName)?;
        map.insert(name, header_value(value)?);
    }
    Ok(map)
}

fn bearer(token: &str) -> Option<HeaderValue> {
    match HeaderValue::try_from(format!("Bearer {token}")) {
        Ok(mut value) => {
            value.set_sensitive(true);
            Some(value)
        }
        Err(_) => {
            tracing::warn!("stored token is not a valid header value; sending request without it");
            None
        }
    }
}

fn header_value(value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::try_from(value)
        .map_err(|e| ApiError::Transport(HttpError::InvalidHeaderValue(e)))
}
