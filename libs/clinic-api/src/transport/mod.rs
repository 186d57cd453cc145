//! Request execution and outcome normalization.

mod download;

use clinic_http::{
    HeaderMap, HttpClient, HttpClientBuilder, HttpResponse, Method, Multipart,
    StatusCode, TransportSecurity,
};
use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ApiClientConfig;
use crate::credentials::{CredentialStore, FileCredentialStore};
use crate::error::{ApiError, error_message, status_text};
use crate::headers::{BodyEncoding, build_headers};
use crate::tenant::TenantHeaders;

/// Body of an outgoing request
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Any JSON value, bare strings included
    Json(serde_json::Value),
    /// Passed through as is; the encoder sets the content type
    Multipart(Multipart),
}

impl RequestBody {
    /// Serialize `value` into a JSON body
    ///
    /// # Errors
    /// Returns `ApiError::Serialize` if `value` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(ApiError::Serialize)
    }

    fn encoding(&self) -> BodyEncoding {
        match self {
            Self::Multipart(_) => BodyEncoding::Multipart,
            Self::Empty | Self::Json(_) => BodyEncoding::Json,
        }
    }
}

/// One API call, built by a resource client and consumed by [`ApiClient::api`]
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Relative to the base URL, or an absolute `http(s)://` URL
    pub path: String,
    pub method: Method,
    pub body: RequestBody,
    pub tenant: Option<TenantHeaders>,
    /// Caller overrides, applied after the computed headers
    pub headers: HeaderMap,
}

impl RequestDescriptor {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            body: RequestBody::Empty,
            tenant: None,
            headers: HeaderMap::new(),
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// # Errors
    /// Returns `ApiError::Serialize` if `value` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, ApiError> {
        Ok(self.body(RequestBody::json(value)?))
    }

    #[must_use]
    pub fn multipart(self, form: Multipart) -> Self {
        self.body(RequestBody::Multipart(form))
    }

    #[must_use]
    pub fn tenant(mut self, tenant: Option<&TenantHeaders>) -> Self {
        self.tenant = tenant.cloned();
        self
    }

    #[must_use]
    pub fn headers(mut self, overrides: HeaderMap) -> Self {
        self.headers = overrides;
        self
    }
}

/// Typed access to the clinic backend.
///
/// Cheap to clone; clones share the connection pool and the credential store.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: Arc<str>,
    credentials: Arc<dyn CredentialStore>,
    download_dir: PathBuf,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("download_dir", &self.download_dir)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client whose token lives in a [`FileCredentialStore`]
    ///
    /// # Errors
    /// Returns `ApiError::Config` for an invalid base URL or a missing
    /// credential directory, `ApiError::Transport` if the HTTP client cannot
    /// be built.
    pub fn new(config: &ApiClientConfig) -> Result<Self, ApiError> {
        let store = FileCredentialStore::new(config.resolved_credentials_dir()?);
        Self::with_credentials(config, Arc::new(store))
    }

    /// Client using the given credential store
    ///
    /// # Errors
    /// Returns `ApiError::Config` for an invalid base URL, `ApiError::Transport`
    /// if the HTTP client cannot be built.
    pub fn with_credentials(
        config: &ApiClientConfig,
        credentials: Arc<dyn CredentialStore>,
    ) -> Result<Self, ApiError> {
        let base_url = config.normalized_base_url()?;
        let transport = TransportSecurity::for_url(&base_url);
        if transport == TransportSecurity::AllowInsecureHttp {
            tracing::warn!(base_url = %base_url, "backend uses plain HTTP; traffic is not encrypted");
        }

        let http = HttpClientBuilder::new()
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .max_body_size(config.max_body_size)
            .tls_roots(config.tls_roots.into())
            .transport(transport)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            credentials,
            download_dir: config.resolved_download_dir(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    #[must_use]
    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Absolute `http(s)://` paths are used unchanged; anything else is
    /// appended to the base URL.
    #[must_use]
    pub fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_owned()
        } else if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    async fn execute(&self, req: RequestDescriptor) -> Result<HttpResponse, ApiError> {
        let token = self.credentials.get_stored_token();
        let headers = build_headers(
            req.tenant.as_ref(),
            token.as_deref(),
            req.body.encoding(),
            &req.headers,
        )?;

        let url = self.resolve_url(&req.path);
        let builder = self.http.request(req.method.clone(), &url).headers(headers);
        let builder = match req.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value)?,
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let response = builder.send().await?;
        tracing::debug!(
            method = %req.method,
            path = %req.path,
            status = response.status().as_u16(),
            "api call finished"
        );
        Ok(response)
    }

    /// Execute `req` and decode the JSON answer into `T`.
    ///
    /// A 204, or a 2xx with an empty body, decodes `T` from JSON `null`, so
    /// `()` and `Option<_>` are the natural result types for such endpoints.
    ///
    /// # Errors
    /// - `ApiError::Status` for non-2xx, with the body's `message`/`error` or the status text
    /// - `ApiError::Decode` when a 2xx body is not a `T`
    /// - `ApiError::Transport` for connection, TLS, timeout and URL failures
    pub async fn api<T: DeserializeOwned>(&self, req: RequestDescriptor) -> Result<T, ApiError> {
        match self.success_body(req).await? {
            Some(body) => serde_json::from_slice(&body).map_err(ApiError::Decode),
            None => decode_absent(),
        }
    }

    /// Execute `req` and return the answer as text.
    ///
    /// A JSON string body is unquoted; any other body is returned as sent.
    /// An absent body yields an empty string.
    ///
    /// # Errors
    /// Same as [`ApiClient::api`], except that decoding never fails.
    pub async fn api_text(&self, req: RequestDescriptor) -> Result<String, ApiError> {
        Ok(match self.success_body(req).await? {
            Some(body) => serde_json::from_slice::<String>(&body)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned()),
            None => String::new(),
        })
    }

    /// Execute `req` for its side effect; any 2xx body is read and discarded.
    ///
    /// # Errors
    /// Same as [`ApiClient::api`], except that decoding never fails.
    pub async fn ack(&self, req: RequestDescriptor) -> Result<(), ApiError> {
        self.success_body(req).await.map(|_| ())
    }

    async fn success_body(&self, req: RequestDescriptor) -> Result<Option<Bytes>, ApiError> {
        let response = self.execute(req).await?;
        let status = response.status();

        if !status.is_success() {
            let message = failure_message(response).await;
            tracing::debug!(status = status.as_u16(), message = %message, "api call rejected");
            return Err(ApiError::Status { status, message });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(body))
    }

    /// # Errors
    /// See [`ApiClient::api`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<T, ApiError> {
        self.api(RequestDescriptor::get(path).tenant(tenant)).await
    }

    /// POST with a JSON body; any serializable value works, bare strings included.
    ///
    /// # Errors
    /// See [`ApiClient::api`]; `ApiError::Serialize` if `body` is not JSON-representable.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        tenant: Option<&TenantHeaders>,
    ) -> Result<T, ApiError> {
        self.api(RequestDescriptor::post(path).json(body)?.tenant(tenant))
            .await
    }

    /// POST without a body
    ///
    /// # Errors
    /// See [`ApiClient::api`].
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<T, ApiError> {
        self.api(RequestDescriptor::post(path).tenant(tenant)).await
    }

    /// POST a multipart form unchanged
    ///
    /// # Errors
    /// See [`ApiClient::api`].
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Multipart,
        tenant: Option<&TenantHeaders>,
    ) -> Result<T, ApiError> {
        self.api(RequestDescriptor::post(path).multipart(form).tenant(tenant))
            .await
    }

    /// # Errors
    /// See [`ApiClient::post`].
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        tenant: Option<&TenantHeaders>,
    ) -> Result<T, ApiError> {
        self.api(RequestDescriptor::put(path).json(body)?.tenant(tenant))
            .await
    }

    /// # Errors
    /// See [`ApiClient::post`].
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        tenant: Option<&TenantHeaders>,
    ) -> Result<T, ApiError> {
        self.api(RequestDescriptor::patch(path).json(body)?.tenant(tenant))
            .await
    }

    /// PATCH without a body
    ///
    /// # Errors
    /// See [`ApiClient::api`].
    pub async fn patch_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<T, ApiError> {
        self.api(RequestDescriptor::patch(path).tenant(tenant)).await
    }

    /// # Errors
    /// See [`ApiClient::api`].
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<T, ApiError> {
        self.api(RequestDescriptor::delete(path).tenant(tenant)).await
    }
}

fn decode_absent<T: DeserializeOwned>() -> Result<T, ApiError> {
    T::deserialize(serde_json::Value::Null).map_err(ApiError::Decode)
}

/// Message for a rejected call; an unreadable error body falls back to the status text
async fn failure_message(response: HttpResponse) -> String {
    let status = response.status();
    match response.bytes().await {
        Ok(body) => error_message(status, &body),
        Err(e) => {
            tracing::debug!(status = status.as_u16(), error = %e, "error body unreadable");
            status_text(status)
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::credentials::MemoryCredentialStore;
    use crate::headers::header_overrides;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> ApiClient {
        let config = ApiClientConfig::with_base_url(server.url("/api"));
        ApiClient::with_credentials(&config, Arc::new(MemoryCredentialStore::new())).unwrap()
    }

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[tokio::test]
    async fn test_get_decodes_json_with_base_prefix() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/tenants/t1")
                .header("accept", "application/json");
            then.status(200).json_body(json!({"id": "t1"}));
        });

        let item: Item = client_for(&server).get("/tenants/t1", None).await.unwrap();
        mock.assert();
        assert_eq!(item, Item { id: "t1".to_owned() });
    }

    #[tokio::test]
    async fn test_no_content_yields_unit_and_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/portal/profile/family/r1");
            then.status(204);
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/portal/notifications/read-all");
            then.status(204).body("not json at all");
        });

        let api = client_for(&server);
        api.delete::<()>("/portal/profile/family/r1", None)
            .await
            .unwrap();

        let nothing: Option<Item> = api
            .post("/portal/notifications/read-all", &json!({}), None)
            .await
            .unwrap();
        assert_eq!(nothing, None);
    }

    #[tokio::test]
    async fn test_no_content_into_struct_is_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/x");
            then.status(204);
        });
        let err = client_for(&server)
            .get::<Item>("/x", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_empty_ok_body_treated_as_absent() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/portal/profile/change-password");
            then.status(200);
        });
        client_for(&server)
            .post::<(), _>(
                "/portal/profile/change-password",
                &json!({"oldPassword": "a", "newPassword": "b"}),
                None,
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_error_message_from_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/billing/invoices/nope");
            then.status(404)
                .json_body(json!({"message": "Invoice not found"}));
        });

        let err = client_for(&server)
            .get::<Item>("/billing/invoices/nope", None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invoice not found");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_unparseable_error_body_uses_status_text() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/missing");
            then.status(404).body("<html>Not here</html>");
        });

        let err = client_for(&server)
            .get::<Item>("/missing", None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Not Found");
    }

    #[tokio::test]
    async fn test_error_field_fallback() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401).json_body(json!({"error": "Bad credentials"}));
        });

        let err = client_for(&server)
            .post::<Item, _>("/auth/login", &json!({}), None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Bad credentials");
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_bare_string_body_is_json_encoded() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/portal/ai/pre-triage")
                .header("content-type", "application/json")
                .body("\"headache and fever\"");
            then.status(200).json_body(json!({"acuity": "3"}));
        });

        let value: serde_json::Value = client_for(&server)
            .post("/portal/ai/pre-triage", "headache and fever", None)
            .await
            .unwrap();
        mock.assert();
        assert_eq!(value["acuity"], "3");
    }

    #[tokio::test]
    async fn test_multipart_passthrough() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/portal/profile/avatar")
                .header("content-type", "multipart/form-data; boundary=AVATAR")
                .header("accept", "application/json")
                .body_includes("name=\"file\"; filename=\"me.png\"");
            then.status(200).json_body(json!({"id": "p1"}));
        });

        let form = Multipart::with_boundary("AVATAR").file(
            "file",
            "me.png",
            "image/png",
            Bytes::from_static(b"PNG"),
        );
        let item: Item = client_for(&server)
            .post_multipart("/portal/profile/avatar", form, None)
            .await
            .unwrap();
        mock.assert();
        assert_eq!(item.id, "p1");
    }

    #[tokio::test]
    async fn test_absolute_url_bypasses_base() {
        let base = MockServer::start();
        let other = MockServer::start();
        let base_mock = base.mock(|when, then| {
            when.method(GET).path("/public/status");
            then.status(500);
        });
        let other_mock = other.mock(|when, then| {
            when.method(GET).path("/public/status");
            then.status(200).json_body(json!({"id": "ext"}));
        });

        let item: Item = client_for(&base)
            .get(&other.url("/public/status"), None)
            .await
            .unwrap();
        other_mock.assert();
        base_mock.assert_calls(0);
        assert_eq!(item.id, "ext");
    }

    #[tokio::test]
    async fn test_tenant_headers_and_overrides() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/portal/profile")
                .header("x-tenant-id", "T1")
                .header("x-branch-id", "B2")
                .header("authorization", "Bearer tok");
            then.status(200).json_body(json!({"id": "p1"}));
        });

        let config = ApiClientConfig::with_base_url(server.url("/api"));
        let api = ApiClient::with_credentials(
            &config,
            Arc::new(MemoryCredentialStore::with_token("tok")),
        )
        .unwrap();
        let tenant = TenantHeaders::new("T1").with_branch("B1");
        let req = RequestDescriptor::get("/portal/profile")
            .tenant(Some(&tenant))
            .headers(header_overrides([("x-branch-id", "B2")]).unwrap());

        let item: Item = api.api(req).await.unwrap();
        mock.assert();
        assert_eq!(item.id, "p1");
    }

    #[tokio::test]
    async fn test_text_accepts_json_string_and_plain_text() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/care-plan/quoted");
            then.status(200).body("\"Follow up in 2 weeks\"");
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/care-plan/plain");
            then.status(200)
                .header("content-type", "text/plain")
                .body("Follow up in 2 weeks");
        });

        let api = client_for(&server);
        for path in ["/care-plan/quoted", "/care-plan/plain"] {
            let text = api.api_text(RequestDescriptor::get(path)).await.unwrap();
            assert_eq!(text, "Follow up in 2 weeks");
        }
    }

    #[tokio::test]
    async fn test_decode_error_on_wrong_shape() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/x");
            then.status(200).json_body(json!([1, 2, 3]));
        });
        let err = client_for(&server)
            .get::<Item>("/x", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_ack_discards_any_success_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PATCH).path("/api/users/u1/password");
            then.status(200)
                .json_body(json!({"success": true, "data": null}));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/api/users/u1");
            then.status(403).json_body(json!({"message": "Forbidden for role"}));
        });
        let api = client_for(&server);

        let req = RequestDescriptor::patch("/users/u1/password")
            .json(&json!({"newPassword": "x"}))
            .unwrap();
        api.ack(req).await.unwrap();

        let err = api
            .ack(RequestDescriptor::delete("/users/u1"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Forbidden for role");
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let config = ApiClientConfig::with_base_url("http://127.0.0.1:1/api");
        let api =
            ApiClient::with_credentials(&config, Arc::new(MemoryCredentialStore::new())).unwrap();
        let err = api.get::<Item>("/tenants", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_error_body_falls_back_to_status_text() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/billing/invoices/missing");
            then.status(404)
                .json_body(json!({"message": "Invoice not found in this branch"}));
        });
        let config = ApiClientConfig {
            max_body_size: 8,
            ..ApiClientConfig::with_base_url(server.url("/api"))
        };
        let api =
            ApiClient::with_credentials(&config, Arc::new(MemoryCredentialStore::new())).unwrap();

        let err = api
            .get::<Item>("/billing/invoices/missing", None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Not Found");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_corrupt_stored_token_does_not_block_login() {
        let server = MockServer::start();
        let login = server.mock(|when, then| {
            when.method(POST)
                .path("/api/auth/login")
                .header_missing("authorization");
            then.status(200).json_body(json!({
                "token": "fresh",
                "expiresAt": "2030-01-01T00:00:00Z",
                "user": {
                    "id": "u1",
                    "email": "doc@clinic.vn",
                    "fullNameVi": "Doc",
                    "roles": ["DOCTOR"],
                    "tenantId": "T1"
                }
            }));
        });
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(crate::credentials::TOKEN_STORAGE_KEY), "tok\n").unwrap();
        let config = ApiClientConfig::with_base_url(server.url("/api"));
        let api = ApiClient::with_credentials(
            &config,
            Arc::new(crate::credentials::FileCredentialStore::new(dir.path())),
        )
        .unwrap();

        let request = crate::models::LoginRequest {
            email: "doc@clinic.vn".to_owned(),
            password: "secret".to_owned(),
            tenant_id: "T1".to_owned(),
            branch_id: None,
        };
        api.auth().login(&request).await.unwrap();

        login.assert();
        assert_eq!(
            api.credentials().get_stored_token().as_deref(),
            Some("fresh")
        );
    }

    #[test]
    fn test_resolve_url() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let _guard = runtime.enter();
        let config = ApiClientConfig::with_base_url("https://clinic.example.com/api/");
        let api =
            ApiClient::with_credentials(&config, Arc::new(MemoryCredentialStore::new())).unwrap();

        assert_eq!(
            api.resolve_url("/tenants"),
            "https://clinic.example.com/api/tenants"
        );
        assert_eq!(
            api.resolve_url("tenants"),
            "https://clinic.example.com/api/tenants"
        );
        assert_eq!(
            api.resolve_url("https://cdn.example.com/x.pdf"),
            "https://cdn.example.com/x.pdf"
        );
    }
}
