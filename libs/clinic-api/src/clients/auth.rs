use crate::error::ApiError;
use crate::models::{AuthUserDto, LoginRequest, LoginResponse};
use crate::transport::ApiClient;

/// Sign-in and session identity
#[derive(Debug, Clone, Copy)]
pub struct AuthClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient { api: self }
    }
}

impl AuthClient<'_> {
    /// Sign in and keep the returned token for later calls.
    ///
    /// # Errors
    /// Any transport error; the stored token is left untouched on failure.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.api.post("/auth/login", request, None).await?;
        if response.token.is_empty() {
            tracing::warn!("login succeeded without a token; keeping previous session state");
        } else {
            self.api
                .credentials()
                .set_stored_token(Some(&response.token));
            tracing::info!(user_id = %response.user.id, "signed in");
        }
        Ok(response)
    }

    /// # Errors
    /// Any transport error; 401 when no valid token is stored.
    pub async fn me(&self) -> Result<AuthUserDto, ApiError> {
        self.api.get("/auth/me", None).await
    }

    /// Forget the stored token. Purely local; the server is not contacted.
    pub fn logout(&self) {
        self.api.credentials().clear();
        tracing::info!("signed out");
    }

    /// Whether a token is currently stored
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.api.credentials().get_stored_token().is_some()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::clients::test_support::client_for;
    use crate::config::ApiClientConfig;
    use crate::credentials::MemoryCredentialStore;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::Arc;

    fn login_body() -> serde_json::Value {
        json!({
            "token": "xyz",
            "expiresAt": "2030-01-01T00:00:00Z",
            "user": {
                "id": "u1",
                "email": "doc@clinic.vn",
                "fullNameVi": "Nguyen Van A",
                "roles": ["DOCTOR"],
                "tenantId": "T1",
                "branchId": "B1"
            }
        })
    }

    fn request() -> LoginRequest {
        LoginRequest {
            email: "doc@clinic.vn".to_owned(),
            password: "secret".to_owned(),
            tenant_id: "T1".to_owned(),
            branch_id: Some("B1".to_owned()),
        }
    }

    #[tokio::test]
    async fn test_login_stores_token_and_logout_clears_it() {
        let server = MockServer::start();
        let login = server.mock(|when, then| {
            when.method(POST)
                .path("/api/auth/login")
                .json_body(json!({
                    "email": "doc@clinic.vn",
                    "password": "secret",
                    "tenantId": "T1",
                    "branchId": "B1"
                }));
            then.status(200).json_body(login_body());
        });
        let me = server.mock(|when, then| {
            when.method(GET)
                .path("/api/auth/me")
                .header("authorization", "Bearer xyz");
            then.status(200).json_body(login_body()["user"].clone());
        });
        let anonymous = server.mock(|when, then| {
            when.method(GET).path("/api/auth/me").header_missing("authorization");
            then.status(401).json_body(json!({"message": "Unauthorized"}));
        });

        let config = ApiClientConfig::with_base_url(server.url("/api"));
        let api =
            ApiClient::with_credentials(&config, Arc::new(MemoryCredentialStore::new())).unwrap();
        assert!(!api.auth().is_signed_in());

        let response = api.auth().login(&request()).await.unwrap();
        login.assert();
        assert_eq!(response.user.tenant_id, "T1");
        assert_eq!(
            api.credentials().get_stored_token().as_deref(),
            Some("xyz")
        );

        let user = api.auth().me().await.unwrap();
        me.assert();
        assert_eq!(user.id, "u1");

        api.auth().logout();
        assert!(api.credentials().get_stored_token().is_none());

        let err = api.auth().me().await.unwrap_err();
        anonymous.assert();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Unauthorized");
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_token() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401)
                .json_body(json!({"message": "Invalid email or password"}));
        });

        let api = client_for(&server);
        let err = api.auth().login(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
        assert_eq!(
            api.credentials().get_stored_token().as_deref(),
            Some("tok")
        );
    }
}
