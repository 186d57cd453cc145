use clinic_http::{DEFAULT_MAX_BODY_SIZE, TlsRootConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default backend location: the `/api` prefix on a local server
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Directory name used under the platform data and download dirs
pub const APP_DIR_NAME: &str = "clinic-portal";

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid base_url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("no credentials_dir configured and no platform data directory available")]
    NoCredentialsDir,
}

/// Root certificates used for HTTPS backends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsRoots {
    #[default]
    Webpki,
    Native,
}

impl From<TlsRoots> for TlsRootConfig {
    fn from(roots: TlsRoots) -> Self {
        match roots {
            TlsRoots::Webpki => TlsRootConfig::WebPki,
            TlsRoots::Native => TlsRootConfig::Native,
        }
    }
}

/// Settings for [`ApiClient`](crate::ApiClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ApiClientConfig {
    /// Prefix for relative request paths, e.g. `https://clinic.example.com/api`
    pub base_url: String,

    /// Per-request timeout; unset means requests run until the transport settles them
    #[serde(with = "humantime_serde")]
    pub request_timeout: Option<Duration>,

    pub user_agent: String,

    /// Upper bound on response bodies, downloads included
    pub max_body_size: usize,

    /// Where the session token is kept; defaults to the platform data dir
    pub credentials_dir: Option<PathBuf>,

    /// Where downloaded documents are saved; defaults to the platform download dir
    pub download_dir: Option<PathBuf>,

    pub tls_roots: TlsRoots,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: None,
            user_agent: concat!("clinic-api/", env!("CARGO_PKG_VERSION")).to_owned(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            credentials_dir: None,
            download_dir: None,
            tls_roots: TlsRoots::default(),
        }
    }
}

impl ApiClientConfig {
    /// Configuration pointing at `base_url` with everything else defaulted
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Base URL without trailing slashes, checked for an http(s) scheme and host
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidBaseUrl` if the URL does not parse or is
    /// not an absolute http(s) URL.
    pub fn normalized_base_url(&self) -> Result<String, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let parsed = url::Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
        }
        if parsed.host_str().is_none() {
            return Err(invalid("missing host".to_owned()));
        }
        Ok(self.base_url.trim_end_matches('/').to_owned())
    }

    /// Credential directory, falling back to `<data dir>/clinic-portal`
    ///
    /// # Errors
    /// Returns `ConfigError::NoCredentialsDir` when nothing is configured and
    /// the platform has no data directory.
    pub fn resolved_credentials_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.credentials_dir {
            return Ok(dir.clone());
        }
        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(ConfigError::NoCredentialsDir)
    }

    /// Download directory, falling back to the platform download dir, then `.`
    #[must_use]
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.tls_roots, TlsRoots::Webpki);
    }

    #[test]
    fn test_deserialize_humantime_and_roots() {
        let config: ApiClientConfig = serde_json::from_str(
            r#"{"base_url":"https://clinic.example.com/api/","request_timeout":"15s","tls_roots":"native"}"#,
        )
        .unwrap();
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.tls_roots, TlsRoots::Native);
        assert_eq!(
            config.normalized_base_url().unwrap(),
            "https://clinic.example.com/api"
        );
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = serde_json::from_str::<ApiClientConfig>(r#"{"base_uri":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_base_urls() {
        for url in ["/api", "ftp://clinic.example.com", "not a url"] {
            let config = ApiClientConfig::with_base_url(url);
            assert!(
                matches!(
                    config.normalized_base_url(),
                    Err(ConfigError::InvalidBaseUrl { .. })
                ),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_explicit_dirs_win() {
        let config = ApiClientConfig {
            credentials_dir: Some(PathBuf::from("/tmp/creds")),
            download_dir: Some(PathBuf::from("/tmp/dl")),
            ..ApiClientConfig::default()
        };
        assert_eq!(
            config.resolved_credentials_dir().unwrap(),
            PathBuf::from("/tmp/creds")
        );
        assert_eq!(config.resolved_download_dir(), PathBuf::from("/tmp/dl"));
    }
}
