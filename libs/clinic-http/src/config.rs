use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!("clinic-http/", env!("CARGO_PKG_VERSION"));

/// 16 MiB; report exports (PDF, xlsx) stay well below it
pub const DEFAULT_MAX_BODY_SIZE: usize = 16 * 1024 * 1024;

const DEFAULT_BUFFER_CAPACITY: usize = 1024;
const DEFAULT_POOL_IDLE: Duration = Duration::from_secs(90);
const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Which certificate roots HTTPS connections trust
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum TlsRootConfig {
    /// Bundled Mozilla roots
    #[default]
    WebPki,
    /// The operating system store, for clinics behind an inspecting proxy
    Native,
}

/// Whether plain `http://` URLs may be requested
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransportSecurity {
    #[default]
    TlsOnly,
    AllowInsecureHttp,
}

impl TransportSecurity {
    /// The mode a backend at `base_url` needs: plain HTTP only for `http://`
    #[must_use]
    pub fn for_url(base_url: &str) -> Self {
        let scheme = base_url.split_once("://").map(|(scheme, _)| scheme);
        if scheme.is_some_and(|s| s.eq_ignore_ascii_case("http")) {
            Self::AllowInsecureHttp
        } else {
            Self::TlsOnly
        }
    }
}

/// Settings consumed by [`HttpClientBuilder`](crate::HttpClientBuilder)
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// `None` leaves requests unbounded in time
    pub request_timeout: Option<Duration>,
    pub max_body_size: usize,
    pub user_agent: String,
    pub transport: TransportSecurity,
    pub tls_roots: TlsRootConfig,

    /// Requests that may queue for the shared worker before `Overloaded`
    pub buffer_capacity: usize,
    pub pool_idle_timeout: Option<Duration>,
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: None,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            transport: TransportSecurity::default(),
            tls_roots: TlsRootConfig::default(),
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            pool_idle_timeout: Some(DEFAULT_POOL_IDLE),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HttpClientConfig::default();
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.transport, TransportSecurity::TlsOnly);
        assert_eq!(config.tls_roots, TlsRootConfig::WebPki);
        assert_eq!(config.max_body_size, DEFAULT_MAX_BODY_SIZE);
        assert!(config.user_agent.starts_with("clinic-http/"));
    }

    #[test]
    fn test_transport_for_url() {
        assert_eq!(
            TransportSecurity::for_url("http://localhost:8080/api"),
            TransportSecurity::AllowInsecureHttp
        );
        assert_eq!(
            TransportSecurity::for_url("HTTP://clinic.local/api"),
            TransportSecurity::AllowInsecureHttp
        );
        assert_eq!(
            TransportSecurity::for_url("https://clinic.example.com/api"),
            TransportSecurity::TlsOnly
        );
        assert_eq!(TransportSecurity::for_url("clinic"), TransportSecurity::TlsOnly);
    }
}
