use std::path::Path;

use anyhow::Context;
use clinic_api::{ApiClientConfig, TenantHeaders};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Environment prefix; `CLINIC__API__BASE_URL` sets `api.base_url`
pub const ENV_PREFIX: &str = "CLINIC__";

/// Effective CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CliConfig {
    pub api: ApiClientConfig,

    /// Tenant scope sent with every call
    pub tenant_id: Option<String>,
    pub branch_id: Option<String>,
}

impl CliConfig {
    /// Layered load: defaults, then the YAML file (if any), then `CLINIC__*` env vars.
    ///
    /// # Errors
    /// Fails when the file is missing, a value has the wrong type, or an
    /// unknown key is present.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().context("invalid configuration")
    }

    /// Command-line flags win over everything loaded
    pub fn apply_overrides(
        &mut self,
        base_url: Option<&str>,
        tenant: Option<&str>,
        branch: Option<&str>,
    ) {
        if let Some(url) = base_url {
            url.clone_into(&mut self.api.base_url);
        }
        if let Some(tenant) = tenant {
            self.tenant_id = Some(tenant.to_owned());
        }
        if let Some(branch) = branch {
            self.branch_id = Some(branch.to_owned());
        }
    }

    /// Tenant scope for requests; `None` without a non-empty tenant id
    #[must_use]
    pub fn tenant_headers(&self) -> Option<TenantHeaders> {
        let tenant_id = self.tenant_id.as_deref().filter(|id| !id.is_empty())?;
        let headers = TenantHeaders::new(tenant_id);
        Some(match self.branch_id.as_deref().filter(|id| !id.is_empty()) {
            Some(branch) => headers.with_branch(branch),
            None => headers,
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config.api.base_url, clinic_api::DEFAULT_BASE_URL);
        assert_eq!(config.tenant_headers(), None);
    }

    #[test]
    fn test_yaml_layer() {
        let file = yaml_file(
            "api:\n  base_url: https://clinic.example.com/api\n  request_timeout: 20s\ntenant_id: T1\nbranch_id: B1\n",
        );
        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "https://clinic.example.com/api");
        assert_eq!(config.api.request_timeout, Some(Duration::from_secs(20)));
        assert_eq!(
            config.tenant_headers(),
            Some(TenantHeaders::new("T1").with_branch("B1"))
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = yaml_file("api:\n  base_uri: https://x\n");
        assert!(CliConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file_rejected() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/clinic.yaml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_flag_overrides() {
        let mut config = CliConfig {
            tenant_id: Some("T1".to_owned()),
            branch_id: Some("B1".to_owned()),
            ..CliConfig::default()
        };
        config.apply_overrides(Some("https://other.example.com/api"), Some("T2"), None);
        assert_eq!(config.api.base_url, "https://other.example.com/api");
        assert_eq!(
            config.tenant_headers(),
            Some(TenantHeaders::new("T2").with_branch("B1"))
        );
    }

    #[test]
    fn test_empty_tenant_means_no_scope() {
        let config = CliConfig {
            tenant_id: Some(String::new()),
            ..CliConfig::default()
        };
        assert_eq!(config.tenant_headers(), None);
    }
}
