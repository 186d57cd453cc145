use serde::{Deserialize, Serialize};

/// Header carrying the tenant scope
pub const TENANT_ID_HEADER: &str = "x-tenant-id";
/// Header carrying the branch scope inside a tenant
pub const BRANCH_ID_HEADER: &str = "x-branch-id";

/// Multi-tenant scope of a request.
///
/// Tenant-scoped endpoints expect a non-empty `tenant_id`; with an empty one
/// no scope headers are sent and the backend decides how to treat the call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantHeaders {
    pub tenant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
}

impl TenantHeaders {
    #[must_use]
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            branch_id: None,
        }
    }

    #[must_use]
    pub fn with_branch(mut self, branch_id: impl Into<String>) -> Self {
        self.branch_id = Some(branch_id.into());
        self
    }

    /// Scope headers to send, in order; empty when no tenant is set
    #[must_use]
    pub fn header_pairs(&self) -> Vec<(&'static str, &str)> {
        if self.tenant_id.is_empty() {
            return Vec::new();
        }
        let mut pairs = vec![(TENANT_ID_HEADER, self.tenant_id.as_str())];
        if let Some(branch) = self.branch_id.as_deref().filter(|b| !b.is_empty()) {
            pairs.push((BRANCH_ID_HEADER, branch));
        }
        pairs
    }
}
