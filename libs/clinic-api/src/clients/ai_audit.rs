use crate::error::ApiError;
use crate::models::{AiTriageAuditDto, PageRequest, PagedResponse};
use crate::query::QueryParams;
use crate::tenant::TenantHeaders;
use crate::transport::ApiClient;

use super::with_page;

/// AI suggestion versus final triage decision
#[derive(Debug, Clone, Copy)]
pub struct AiAuditClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn ai_audit(&self) -> AiAuditClient<'_> {
        AiAuditClient { api: self }
    }
}

impl AiAuditClient<'_> {
    /// # Errors
    /// Any transport error.
    pub async fn list(
        &self,
        branch_id: &str,
        page: PageRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PagedResponse<AiTriageAuditDto>, ApiError> {
        let path = with_page(QueryParams::new().push("branchId", branch_id), page)
            .append_to("/ai-audit");
        self.api.get(&path, tenant).await
    }

    /// Raw AI call log (prompts, providers, costs); entries are passed through untyped
    ///
    /// # Errors
    /// Any transport error.
    pub async fn admin_list(
        &self,
        branch_id: &str,
        page: PageRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PagedResponse<serde_json::Value>, ApiError> {
        let path = with_page(QueryParams::new().push("branchId", branch_id), page)
            .append_to("/admin/ai-audit");
        self.api.get(&path, tenant).await
    }
}
