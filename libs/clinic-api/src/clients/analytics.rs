use crate::error::ApiError;
use crate::models::AnalyticsSummary;
use crate::query::QueryParams;
use crate::tenant::TenantHeaders;
use crate::transport::ApiClient;

/// Triage volume dashboards
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn analytics(&self) -> AnalyticsClient<'_> {
        AnalyticsClient { api: self }
    }
}

impl AnalyticsClient<'_> {
    /// Today's figures, for one branch or the whole tenant
    ///
    /// # Errors
    /// Any transport error.
    pub async fn today_summary(
        &self,
        branch_id: Option<&str>,
        tenant: Option<&TenantHeaders>,
    ) -> Result<AnalyticsSummary, ApiError> {
        self.summary("today", branch_id, tenant).await
    }

    /// The last seven days
    ///
    /// # Errors
    /// Any transport error.
    pub async fn week_summary(
        &self,
        branch_id: Option<&str>,
        tenant: Option<&TenantHeaders>,
    ) -> Result<AnalyticsSummary, ApiError> {
        self.summary("week", branch_id, tenant).await
    }

    async fn summary(
        &self,
        period: &str,
        branch_id: Option<&str>,
        tenant: Option<&TenantHeaders>,
    ) -> Result<AnalyticsSummary, ApiError> {
        let path = QueryParams::new()
            .push_opt("branchId", branch_id)
            .append_to(&format!("/admin/analytics/summary/{period}"));
        self.api.get(&path, tenant).await
    }
}
