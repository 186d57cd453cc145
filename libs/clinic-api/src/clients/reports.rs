use std::path::PathBuf;

use crate::error::ApiError;
use crate::models::{
    AiEffectivenessDto, AiOperationalInsightDto, DailyVolumeDto, ReportFilter, RevenueReportDto,
    WaitTimeSummaryDto,
};
use crate::query::QueryParams;
use crate::tenant::TenantHeaders;
use crate::transport::ApiClient;

use super::report_query;

/// Operational reports and their spreadsheet / PDF exports.
///
/// The `admin_*` methods read the same figures through the administrator
/// routes, where the server fills in a 30 day window when dates are absent.
#[derive(Debug, Clone, Copy)]
pub struct ReportsClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn reports(&self) -> ReportsClient<'_> {
        ReportsClient { api: self }
    }
}

const ADMIN_REPORTS: &str = "/admin/reports";

impl ReportsClient<'_> {
    /// # Errors
    /// Any transport error.
    pub async fn wait_time(
        &self,
        filter: &ReportFilter,
        tenant: Option<&TenantHeaders>,
    ) -> Result<WaitTimeSummaryDto, ApiError> {
        let path = report_query(filter).append_to("/reports/wait-time");
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn daily_volume(
        &self,
        filter: &ReportFilter,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<DailyVolumeDto>, ApiError> {
        let path = report_query(filter).append_to("/reports/daily-volume");
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn ai_effectiveness(
        &self,
        filter: &ReportFilter,
        tenant: Option<&TenantHeaders>,
    ) -> Result<AiEffectivenessDto, ApiError> {
        let path = report_query(filter).append_to("/reports/ai-effectiveness");
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn admin_wait_time(
        &self,
        filter: &ReportFilter,
        tenant: Option<&TenantHeaders>,
    ) -> Result<WaitTimeSummaryDto, ApiError> {
        let path = report_query(filter).append_to(&format!("{ADMIN_REPORTS}/wait-time"));
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn admin_daily_volume(
        &self,
        filter: &ReportFilter,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<DailyVolumeDto>, ApiError> {
        let path = report_query(filter).append_to(&format!("{ADMIN_REPORTS}/daily-volume"));
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn admin_ai_effectiveness(
        &self,
        filter: &ReportFilter,
        tenant: Option<&TenantHeaders>,
    ) -> Result<AiEffectivenessDto, ApiError> {
        let path = report_query(filter).append_to(&format!("{ADMIN_REPORTS}/ai-effectiveness"));
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn admin_revenue(
        &self,
        filter: &ReportFilter,
        tenant: Option<&TenantHeaders>,
    ) -> Result<RevenueReportDto, ApiError> {
        let path = report_query(filter).append_to(&format!("{ADMIN_REPORTS}/revenue"));
        self.api.get(&path, tenant).await
    }

    /// Save the daily volume spreadsheet as `daily-volume.xlsx`
    ///
    /// # Errors
    /// `ApiError::DownloadFailed` for non-2xx, `ApiError::Io` if it cannot be saved.
    pub async fn export_daily_volume_excel(
        &self,
        filter: &ReportFilter,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PathBuf, ApiError> {
        self.export(filter, "daily-volume/excel", "daily-volume.xlsx", tenant)
            .await
    }

    /// Save the wait time spreadsheet as `wait-time.xlsx`
    ///
    /// # Errors
    /// `ApiError::DownloadFailed` for non-2xx, `ApiError::Io` if it cannot be saved.
    pub async fn export_wait_time_excel(
        &self,
        filter: &ReportFilter,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PathBuf, ApiError> {
        self.export(filter, "wait-time/excel", "wait-time.xlsx", tenant)
            .await
    }

    /// Save the AI effectiveness report as `ai-effectiveness.pdf`
    ///
    /// # Errors
    /// `ApiError::DownloadFailed` for non-2xx, `ApiError::Io` if it cannot be saved.
    pub async fn export_ai_effectiveness_pdf(
        &self,
        filter: &ReportFilter,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PathBuf, ApiError> {
        self.export(filter, "ai-effectiveness/pdf", "ai-effectiveness.pdf", tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn operational_heatmap(
        &self,
        branch_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<serde_json::Value, ApiError> {
        let path = QueryParams::new()
            .push("branchId", branch_id)
            .append_to(&format!("{ADMIN_REPORTS}/operational-heatmap"));
        self.api.get(&path, tenant).await
    }

    /// Triage cases where staff overrode the AI suggestion
    ///
    /// # Errors
    /// Any transport error.
    pub async fn ai_audit_logs(
        &self,
        filter: &ReportFilter,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<serde_json::Value>, ApiError> {
        let path = report_query(filter).append_to(&format!("{ADMIN_REPORTS}/ai-audit-logs"));
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn ai_operational_insights(
        &self,
        branch_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<AiOperationalInsightDto, ApiError> {
        let path = QueryParams::new()
            .push("branchId", branch_id)
            .append_to(&format!("{ADMIN_REPORTS}/ai-operational-insights"));
        self.api.get(&path, tenant).await
    }

    async fn export(
        &self,
        filter: &ReportFilter,
        route: &str,
        filename: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PathBuf, ApiError> {
        let path = report_query(filter).append_to(&format!("{ADMIN_REPORTS}/{route}"));
        self.api.download(&path, tenant, filename).await
    }
}
