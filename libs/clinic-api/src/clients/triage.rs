use crate::error::ApiError;
use crate::models::{
    CreateTriageSessionRequest, PageRequest, PagedResponse, SuggestAcuityRequest,
    TriageComplaintDto, TriageSessionDto, TriageSuggestionDto, TriageVitalDto,
};
use crate::query::{QueryParams, segment};
use crate::tenant::TenantHeaders;
use crate::transport::ApiClient;

use super::with_page;

/// Triage sessions and AI acuity suggestions
#[derive(Debug, Clone, Copy)]
pub struct TriageClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn triage(&self) -> TriageClient<'_> {
        TriageClient { api: self }
    }
}

fn session_path(id: &str) -> String {
    format!("/triage/sessions/{}", segment(id))
}

impl TriageClient<'_> {
    /// Ask the backend for an acuity suggestion without creating a session
    ///
    /// # Errors
    /// Any transport error.
    pub async fn suggest(
        &self,
        request: &SuggestAcuityRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<TriageSuggestionDto, ApiError> {
        self.api.post("/triage/suggest", request, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn create_session(
        &self,
        request: &CreateTriageSessionRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<TriageSessionDto, ApiError> {
        self.api.post("/triage/sessions", request, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn session(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<TriageSessionDto, ApiError> {
        self.api.get(&session_path(id), tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn list_sessions(
        &self,
        branch_id: &str,
        page: PageRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PagedResponse<TriageSessionDto>, ApiError> {
        let path = with_page(QueryParams::new().push("branchId", branch_id), page)
            .append_to("/triage/sessions");
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn complaints(
        &self,
        session_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<TriageComplaintDto>, ApiError> {
        self.api
            .get(&format!("{}/complaints", session_path(session_id)), tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn vitals(
        &self,
        session_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<TriageVitalDto>, ApiError> {
        self.api
            .get(&format!("{}/vitals", session_path(session_id)), tenant)
            .await
    }
}
