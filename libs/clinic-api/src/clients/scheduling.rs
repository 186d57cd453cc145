use chrono::NaiveDate;

use crate::error::ApiError;
use crate::models::{
    AppointmentDto, CreateAppointmentRequest, PageRequest, PagedResponse, SlotTemplateDto,
};
use crate::query::{QueryParams, segment};
use crate::tenant::TenantHeaders;
use crate::transport::ApiClient;

use super::with_page;

/// Staff-side appointment book
#[derive(Debug, Clone, Copy)]
pub struct SchedulingClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn scheduling(&self) -> SchedulingClient<'_> {
        SchedulingClient { api: self }
    }
}

impl SchedulingClient<'_> {
    /// Appointments of a branch, optionally for one day
    ///
    /// # Errors
    /// Any transport error.
    pub async fn list(
        &self,
        branch_id: &str,
        date: Option<NaiveDate>,
        page: PageRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PagedResponse<AppointmentDto>, ApiError> {
        let params = QueryParams::new()
            .push("branchId", branch_id)
            .push_opt("date", date);
        let path = with_page(params, page).append_to("/appointments");
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn get(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<AppointmentDto, ApiError> {
        self.api
            .get(&format!("/appointments/{}", segment(id)), tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn create(
        &self,
        request: &CreateAppointmentRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<AppointmentDto, ApiError> {
        self.api.post("/appointments", request, tenant).await
    }

    /// Move an appointment to `CONFIRMED`, `CHECKED_IN`, `CANCELLED`, ...
    ///
    /// # Errors
    /// Any transport error.
    pub async fn update_status(
        &self,
        id: &str,
        status: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<AppointmentDto, ApiError> {
        let path = QueryParams::new()
            .push("status", status)
            .append_to(&format!("/appointments/{}/status", segment(id)));
        self.api.patch_empty(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn slot_templates(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<SlotTemplateDto>, ApiError> {
        self.api.get("/appointments/slots", tenant).await
    }
}
