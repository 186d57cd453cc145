use crate::error::ApiError;
use crate::models::{
    CreatePatientRequest, PageRequest, PagedResponse, PatientDto, PatientInsuranceDto,
    RegisterDeviceTokenRequest,
};
use crate::query::{QueryParams, segment};
use crate::tenant::TenantHeaders;
use crate::transport::{ApiClient, RequestDescriptor};

use super::with_page;

/// Staff-side patient registry
#[derive(Debug, Clone, Copy)]
pub struct PatientsClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn patients(&self) -> PatientsClient<'_> {
        PatientsClient { api: self }
    }
}

fn patient_path(id: &str) -> String {
    format!("/patients/{}", segment(id))
}

impl PatientsClient<'_> {
    /// # Errors
    /// Any transport error.
    pub async fn list(
        &self,
        page: PageRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PagedResponse<PatientDto>, ApiError> {
        let path = with_page(QueryParams::new(), page).append_to("/patients");
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn get(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PatientDto, ApiError> {
        self.api.get(&patient_path(id), tenant).await
    }

    /// Look up by national id card number; `None` when the server answers 204
    ///
    /// # Errors
    /// Any transport error.
    pub async fn find_by_cccd(
        &self,
        cccd: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Option<PatientDto>, ApiError> {
        let path = QueryParams::new()
            .push("cccd", cccd)
            .append_to("/patients/by-cccd");
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn find_by_phone(
        &self,
        phone: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Option<PatientDto>, ApiError> {
        let path = QueryParams::new()
            .push("phone", phone)
            .append_to("/patients/by-phone");
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn create(
        &self,
        request: &CreatePatientRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PatientDto, ApiError> {
        self.api.post("/patients", request, tenant).await
    }

    /// Replace the patient record
    ///
    /// # Errors
    /// Any transport error.
    pub async fn update(
        &self,
        id: &str,
        request: &CreatePatientRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PatientDto, ApiError> {
        self.api.put(&patient_path(id), request, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn insurances(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<PatientInsuranceDto>, ApiError> {
        self.api
            .get(&format!("{}/insurances", patient_path(id)), tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn register_device_token(
        &self,
        id: &str,
        request: &RegisterDeviceTokenRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<(), ApiError> {
        let req = RequestDescriptor::post(format!("{}/device-tokens", patient_path(id)))
            .json(request)?
            .tenant(tenant);
        self.api.ack(req).await
    }
}
