use crate::error::ApiError;
use crate::models::{MedicalServiceDto, MedicalServiceRequest};
use crate::query::{QueryParams, segment};
use crate::tenant::TenantHeaders;
use crate::transport::ApiClient;

/// Billable medical services catalogue
#[derive(Debug, Clone, Copy)]
pub struct MasterDataClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn master_data(&self) -> MasterDataClient<'_> {
        MasterDataClient { api: self }
    }
}

const SERVICES_PATH: &str = "/master-data/medical-services";

impl MasterDataClient<'_> {
    /// # Errors
    /// Any transport error.
    pub async fn medical_services(
        &self,
        only_active: bool,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<MedicalServiceDto>, ApiError> {
        let path = QueryParams::new()
            .push_flag("onlyActive", only_active)
            .append_to(SERVICES_PATH);
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn create_medical_service(
        &self,
        request: &MedicalServiceRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<MedicalServiceDto, ApiError> {
        self.api.post(SERVICES_PATH, request, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn update_medical_service(
        &self,
        id: &str,
        request: &MedicalServiceRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<MedicalServiceDto, ApiError> {
        self.api
            .put(&format!("{SERVICES_PATH}/{}", segment(id)), request, tenant)
            .await
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::clients::test_support::client_for;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_only_active_flag() {
        let server = MockServer::start();
        let all = server.mock(|when, then| {
            when.method(GET)
                .path("/api/master-data/medical-services")
                .query_param_missing("onlyActive");
            then.status(200).json_body(json!([]));
        });
        let active = server.mock(|when, then| {
            when.method(GET)
                .path("/api/master-data/medical-services")
                .query_param("onlyActive", "true");
            then.status(200).json_body(json!([{
                "id": "s1", "code": "KHAM", "nameVi": "Kham tong quat", "unitPrice": 150000.0
            }]));
        });

        let api = client_for(&server);
        assert!(api.master_data().medical_services(false, None).await.unwrap().is_empty());
        let services = api.master_data().medical_services(true, None).await.unwrap();
        all.assert();
        active.assert();
        assert_eq!(services[0].code, "KHAM");
    }

    #[tokio::test]
    async fn test_update_sends_partial_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/master-data/medical-services/s1")
                .json_body(json!({"isActive": false}));
            then.status(200).json_body(json!({
                "id": "s1", "code": "KHAM", "nameVi": "Kham tong quat", "isActive": false
            }));
        });

        let request = MedicalServiceRequest {
            is_active: Some(false),
            ..MedicalServiceRequest::default()
        };
        let updated = client_for(&server)
            .master_data()
            .update_medical_service("s1", &request, None)
            .await
            .unwrap();
        mock.assert();
        assert_eq!(updated.is_active, Some(false));
    }
}
