use crate::error::ApiError;
use crate::models::{CreateBranchRequest, CreateTenantRequest, TenantBranchDto, TenantDto};
use crate::query::segment;
use crate::transport::ApiClient;

/// Tenant and branch directory. These endpoints are not tenant-scoped.
#[derive(Debug, Clone, Copy)]
pub struct TenantsClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn tenants(&self) -> TenantsClient<'_> {
        TenantsClient { api: self }
    }
}

impl TenantsClient<'_> {
    /// # Errors
    /// Any transport error.
    pub async fn list(&self) -> Result<Vec<TenantDto>, ApiError> {
        self.api.get("/tenants", None).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn get(&self, id: &str) -> Result<TenantDto, ApiError> {
        self.api
            .get(&format!("/tenants/{}", segment(id)), None)
            .await
    }

    /// # Errors
    /// Any transport error; 404 for an unknown code.
    pub async fn get_by_code(&self, code: &str) -> Result<TenantDto, ApiError> {
        self.api
            .get(&format!("/tenants/by-code/{}", segment(code)), None)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn create(&self, request: &CreateTenantRequest) -> Result<TenantDto, ApiError> {
        self.api.post("/tenants", request, None).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn branches(&self, tenant_id: &str) -> Result<Vec<TenantBranchDto>, ApiError> {
        self.api
            .get(&format!("/tenants/{}/branches", segment(tenant_id)), None)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn branch(&self, branch_id: &str) -> Result<TenantBranchDto, ApiError> {
        self.api
            .get(&format!("/tenants/branches/{}", segment(branch_id)), None)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn create_branch(
        &self,
        request: &CreateBranchRequest,
    ) -> Result<TenantBranchDto, ApiError> {
        self.api.post("/tenants/branches", request, None).await
    }
}
