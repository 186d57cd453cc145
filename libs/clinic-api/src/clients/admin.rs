use chrono::NaiveDate;

use crate::error::ApiError;
use crate::models::{
    AdminUserDto, AuditLogDto, CreateUserRequest, PageRequest, PagedResponse, RevenueReportDto,
    RoleDto, SetPasswordRequest, UpdateUserRequest,
};
use crate::query::{QueryParams, segment};
use crate::tenant::TenantHeaders;
use crate::transport::{ApiClient, RequestDescriptor};

use super::with_page;

/// User and role administration, the audit trail and system health
#[derive(Debug, Clone, Copy)]
pub struct AdminClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn admin(&self) -> AdminClient<'_> {
        AdminClient { api: self }
    }
}

fn user_path(id: &str) -> String {
    format!("/admin/users/{}", segment(id))
}

impl AdminClient<'_> {
    /// Users, optionally restricted to one tenant
    ///
    /// # Errors
    /// Any transport error.
    pub async fn users(
        &self,
        tenant_id: Option<&str>,
        page: PageRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PagedResponse<AdminUserDto>, ApiError> {
        let params = QueryParams::new().push_opt("tenantId", tenant_id);
        let path = with_page(params, page).append_to("/admin/users");
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn user(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<AdminUserDto, ApiError> {
        self.api.get(&user_path(id), tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn create_user(
        &self,
        request: &CreateUserRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<AdminUserDto, ApiError> {
        self.api.post("/admin/users", request, tenant).await
    }

    /// Profile changes; a present `role_assignments` replaces all assignments
    ///
    /// # Errors
    /// Any transport error.
    pub async fn update_user(
        &self,
        id: &str,
        request: &UpdateUserRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<AdminUserDto, ApiError> {
        self.api.patch(&user_path(id), request, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn set_password(
        &self,
        id: &str,
        request: &SetPasswordRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<(), ApiError> {
        let req = RequestDescriptor::patch(format!("{}/password", user_path(id)))
            .json(request)?
            .tenant(tenant);
        self.api.ack(req).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn roles(&self, tenant: Option<&TenantHeaders>) -> Result<Vec<RoleDto>, ApiError> {
        self.api.get("/admin/roles", tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn audit_logs(
        &self,
        tenant_id: Option<&str>,
        page: PageRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PagedResponse<AuditLogDto>, ApiError> {
        let params = QueryParams::new().push_opt("tenantId", tenant_id);
        let path = with_page(params, page).append_to("/admin/audit-logs");
        self.api.get(&path, tenant).await
    }

    /// Revenue between two dates, both required
    ///
    /// # Errors
    /// Any transport error.
    pub async fn revenue_report(
        &self,
        branch_id: &str,
        from: NaiveDate,
        to: NaiveDate,
        tenant: Option<&TenantHeaders>,
    ) -> Result<RevenueReportDto, ApiError> {
        let path = QueryParams::new()
            .push("branchId", branch_id)
            .push("from", from)
            .push("to", to)
            .append_to("/admin/revenue-report");
        self.api.get(&path, tenant).await
    }

    /// Provider status and spend of the AI subsystem
    ///
    /// # Errors
    /// Any transport error.
    pub async fn ai_health(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<serde_json::Value, ApiError> {
        self.api.get("/admin/ai-health", tenant).await
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::clients::test_support::client_for;
    use crate::models::RoleAssignmentInput;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_users_filtered_by_tenant() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/admin/users")
                .query_param("tenantId", "T1")
                .query_param("page", "1")
                .query_param("size", "10");
            then.status(200).json_body(json!({
                "content": [{
                    "id": "u1",
                    "email": "doctor@clinic.vn",
                    "fullNameVi": "Bac si A",
                    "isActive": true,
                    "roleAssignments": [{"tenantId": "T1", "roleCode": "doctor"}]
                }],
                "page": 1,
                "size": 10,
                "totalElements": 11,
                "totalPages": 2,
                "first": false,
                "last": true
            }));
        });

        let users = client_for(&server)
            .admin()
            .users(Some("T1"), PageRequest::new(1, 10), None)
            .await
            .unwrap();
        mock.assert();
        assert_eq!(users.content[0].role_assignments[0].role_code, "doctor");
    }

    #[tokio::test]
    async fn test_set_password_patch() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/api/admin/users/u1/password")
                .json_body(json!({"newPassword": "n3w-secret"}));
            then.status(200)
                .json_body(json!({"success": true, "data": null}));
        });

        let request = SetPasswordRequest {
            new_password: "n3w-secret".to_owned(),
        };
        client_for(&server)
            .admin()
            .set_password("u1", &request, None)
            .await
            .unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn test_update_user_replaces_roles() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PATCH).path("/api/admin/users/u1").json_body(json!({
                "isActive": false,
                "roleAssignments": [{"tenantId": "T1", "roleCode": "receptionist", "branchId": "B1"}]
            }));
            then.status(200).json_body(json!({
                "id": "u1",
                "email": "a@clinic.vn",
                "fullNameVi": "Nguyen A",
                "isActive": false
            }));
        });

        let request = UpdateUserRequest {
            is_active: Some(false),
            role_assignments: Some(vec![RoleAssignmentInput {
                tenant_id: "T1".to_owned(),
                role_code: "receptionist".to_owned(),
                branch_id: Some("B1".to_owned()),
            }]),
            ..UpdateUserRequest::default()
        };
        let user = client_for(&server)
            .admin()
            .update_user("u1", &request, None)
            .await
            .unwrap();
        mock.assert();
        assert!(!user.is_active);
        assert!(user.role_assignments.is_empty());
    }

    #[tokio::test]
    async fn test_revenue_report_dates() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/admin/revenue-report")
                .query_param("branchId", "B1")
                .query_param("from", "2024-01-01")
                .query_param("to", "2024-01-31");
            then.status(200).json_body(json!({"totalRevenue": 0.0, "dailyRevenue": []}));
        });

        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        client_for(&server)
            .admin()
            .revenue_report("B1", from, to, None)
            .await
            .unwrap();
        mock.assert();
    }
}
