use crate::error::ApiError;
use crate::models::{
    InventoryTransactionDto, PharmacyInventoryDto, PharmacyProductDto, PrescriptionDto,
    RestockRequest,
};
use crate::query::{QueryParams, segment};
use crate::tenant::TenantHeaders;
use crate::transport::{ApiClient, RequestDescriptor};

/// Drug catalogue, stock and dispensing
#[derive(Debug, Clone, Copy)]
pub struct PharmacyClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn pharmacy(&self) -> PharmacyClient<'_> {
        PharmacyClient { api: self }
    }
}

fn by_branch(branch_id: &str, path: &str) -> String {
    QueryParams::new()
        .push("branchId", branch_id)
        .append_to(path)
}

impl PharmacyClient<'_> {
    /// # Errors
    /// Any transport error.
    pub async fn products(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<PharmacyProductDto>, ApiError> {
        self.api.get("/pharmacy/products", tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn create_product(
        &self,
        product: &PharmacyProductDto,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PharmacyProductDto, ApiError> {
        self.api.post("/pharmacy/products", product, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn update_product(
        &self,
        id: &str,
        product: &PharmacyProductDto,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PharmacyProductDto, ApiError> {
        self.api
            .put(
                &format!("/pharmacy/products/{}", segment(id)),
                product,
                tenant,
            )
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn inventory(
        &self,
        branch_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<PharmacyInventoryDto>, ApiError> {
        self.api
            .get(&by_branch(branch_id, "/pharmacy/inventory"), tenant)
            .await
    }

    /// Add stock. Sent as query parameters with no body.
    ///
    /// # Errors
    /// Any transport error.
    pub async fn restock(
        &self,
        request: &RestockRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<(), ApiError> {
        let path = QueryParams::new()
            .push("branchId", &request.branch_id)
            .push("productId", &request.product_id)
            .push("quantity", request.quantity)
            .push_opt("notes", request.notes.as_deref())
            .append_to("/pharmacy/inventory/restock");
        self.api
            .ack(RequestDescriptor::post(path).tenant(tenant))
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn transactions(
        &self,
        branch_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<InventoryTransactionDto>, ApiError> {
        self.api
            .get(&by_branch(branch_id, "/pharmacy/inventory/transactions"), tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn pending_prescriptions(
        &self,
        branch_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<PrescriptionDto>, ApiError> {
        self.api
            .get(&by_branch(branch_id, "/prescriptions/pending"), tenant)
            .await
    }

    /// Hand out a prescription and deduct its items from stock
    ///
    /// # Errors
    /// Any transport error.
    pub async fn dispense(
        &self,
        prescription_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<(), ApiError> {
        let path = format!("/prescriptions/{}/dispense", segment(prescription_id));
        self.api
            .ack(RequestDescriptor::post(path).tenant(tenant))
            .await
    }

    // Portal pharmacist screens

    /// # Errors
    /// Any transport error.
    pub async fn portal_pending(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<PrescriptionDto>, ApiError> {
        self.api.get("/portal/pharmacy/pending", tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn portal_inventory(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<PharmacyInventoryDto>, ApiError> {
        self.api.get("/portal/pharmacy/inventory", tenant).await
    }

    /// Free-text drug lookup answered by the AI service
    ///
    /// # Errors
    /// Any transport error.
    pub async fn drug_info(
        &self,
        query: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<serde_json::Value, ApiError> {
        let path = QueryParams::new()
            .push("query", query)
            .append_to("/portal/pharmacy/drug-info");
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn check_interactions(
        &self,
        drug_names: &[String],
        tenant: Option<&TenantHeaders>,
    ) -> Result<serde_json::Value, ApiError> {
        self.api
            .post("/portal/pharmacy/check-interactions", drug_names, tenant)
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
    async fn test_restock_query_without_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/pharmacy/inventory/restock")
                .query_param("branchId", "B1")
                .query_param("productId", "prod-1")
                .query_param("quantity", "12.5")
                .query_param_missing("notes")
                .body("");
            then.status(200);
        });

        let request = RestockRequest {
            branch_id: "B1".to_owned(),
            product_id: "prod-1".to_owned(),
            quantity: 12.5,
            notes: None,
        };
        let tenant = TenantHeaders::new("T1").with_branch("B1");
        client_for(&server)
            .pharmacy()
            .restock(&request, Some(&tenant))
            .await
            .unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn test_transaction_type_field() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/pharmacy/inventory/transactions")
                .query_param("branchId", "B1");
            then.status(200).json_body(json!([{
                "id": "t1",
                "branchId": "B1",
                "type": "DISPENSE",
                "quantity": -2.0
            }]));
        });

        let transactions = client_for(&server)
            .pharmacy()
            .transactions("B1", None)
            .await
            .unwrap();
        assert_eq!(transactions[0].transaction_type, "DISPENSE");
    }

    #[tokio::test]
    async fn test_check_interactions_sends_array() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/portal/pharmacy/check-interactions")
                .json_body(json!(["warfarin", "aspirin"]));
            then.status(200)
                .json_body(json!({"severity": "HIGH", "interactions": []}));
        });

        let drugs = vec!["warfarin".to_owned(), "aspirin".to_owned()];
        let result = client_for(&server)
            .pharmacy()
            .check_interactions(&drugs, None)
            .await
            .unwrap();
        mock.assert();
        assert_eq!(result["severity"], "HIGH");
    }

    #[tokio::test]
    async fn test_dispense_conflict_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/prescriptions/rx1/dispense");
            then.status(409)
                .json_body(json!({"error": "Insufficient stock"}));
        });

        let err = client_for(&server)
            .pharmacy()
            .dispense("rx1", None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Insufficient stock");
    }
}
