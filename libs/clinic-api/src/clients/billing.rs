use chrono::NaiveDate;

use crate::error::ApiError;
use crate::models::{CreateInvoiceRequest, InvoiceDto, RevenueReportDto};
use crate::query::{QueryParams, segment};
use crate::tenant::TenantHeaders;
use crate::transport::ApiClient;

/// Staff-side invoicing
#[derive(Debug, Clone, Copy)]
pub struct BillingClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn billing(&self) -> BillingClient<'_> {
        BillingClient { api: self }
    }
}

impl BillingClient<'_> {
    /// Invoices of a branch, optionally narrowed to one status (e.g. `PENDING`)
    ///
    /// # Errors
    /// Any transport error.
    pub async fn list_invoices(
        &self,
        branch_id: &str,
        status: Option<&str>,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<InvoiceDto>, ApiError> {
        let path = QueryParams::new()
            .push("branchId", branch_id)
            .push_opt("status", status)
            .append_to("/billing/invoices");
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn get_invoice(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<InvoiceDto, ApiError> {
        self.api
            .get(&format!("/billing/invoices/{}", segment(id)), tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn create_invoice(
        &self,
        request: &CreateInvoiceRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<InvoiceDto, ApiError> {
        self.api.post("/billing/invoices", request, tenant).await
    }

    /// Record payment at the counter (`CASH`, `CARD`, `TRANSFER`, ...)
    ///
    /// # Errors
    /// Any transport error.
    pub async fn pay_invoice(
        &self,
        id: &str,
        payment_method: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<InvoiceDto, ApiError> {
        let path = QueryParams::new()
            .push("paymentMethod", payment_method)
            .append_to(&format!("/billing/invoices/{}/pay", segment(id)));
        self.api.post_empty(&path, tenant).await
    }

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
            .append_to("/billing/invoices/report/revenue");
        self.api.get(&path, tenant).await
    }
}
