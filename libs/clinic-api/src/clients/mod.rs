//! Typed wrappers, one per backend domain.
//!
//! Each client borrows the [`ApiClient`](crate::ApiClient) it was obtained
//! from and adds nothing but the path, verb and payload shape of each
//! endpoint. Failures from the transport are returned unchanged.

mod admin;
mod ai_audit;
mod analytics;
mod auth;
mod billing;
mod clinical;
mod doctor_chat;
mod master_data;
mod patients;
mod pharmacy;
mod portal;
mod queues;
mod reports;
mod scheduling;
mod tenants;
mod triage;

pub use admin::AdminClient;
pub use ai_audit::AiAuditClient;
pub use analytics::AnalyticsClient;
pub use auth::AuthClient;
pub use billing::BillingClient;
pub use clinical::ClinicalClient;
pub use doctor_chat::DoctorChatClient;
pub use master_data::MasterDataClient;
pub use patients::PatientsClient;
pub use pharmacy::PharmacyClient;
pub use portal::PortalClient;
pub use queues::QueuesClient;
pub use reports::ReportsClient;
pub use scheduling::SchedulingClient;
pub use tenants::TenantsClient;
pub use triage::TriageClient;

use crate::models::{PageRequest, ReportFilter};
use crate::query::QueryParams;

fn with_page(params: QueryParams, page: PageRequest) -> QueryParams {
    params.push_opt("page", page.page).push_opt("size", page.size)
}

fn report_query(filter: &ReportFilter) -> QueryParams {
    QueryParams::new()
        .push("branchId", &filter.branch_id)
        .push_opt("fromDate", filter.from_date)
        .push_opt("toDate", filter.to_date)
}

/// First eight characters of an id, used in suggested file names
fn short_id(id: &str) -> &str {
    id.char_indices().nth(8).map_or(id, |(end, _)| &id[..end])
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod test_support {
    use std::sync::Arc;

    use httpmock::MockServer;

    use crate::config::ApiClientConfig;
    use crate::credentials::MemoryCredentialStore;
    use crate::transport::ApiClient;

    pub fn client_for(server: &MockServer) -> ApiClient {
        let config = ApiClientConfig::with_base_url(server.url("/api"));
        ApiClient::with_credentials(&config, Arc::new(MemoryCredentialStore::with_token("tok")))
            .unwrap()
    }
}
