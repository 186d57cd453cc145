#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![warn(warnings)]

//! Typed access to the clinic portal REST backend
//!
//! Every call goes through one [`ApiClient`]:
//! - relative paths are resolved against the configured base URL
//! - the stored bearer token and the caller's tenant scope become headers
//! - non-2xx answers turn into [`ApiError`] with the server's message
//!
//! Resource clients (`api.portal()`, `api.billing()`, ...) are thin typed
//! wrappers that add the path, verb and payload shape of each endpoint.
//!
//! # Example
//!
//! ```ignore
//! use clinic_api::{ApiClient, ApiClientConfig, TenantHeaders};
//! use clinic_api::models::LoginRequest;
//!
//! let api = ApiClient::new(&ApiClientConfig::with_base_url("https://clinic.example.com/api"))?;
//! api.auth().login(&LoginRequest {
//!     email: "doctor@clinic.vn".into(),
//!     password: "secret".into(),
//!     tenant_id: "T1".into(),
//!     branch_id: None,
//! }).await?;
//!
//! let tenant = TenantHeaders::new("T1").with_branch("B1");
//! let invoices = api.billing().list_invoices("B1", Some("PENDING"), Some(&tenant)).await?;
//! ```

mod clients;
mod config;
mod credentials;
mod error;
mod headers;
mod query;
mod tenant;
mod transport;

pub mod models;

pub use clients::{
    AdminClient, AiAuditClient, AnalyticsClient, AuthClient, BillingClient, ClinicalClient,
    DoctorChatClient, MasterDataClient, PatientsClient, PharmacyClient, PortalClient,
    QueuesClient, ReportsClient, SchedulingClient, TenantsClient, TriageClient,
};
pub use config::{APP_DIR_NAME, ApiClientConfig, ConfigError, DEFAULT_BASE_URL, TlsRoots};
pub use credentials::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, TOKEN_STORAGE_KEY,
};
pub use error::{ApiError, DOWNLOAD_FAILED_MESSAGE, error_message, status_text};
pub use headers::{BodyEncoding, build_headers, header_overrides};
pub use query::{QueryParams, segment};
pub use tenant::{BRANCH_ID_HEADER, TENANT_ID_HEADER, TenantHeaders};
pub use transport::{ApiClient, RequestBody, RequestDescriptor};

pub use clinic_http::{HttpError, Multipart, StatusCode};
