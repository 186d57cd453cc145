#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![warn(warnings)]

//! HTTP client plumbing for the clinic portal API layer
//!
//! A hyper-based client with:
//! - TLS via rustls (HTTPS only unless plain HTTP is explicitly allowed)
//! - Connection pooling
//! - An optional per-request timeout (off by default)
//! - User-Agent header injection
//! - Transparent response decompression (gzip, brotli, deflate)
//! - `multipart/form-data` request bodies
//!
//! Every response is handed back whatever its status. There are no
//! retries and no redirect following.
//!
//! # Example
//!
//! ```ignore
//! use clinic_http::{HeaderMap, HeaderValue, HttpClientBuilder, Method, header};
//!
//! let client = HttpClientBuilder::new()
//!     .user_agent("clinic-cli/0.2")
//!     .build()?;
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
//! let resp = client
//!     .request(Method::GET, "https://clinic.example.com/api/tenants")
//!     .headers(headers)
//!     .send()
//!     .await?;
//! if resp.status().is_success() {
//!     let body = resp.bytes().await?;
//! }
//! ```

mod builder;
mod client;
mod config;
mod error;
mod layers;
mod multipart;
mod request;
mod response;
mod tls;

pub use builder::HttpClientBuilder;
pub use client::HttpClient;
pub use config::{
    DEFAULT_MAX_BODY_SIZE, DEFAULT_USER_AGENT, HttpClientConfig, TlsRootConfig, TransportSecurity,
};
pub use error::{HttpError, InvalidUriKind};
pub use layers::{DefaultHeaders, DefaultHeadersLayer};
pub use multipart::Multipart;
pub use request::RequestBuilder;
pub use response::{HttpResponse, ResponseBody};

pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, header};
