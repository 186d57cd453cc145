//! Wire shapes for every resource domain.
//!
//! These are passthrough types: `camelCase` on the wire, no validation
//! beyond what serde does while decoding. Identifiers and timestamps stay
//! strings as the backend sends them.

mod admin;
mod ai_audit;
mod analytics;
mod auth;
mod billing;
mod chat;
mod clinical;
mod common;
mod master_data;
mod patients;
mod pharmacy;
mod portal;
mod queues;
mod reports;
mod scheduling;
mod tenants;
mod triage;

pub use admin::*;
pub use ai_audit::*;
pub use analytics::*;
pub use auth::*;
pub use billing::*;
pub use chat::*;
pub use clinical::*;
pub use common::*;
pub use master_data::*;
pub use patients::*;
pub use pharmacy::*;
pub use portal::*;
pub use queues::*;
pub use reports::*;
pub use scheduling::*;
pub use tenants::*;
pub use triage::*;
