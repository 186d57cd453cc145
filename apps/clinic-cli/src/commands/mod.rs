use clinic_api::{ApiClient, TenantHeaders};
use serde::Serialize;

pub mod billing;
pub mod documents;
pub mod queues;
pub mod reports;
pub mod session;
pub mod tenants;

/// What every command needs: the client and the configured tenant scope
pub struct Context {
    pub api: ApiClient,
    pub tenant: Option<TenantHeaders>,
}

impl Context {
    #[must_use]
    pub fn tenant(&self) -> Option<&TenantHeaders> {
        self.tenant.as_ref()
    }

    /// Branch from the tenant scope, for commands that filter by branch
    pub fn branch(&self, explicit: Option<&str>) -> anyhow::Result<String> {
        explicit
            .or_else(|| self.tenant.as_ref().and_then(|t| t.branch_id.as_deref()))
            .map(str::to_owned)
            .ok_or_else(|| anyhow::anyhow!("no branch given; pass --branch or set branch_id"))
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
