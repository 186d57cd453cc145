use clap::Subcommand;

use super::{Context, print_json};

#[derive(Subcommand)]
pub enum TenantsCommand {
    /// All tenants
    List,
    /// Branches of one tenant
    Branches { tenant_id: String },
}

impl TenantsCommand {
    pub async fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        let tenants = ctx.api.tenants();
        match self {
            Self::List => print_json(&tenants.list().await?),
            Self::Branches { tenant_id } => print_json(&tenants.branches(tenant_id).await?),
        }
    }
}
