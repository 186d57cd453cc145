use clap::Subcommand;

use super::{Context, print_json};

#[derive(Subcommand)]
pub enum InvoicesCommand {
    /// Invoices of a branch
    List {
        #[arg(long)]
        branch: Option<String>,
        /// e.g. PENDING, PAID
        #[arg(long)]
        status: Option<String>,
    },
    Show { id: String },
    /// Record a counter payment
    Pay {
        id: String,
        #[arg(long, default_value = "CASH")]
        method: String,
    },
}

impl InvoicesCommand {
    pub async fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        let billing = ctx.api.billing();
        match self {
            Self::List { branch, status } => {
                let branch = ctx.branch(branch.as_deref())?;
                let invoices = billing
                    .list_invoices(&branch, status.as_deref(), ctx.tenant())
                    .await?;
                print_json(&invoices)
            }
            Self::Show { id } => print_json(&billing.get_invoice(id, ctx.tenant()).await?),
            Self::Pay { id, method } => {
                print_json(&billing.pay_invoice(id, method, ctx.tenant()).await?)
            }
        }
    }
}
