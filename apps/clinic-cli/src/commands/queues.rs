use clap::Subcommand;

use super::{Context, print_json};

#[derive(Subcommand)]
pub enum QueuesCommand {
    /// Queue definitions of a branch
    List {
        #[arg(long)]
        branch: Option<String>,
    },
    /// Entries waiting in one queue
    Entries {
        queue_id: String,
        #[arg(long)]
        branch: Option<String>,
    },
    /// Call the patient of an entry
    Call { entry_id: String },
    /// The public waiting-room board
    Board {
        #[arg(long)]
        branch: Option<String>,
    },
}

impl QueuesCommand {
    pub async fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        let queues = ctx.api.queues();
        match self {
            Self::List { branch } => {
                let branch = ctx.branch(branch.as_deref())?;
                print_json(&queues.definitions(&branch, ctx.tenant()).await?)
            }
            Self::Entries { queue_id, branch } => {
                let branch = ctx.branch(branch.as_deref())?;
                print_json(&queues.entries(queue_id, &branch, ctx.tenant()).await?)
            }
            Self::Call { entry_id } => print_json(&queues.call_entry(entry_id, ctx.tenant()).await?),
            Self::Board { branch } => {
                let branch = ctx.branch(branch.as_deref())?;
                print_json(&queues.public_status(&branch, ctx.tenant()).await?)
            }
        }
    }
}
