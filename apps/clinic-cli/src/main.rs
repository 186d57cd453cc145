mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clinic_api::ApiClient;

use commands::Context;
use commands::billing::InvoicesCommand;
use commands::documents::DocumentsCommand;
use commands::queues::QueuesCommand;
use commands::reports::ReportsCommand;
use commands::session::{self, LoginArgs};
use commands::tenants::TenantsCommand;
use config::CliConfig;

/// Clinic portal command-line client
#[derive(Parser)]
#[command(name = "clinic-cli")]
#[command(about = "Clinic portal command-line client")]
#[command(version)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Tenant id sent as X-Tenant-ID (overrides config)
    #[arg(long, global = true)]
    tenant: Option<String>,

    /// Branch id sent as X-Branch-ID (overrides config)
    #[arg(long = "branch-scope", global = true)]
    branch_scope: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session token
    Login(LoginArgs),
    /// Forget the stored session token
    Logout,
    /// Show the signed-in user
    Whoami,
    #[command(subcommand)]
    Tenants(TenantsCommand),
    #[command(subcommand)]
    Invoices(InvoicesCommand),
    #[command(subcommand)]
    Queues(QueuesCommand),
    #[command(subcommand)]
    Reports(ReportsCommand),
    /// Download PDF documents
    #[command(subcommand)]
    Documents(DocumentsCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = CliConfig::load(cli.config.as_deref())?;
    config.apply_overrides(
        cli.base_url.as_deref(),
        cli.tenant.as_deref(),
        cli.branch_scope.as_deref(),
    );

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("no command given; see --help");
    };

    let ctx = Context {
        api: ApiClient::new(&config.api)?,
        tenant: config.tenant_headers(),
    };
    tracing::debug!(
        base_url = %config.api.base_url,
        tenant = ?ctx.tenant().map(|t| t.tenant_id.as_str()),
        "client ready"
    );

    match command {
        Commands::Login(args) => args.run(&ctx).await,
        Commands::Logout => {
            session::logout(&ctx);
            Ok(())
        }
        Commands::Whoami => session::whoami(&ctx).await,
        Commands::Tenants(cmd) => cmd.run(&ctx).await,
        Commands::Invoices(cmd) => cmd.run(&ctx).await,
        Commands::Queues(cmd) => cmd.run(&ctx).await,
        Commands::Reports(cmd) => cmd.run(&ctx).await,
        Commands::Documents(cmd) => cmd.run(&ctx).await,
    }
}
