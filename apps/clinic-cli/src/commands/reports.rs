use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use clinic_api::models::ReportFilter;

use super::{Context, print_json};

#[derive(Args)]
pub struct FilterArgs {
    #[arg(long)]
    branch: Option<String>,
    /// First day, YYYY-MM-DD
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Last day, YYYY-MM-DD
    #[arg(long)]
    to: Option<NaiveDate>,
}

impl FilterArgs {
    fn filter(&self, ctx: &Context) -> anyhow::Result<ReportFilter> {
        let mut filter = ReportFilter::for_branch(ctx.branch(self.branch.as_deref())?);
        filter.from_date = self.from;
        filter.to_date = self.to;
        Ok(filter)
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportKind {
    /// daily-volume.xlsx
    DailyVolume,
    /// wait-time.xlsx
    WaitTime,
    /// ai-effectiveness.pdf
    AiEffectiveness,
}

#[derive(Subcommand)]
pub enum ReportsCommand {
    WaitTime(FilterArgs),
    DailyVolume(FilterArgs),
    AiEffectiveness(FilterArgs),
    /// Download a report document into the download directory
    Export {
        #[arg(value_enum)]
        kind: ExportKind,
        #[command(flatten)]
        filter: FilterArgs,
    },
}

impl ReportsCommand {
    pub async fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        let reports = ctx.api.reports();
        match self {
            Self::WaitTime(args) => {
                print_json(&reports.wait_time(&args.filter(ctx)?, ctx.tenant()).await?)
            }
            Self::DailyVolume(args) => {
                print_json(&reports.daily_volume(&args.filter(ctx)?, ctx.tenant()).await?)
            }
            Self::AiEffectiveness(args) => {
                print_json(&reports.ai_effectiveness(&args.filter(ctx)?, ctx.tenant()).await?)
            }
            Self::Export { kind, filter } => {
                let filter = filter.filter(ctx)?;
                let saved = match kind {
                    ExportKind::DailyVolume => {
                        reports.export_daily_volume_excel(&filter, ctx.tenant()).await?
                    }
                    ExportKind::WaitTime => {
                        reports.export_wait_time_excel(&filter, ctx.tenant()).await?
                    }
                    ExportKind::AiEffectiveness => {
                        reports.export_ai_effectiveness_pdf(&filter, ctx.tenant()).await?
                    }
                };
                println!("{}", saved.display());
                Ok(())
            }
        }
    }
}
