use clap::Subcommand;

use super::Context;

#[derive(Subcommand)]
pub enum DocumentsCommand {
    /// A prescription, as the signed-in patient
    Prescription { id: String },
    /// A visit summary, as the signed-in patient
    Consultation { id: String },
    /// A visit summary, as the treating doctor
    ConsultationSummary { id: String },
}

impl DocumentsCommand {
    pub async fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        let saved = match self {
            Self::Prescription { id } => {
                ctx.api
                    .portal()
                    .download_prescription_pdf(id, ctx.tenant())
                    .await?
            }
            Self::Consultation { id } => {
                ctx.api
                    .portal()
                    .download_consultation_pdf(id, ctx.tenant())
                    .await?
            }
            Self::ConsultationSummary { id } => {
                ctx.api
                    .clinical()
                    .download_consultation_pdf(id, ctx.tenant())
                    .await?
            }
        };
        println!("{}", saved.display());
        Ok(())
    }
}
