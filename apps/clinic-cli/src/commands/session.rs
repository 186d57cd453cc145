use std::io::BufRead;

use anyhow::Context as _;
use clap::Args;
use clinic_api::models::LoginRequest;

use super::{Context, print_json};

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    email: String,

    /// Read from the first line of stdin when omitted
    #[arg(long)]
    password: Option<String>,
}

impl LoginArgs {
    pub async fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        let tenant = ctx
            .tenant()
            .map(|t| t.tenant_id.clone())
            .context("login needs a tenant; pass --tenant or set tenant_id")?;
        let password = match &self.password {
            Some(password) => password.clone(),
            None => read_password()?,
        };

        let request = LoginRequest {
            email: self.email.clone(),
            password,
            tenant_id: tenant,
            branch_id: ctx.tenant().and_then(|t| t.branch_id.clone()),
        };
        let response = ctx.api.auth().login(&request).await?;
        print_json(&response.user)
    }
}

fn read_password() -> anyhow::Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        anyhow::bail!("empty password");
    }
    Ok(password.to_owned())
}

pub async fn whoami(ctx: &Context) -> anyhow::Result<()> {
    let user = ctx.api.auth().me().await?;
    print_json(&user)
}

pub fn logout(ctx: &Context) {
    ctx.api.auth().logout();
    println!("signed out");
}
