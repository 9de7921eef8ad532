use anyhow::{bail, Result};
use clap::Args;
use cloudhealth_api::Client;

use crate::output::{print_accounts_table, print_json, OutputFormat};

#[derive(Args)]
pub struct AccountsArgs {
    /// Show a single account by CloudHealth id
    #[arg(long)]
    pub id: Option<i64>,

    /// Print the external id for the account's IAM role (requires --id)
    #[arg(long)]
    pub external_id: bool,
}

pub async fn run(args: &AccountsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match (args.id, args.external_id) {
        (Some(id), true) => {
            let ext = client.get_aws_external_id(id).await?;
            match format {
                OutputFormat::Json => print_json(&ext),
                OutputFormat::Table => println!("{}", ext.external_id),
            }
        }
        (None, true) => bail!("--external-id requires --id"),
        (Some(id), false) => {
            let account = client.get_aws_account(id).await?;
            match format {
                OutputFormat::Json => print_json(&account),
                OutputFormat::Table => print_accounts_table(std::slice::from_ref(&account)),
            }
        }
        (None, false) => {
            let accounts = client.get_aws_accounts().await?;
            eprintln!("{} AWS accounts", accounts.len());
            match format {
                OutputFormat::Json => print_json(&accounts),
                OutputFormat::Table => print_accounts_table(&accounts),
            }
        }
    }
    Ok(())
}
