use anyhow::Result;
use clap::Args;
use cloudhealth_api::Client;

use crate::output::{print_json, print_organizations_table, OutputFormat};

#[derive(Args)]
pub struct OrganizationsArgs {
    /// Show a single organization by id
    #[arg(long)]
    pub id: Option<String>,
}

pub async fn run(args: &OrganizationsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let organizations = match &args.id {
        Some(id) => vec![client.get_organization(id).await?],
        None => client.get_organizations().await?,
    };

    match format {
        OutputFormat::Json => print_json(&organizations),
        OutputFormat::Table => print_organizations_table(&organizations),
    }
    Ok(())
}
