use anyhow::Result;
use clap::Args;
use cloudhealth_api::Client;

use crate::output::{print_assignments_table, print_json, OutputFormat};

#[derive(Args)]
pub struct AssignmentsArgs {
    /// Show a single assignment by id
    #[arg(long)]
    pub id: Option<i64>,
}

pub async fn run(args: &AssignmentsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let assignments = match args.id {
        Some(id) => vec![client.get_aws_account_assignment(id).await?],
        None => client.get_aws_account_assignments().await?,
    };

    match format {
        OutputFormat::Json => print_json(&assignments),
        OutputFormat::Table => print_assignments_table(&assignments),
    }
    Ok(())
}
