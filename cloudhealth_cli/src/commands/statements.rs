use anyhow::Result;
use clap::Args;
use cloudhealth_api::Client;

use crate::output::{print_json, print_statements_table, OutputFormat};

#[derive(Args)]
pub struct StatementsArgs {
    /// Only statements of this customer id
    #[arg(long)]
    pub customer: Option<i64>,
}

pub async fn run(args: &StatementsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let statements = match args.customer {
        Some(customer_id) => client.get_customer_statements_for(customer_id).await?,
        None => client.get_customer_statements().await?,
    };
    eprintln!("{} statements", statements.len());

    match format {
        OutputFormat::Json => print_json(&statements),
        OutputFormat::Table => print_statements_table(&statements),
    }
    Ok(())
}
