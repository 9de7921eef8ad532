use anyhow::Result;
use clap::Args;
use cloudhealth_api::Client;

use crate::output::{print_customers_table, print_json, OutputFormat};

#[derive(Args)]
pub struct CustomersArgs {
    /// Show a single customer by id
    #[arg(long)]
    pub id: Option<i64>,
}

pub async fn run(args: &CustomersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let customers = match args.id {
        Some(id) => vec![client.get_customer(id).await?],
        None => client.get_customers().await?,
    };

    match format {
        OutputFormat::Json => print_json(&customers),
        OutputFormat::Table => print_customers_table(&customers),
    }
    Ok(())
}
