use anyhow::Result;
use clap::Args;
use cloudhealth_api::Client;

use crate::output::{
    print_account_price_books_table, print_customer_price_books_table, print_json, OutputFormat,
};

#[derive(Args)]
pub struct PriceBooksArgs {
    /// Show a single assignment by id
    #[arg(long)]
    pub id: Option<i64>,

    /// List account-level assignments instead of customer-level ones
    #[arg(long)]
    pub accounts: bool,
}

pub async fn run(args: &PriceBooksArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if args.accounts {
        let assignments = match args.id {
            Some(id) => vec![client.get_account_price_book_assignment(id).await?],
            None => client.get_account_price_book_assignments().await?,
        };
        match format {
            OutputFormat::Json => print_json(&assignments),
            OutputFormat::Table => print_account_price_books_table(&assignments),
        }
    } else {
        let assignments = match args.id {
            Some(id) => vec![client.get_customer_price_book_assignment(id).await?],
            None => client.get_customer_price_book_assignments().await?,
        };
        match format {
            OutputFormat::Json => print_json(&assignments),
            OutputFormat::Table => print_customer_price_books_table(&assignments),
        }
    }
    Ok(())
}
