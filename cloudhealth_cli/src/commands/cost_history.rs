use anyhow::Result;
use clap::Args;
use cloudhealth_api::{Client, CostHistoryQuery};

use crate::output::{print_cost_history_table, print_json, OutputFormat};

#[derive(Args)]
pub struct CostHistoryArgs {
    /// Measure to report (e.g. cost)
    #[arg(long, default_value = "")]
    pub measures: String,

    /// Bucket size: hourly, daily, weekly, monthly
    #[arg(long, default_value = "")]
    pub interval: String,

    /// Time selector (e.g. -1 for the current period)
    #[arg(long, default_value = "")]
    pub time: String,

    /// Run the report for a partner customer
    #[arg(long)]
    pub client_api_id: Option<String>,

    /// Keep only these AWS service categories
    #[arg(long)]
    pub select: Option<String>,

    /// Drop these AWS service categories
    #[arg(long)]
    pub reject: Option<String>,

    /// Restrict to one AWS account
    #[arg(long)]
    pub account: Option<String>,
}

fn build_query(args: &CostHistoryArgs) -> CostHistoryQuery {
    let mut query = CostHistoryQuery::default()
        .with_measures(&args.measures)
        .with_interval(&args.interval)
        .with_time(&args.time);
    if let Some(ref id) = args.client_api_id {
        query = query.with_client_api_id(id);
    }
    if let Some(ref select) = args.select {
        query = query.with_selected_dimensions(select);
    }
    if let Some(ref reject) = args.reject {
        query = query.with_rejected_dimensions(reject);
    }
    if let Some(ref account) = args.account {
        query = query.with_target_aws_account_id(account);
    }
    query
}

pub async fn run(args: &CostHistoryArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let report = client
        .get_aws_cost_history_report(&build_query(args))
        .await?;

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Table => print_cost_history_table(&report),
    }
    Ok(())
}
