mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cloudhealth_api::Client;

use crate::config::Config;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "cloudhealth")]
#[command(about = "Query accounts, customers and billing data from the CloudHealth API")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API key (defaults to $CLOUDHEALTH_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API base URL (defaults to $CLOUDHEALTH_API_URL or the public endpoint)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List or look up AWS accounts
    Accounts(commands::accounts::AccountsArgs),
    /// List or look up partner customers
    Customers(commands::customers::CustomersArgs),
    /// List customer billing statements
    Statements(commands::statements::StatementsArgs),
    /// List or look up AWS account assignments
    Assignments(commands::assignments::AssignmentsArgs),
    /// List price book assignments
    PriceBooks(commands::price_books::PriceBooksArgs),
    /// List or look up organizations
    Organizations(commands::organizations::OrganizationsArgs),
    /// Run the AWS cost history report
    CostHistory(commands::cost_history::CostHistoryArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cloudhealth=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let config = Config::resolve(cli.api_key.as_deref(), cli.endpoint.as_deref())?;
    let client = Client::new(&config.api_key, &config.endpoint)?;

    match &cli.command {
        Commands::Accounts(args) => commands::accounts::run(args, &client, &format).await?,
        Commands::Customers(args) => commands::customers::run(args, &client, &format).await?,
        Commands::Statements(args) => commands::statements::run(args, &client, &format).await?,
        Commands::Assignments(args) => commands::assignments::run(args, &client, &format).await?,
        Commands::PriceBooks(args) => commands::price_books::run(args, &client, &format).await?,
        Commands::Organizations(args) => {
            commands::organizations::run(args, &client, &format).await?
        }
        Commands::CostHistory(args) => commands::cost_history::run(args, &client, &format).await?,
    }

    Ok(())
}
