use cloudhealth_api::types::{
    AccountPriceBookAssignment, AwsAccount, AwsAccountAssignment, AwsCostHistoryReport,
    BillingArtifact, Customer, CustomerPriceBookAssignment, Organization,
};
use tabled::builder::Builder;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Owner ID")]
    owner_id: String,
    #[tabled(rename = "Type")]
    account_type: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Classification")]
    classification: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Country")]
    country: String,
}

#[derive(Tabled)]
struct StatementRow {
    #[tabled(rename = "Customer")]
    customer_id: i64,
    #[tabled(rename = "Cloud")]
    cloud: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct AssignmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Owner ID")]
    owner_id: String,
    #[tabled(rename = "Customer")]
    customer_id: i64,
    #[tabled(rename = "Payer")]
    payer: String,
}

#[derive(Tabled)]
struct CustomerPriceBookRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Price Book")]
    price_book_id: i64,
    #[tabled(rename = "Customer")]
    customer_id: i64,
}

#[derive(Tabled)]
struct AccountPriceBookRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Assignment")]
    assignment_id: i64,
    #[tabled(rename = "Customer")]
    customer_id: i64,
    #[tabled(rename = "Billing Accounts")]
    billing_accounts: String,
}

#[derive(Tabled)]
struct OrganizationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Parent")]
    parent: String,
    #[tabled(rename = "AWS Accounts")]
    aws_accounts: i64,
    #[tabled(rename = "Users")]
    users: i64,
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn build_account_rows(accounts: &[AwsAccount]) -> Vec<AccountRow> {
    accounts
        .iter()
        .map(|a| AccountRow {
            id: opt(a.id),
            name: a.name.clone(),
            owner_id: opt(a.owner_id.as_deref()),
            account_type: opt(a.account_type.as_deref()),
            status: opt(a.status.as_ref().map(|s| s.level.as_str())),
        })
        .collect()
}

fn build_customer_rows(customers: &[Customer]) -> Vec<CustomerRow> {
    customers
        .iter()
        .map(|c| CustomerRow {
            id: opt(c.id),
            name: c.name.clone(),
            classification: opt(c.classification.as_deref()),
            city: c.address.city.clone(),
            country: c.address.country.clone(),
        })
        .collect()
}

fn build_statement_rows(statements: &[BillingArtifact]) -> Vec<StatementRow> {
    statements
        .iter()
        .map(|s| StatementRow {
            customer_id: s.customer_id,
            cloud: s.cloud_provider.clone(),
            period: s.billing_period.clone(),
            amount: format!("{}{:.2}", s.currency.symbol, s.total_amount),
            status: s.status.clone(),
        })
        .collect()
}

pub fn print_accounts_table(accounts: &[AwsAccount]) {
    println!("{}", Table::new(build_account_rows(accounts)));
}

pub fn print_customers_table(customers: &[Customer]) {
    println!("{}", Table::new(build_customer_rows(customers)));
}

pub fn print_statements_table(statements: &[BillingArtifact]) {
    println!("{}", Table::new(build_statement_rows(statements)));
}

pub fn print_assignments_table(assignments: &[AwsAccountAssignment]) {
    let rows = assignments.iter().map(|a| AssignmentRow {
        id: opt(a.id),
        owner_id: a.owner_id.clone(),
        customer_id: a.customer_id,
        payer: opt(a.payer_account_owner_id.as_deref()),
    });
    println!("{}", Table::new(rows));
}

pub fn print_customer_price_books_table(assignments: &[CustomerPriceBookAssignment]) {
    let rows = assignments.iter().map(|a| CustomerPriceBookRow {
        id: a.id,
        price_book_id: a.price_book_id,
        customer_id: a.target_client_api_id,
    });
    println!("{}", Table::new(rows));
}

pub fn print_account_price_books_table(assignments: &[AccountPriceBookAssignment]) {
    let rows = assignments.iter().map(|a| AccountPriceBookRow {
        id: a.id,
        assignment_id: a.price_book_assignment_id,
        customer_id: a.target_client_api_id,
        billing_accounts: billing_accounts(&a.billing_account_owner_id),
    });
    println!("{}", Table::new(rows));
}

pub fn print_organizations_table(organizations: &[Organization]) {
    let rows = organizations.iter().map(|o| OrganizationRow {
        id: o.id.clone(),
        name: o.name.clone(),
        parent: opt(o.parent_organization_id.as_deref()),
        aws_accounts: o.num_aws_accounts,
        users: o.assigned_users_count,
    });
    println!("{}", Table::new(rows));
}

/// One row per time bucket, one column per service category.
pub fn print_cost_history_table(report: &AwsCostHistoryReport) {
    println!("{}", build_cost_history_table(report));
}

fn build_cost_history_table(report: &AwsCostHistoryReport) -> Table {
    let mut builder = Builder::default();
    let mut header = vec![report.interval.clone()];
    header.extend(report.category_labels().into_iter().map(str::to_string));
    builder.push_record(header);
    for (bucket, row) in report.data.iter().enumerate() {
        let mut record = vec![bucket.to_string()];
        record.extend(row.iter().map(|v| match v {
            Some(amount) => format!("{:.2}", amount),
            None => "-".to_string(),
        }));
        builder.push_record(record);
    }
    builder.build()
}

fn billing_accounts(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(ids) => ids
            .iter()
            .map(|id| id.as_str().map(str::to_string).unwrap_or_else(|| id.to_string()))
            .collect::<Vec<_>>()
            .join(", "),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

pub fn print_json<T: serde::Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudhealth_api::types::{AwsAccountStatus, Currency};

    #[test]
    fn account_rows_fill_missing_fields() {
        let mut account = AwsAccount::new("prod");
        account.id = Some(42);
        account.status = Some(AwsAccountStatus {
            level: "green".into(),
            last_update: None,
        });
        let rows = build_account_rows(&[account]);
        assert_eq!(rows[0].id, "42");
        assert_eq!(rows[0].owner_id, "-");
        assert_eq!(rows[0].status, "green");
    }

    #[test]
    fn statement_amount_has_currency_symbol() {
        let statement = BillingArtifact {
            customer_id: 7,
            cloud_provider: "AWS".into(),
            billing_period: "2024-04".into(),
            total_amount: 1234.5,
            status: "Final".into(),
            detailed_billing_records_generation_time: None,
            statement_generation_time: None,
            statement_summary_generation_time: None,
            currency: Currency {
                name: "USD".into(),
                symbol: "$".into(),
            },
            invoice_id: None,
            invoice_date: None,
        };
        let rows = build_statement_rows(&[statement]);
        assert_eq!(rows[0].amount, "$1234.50");
    }

    #[test]
    fn billing_accounts_formats_all_shapes() {
        assert_eq!(billing_accounts(&serde_json::json!("ALL")), "ALL");
        assert_eq!(billing_accounts(&serde_json::json!(["1", "2"])), "1, 2");
        assert_eq!(billing_accounts(&serde_json::Value::Null), "-");
    }

    #[test]
    fn output_format_defaults_to_table() {
        assert!(matches!(OutputFormat::parse("json"), OutputFormat::Json));
        assert!(matches!(OutputFormat::parse("csv"), OutputFormat::Table));
    }

    #[test]
    fn cost_history_table_has_label_header() {
        let report: AwsCostHistoryReport = serde_json::from_value(serde_json::json!({
            "interval": "monthly",
            "report": "cost_history",
            "status": "ok",
            "data": [[1.0, null]],
            "dimensions": [{"AWS-Service-Category": [
                {"label": "EC2", "name": "ec2"},
                {"label": "S3", "name": "s3"}
            ]}]
        }))
        .unwrap();
        let rendered = build_cost_history_table(&report).to_string();
        assert!(rendered.contains("monthly"));
        assert!(rendered.contains("EC2"));
        assert!(rendered.contains("1.00"));
    }
}
