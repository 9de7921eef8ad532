//! Customer billing statements (`/v1/customer_statements`).

use serde::{Deserialize, Serialize};

use crate::pagination::Page;

/// One page of the statement listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct BillingArtifacts {
    pub billing_artifacts: Vec<BillingArtifact>,
}

impl Page for BillingArtifacts {
    type Item = BillingArtifact;

    fn into_items(self) -> Vec<BillingArtifact> {
        self.billing_artifacts
    }
}

/// A customer statement for one cloud and billing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingArtifact {
    pub customer_id: i64,

    /// Cloud provider, e.g. "AWS".
    #[serde(rename = "cloud")]
    pub cloud_provider: String,

    /// Period in `YYYY-MM` form.
    pub billing_period: String,

    pub total_amount: f64,

    pub status: String,

    #[serde(default)]
    pub detailed_billing_records_generation_time: Option<String>,

    #[serde(default)]
    pub statement_generation_time: Option<String>,

    #[serde(default)]
    pub statement_summary_generation_time: Option<String>,

    pub currency: Currency,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}
