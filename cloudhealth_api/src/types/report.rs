//! AWS cost history report (`/olap_reports/cost/history`) broken down by
//! AWS service category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwsCostHistoryReport {
    #[serde(default)]
    pub bill_drop_info: Vec<serde_json::Value>,

    #[serde(default)]
    pub cube_id: String,

    /// One row per time bucket, one column per service category member.
    /// Buckets without data come back as `null`.
    #[serde(default)]
    pub data: Vec<Vec<Option<f64>>>,

    #[serde(default)]
    pub dimensions: Vec<ReportDimension>,

    #[serde(default)]
    pub enable_dp_popover: bool,

    #[serde(default)]
    pub filters: Vec<String>,

    pub interval: String,

    #[serde(default)]
    pub measures: Vec<ReportMeasure>,

    pub report: String,

    pub status: String,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub visualization_options: serde_json::Value,
}

impl AwsCostHistoryReport {
    /// Labels of the service categories, in column order.
    pub fn category_labels(&self) -> Vec<&str> {
        self.dimensions
            .iter()
            .flat_map(|d| d.aws_service_category.iter())
            .map(|m| m.label.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDimension {
    #[serde(rename = "AWS-Service-Category", default)]
    pub aws_service_category: Vec<ServiceCategoryMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceCategoryMember {
    #[serde(default)]
    pub direct: bool,
    #[serde(default)]
    pub excluded: serde_json::Value,
    #[serde(default)]
    pub extended: bool,
    pub label: String,
    pub name: String,
    #[serde(default)]
    pub parent: i64,
    #[serde(default)]
    pub populated: serde_json::Value,
    #[serde(default)]
    pub sort_order: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportMeasure {
    pub label: String,
    #[serde(default)]
    pub metadata: ReportMeasureMetadata,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportMeasureMetadata {
    #[serde(default)]
    pub ancillary_caches: Vec<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub supports_drilldown: bool,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub units: String,
}
