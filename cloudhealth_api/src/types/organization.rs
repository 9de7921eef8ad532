//! Organizations (`/v2/organizations`).

use serde::{Deserialize, Serialize};

use crate::pagination::Page;

#[derive(Debug, Serialize, Deserialize)]
pub struct Organizations {
    pub organizations: Vec<Organization>,
}

impl Page for Organizations {
    type Item = Organization;

    fn into_items(self) -> Vec<Organization> {
        self.organizations
    }
}

/// An organization and how many cloud accounts of each kind it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    #[serde(default)]
    pub parent_organization_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub idp_name: Option<String>,
    #[serde(default)]
    pub flex_org: bool,
    #[serde(default)]
    pub default_organization: bool,
    #[serde(default)]
    pub assigned_users_count: i64,
    #[serde(default)]
    pub num_aws_accounts: i64,
    #[serde(default)]
    pub num_azure_subscriptions: i64,
    #[serde(default)]
    pub num_gcp_compute_projects: i64,
    #[serde(default)]
    pub num_data_center_accounts: i64,
    #[serde(default)]
    pub num_vmware_csp_organizations: i64,
}
