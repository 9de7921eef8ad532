//! AWS account types returned by the `/v1/aws_accounts` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Tag;
use crate::pagination::Page;

/// One page of the AWS account listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct AwsAccounts {
    pub aws_accounts: Vec<AwsAccount>,
}

impl Page for AwsAccounts {
    type Item = AwsAccount;

    fn into_items(self) -> Vec<AwsAccount> {
        self.aws_accounts
    }
}

/// An AWS account enabled in CloudHealth.
///
/// `id` is assigned by CloudHealth; leave it `None` when creating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AwsAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    /// 12-digit AWS account number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_public_fields: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_only: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AwsAccountStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<AwsAccountAuthentication>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl AwsAccount {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Health of the AWS integration as last reported by CloudHealth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AwsAccountStatus {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
}

/// Credentials CloudHealth uses to reach the account: either an access key
/// pair or an assumable IAM role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AwsAccountAuthentication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assume_role_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assume_role_external_id: Option<String>,
}

/// External ID to put in the trust policy of the IAM role CloudHealth assumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwsExternalId {
    #[serde(rename = "generated_external_id")]
    pub external_id: String,
}
