//! Partner customer types returned by the `/v1/customers` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Tag;
use crate::pagination::Page;

/// One page of the customer listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct Customers {
    pub customers: Vec<Customer>,
}

impl Page for Customers {
    type Item = Customer;

    fn into_items(self) -> Vec<Customer> {
        self.customers
    }
}

/// A tenant managed under a CloudHealth partner account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_percentage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_billing_configuration: Option<CustomerPartnerBillingConfiguration>,

    /// Required by the API on create.
    #[serde(default)]
    pub address: CustomerAddress,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_configuration: Option<CustomerBillingConfiguration>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl Customer {
    pub fn new(name: impl Into<String>, address: CustomerAddress) -> Self {
        Self {
            name: name.into(),
            address,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPartnerBillingConfiguration {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerBillingConfiguration {
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerAddress {
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
}
