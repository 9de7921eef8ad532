//! Custom price book assignments.
//!
//! A price book is first assigned to a customer
//! ([`CustomerPriceBookAssignment`]), then that assignment is scoped to
//! billing accounts ([`AccountPriceBookAssignment`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::Page;

#[derive(Debug, Serialize, Deserialize)]
pub struct CustomerPriceBookAssignments {
    pub price_book_assignments: Vec<CustomerPriceBookAssignment>,
}

impl Page for CustomerPriceBookAssignments {
    type Item = CustomerPriceBookAssignment;

    fn into_items(self) -> Vec<CustomerPriceBookAssignment> {
        self.price_book_assignments
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPriceBookAssignment {
    pub id: i64,
    pub price_book_id: i64,
    pub target_client_api_id: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountPriceBookAssignments {
    pub price_book_account_assignments: Vec<AccountPriceBookAssignment>,
}

impl Page for AccountPriceBookAssignments {
    type Item = AccountPriceBookAssignment;

    fn into_items(self) -> Vec<AccountPriceBookAssignment> {
        self.price_book_account_assignments
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountPriceBookAssignment {
    pub id: i64,
    pub target_client_api_id: i64,
    pub price_book_assignment_id: i64,
    /// Either `"ALL"` or a list of payer account owner ids.
    #[serde(default)]
    pub billing_account_owner_id: serde_json::Value,
}
