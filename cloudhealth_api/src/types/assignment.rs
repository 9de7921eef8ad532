//! Assignments of AWS accounts to partner customers (`/v2/aws_account_assignments`).

use serde::{Deserialize, Serialize};

use crate::pagination::Page;

/// One page of the assignment listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct AwsAccountAssignments {
    pub aws_account_assignments: Vec<AwsAccountAssignment>,
}

impl Page for AwsAccountAssignments {
    type Item = AwsAccountAssignment;

    fn into_items(self) -> Vec<AwsAccountAssignment> {
        self.aws_account_assignments
    }
}

/// Links an AWS account (by owner id) to a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsAccountAssignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub owner_id: String,
    pub customer_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_account_owner_id: Option<String>,
}
