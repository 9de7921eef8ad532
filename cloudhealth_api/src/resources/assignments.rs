use crate::{
    client::AuthStyle,
    types::{AwsAccountAssignment, AwsAccountAssignments},
    Client, Error,
};

const PATH: &str = "v2/aws_account_assignments";
const PAGE_SIZE: u32 = 50;

impl Client {
    pub async fn get_aws_account_assignments(&self) -> Result<Vec<AwsAccountAssignment>, Error> {
        self.fetch_all::<AwsAccountAssignments>(PATH, AuthStyle::Header, PAGE_SIZE)
            .await
    }

    pub async fn get_aws_account_assignment(&self, id: i64) -> Result<AwsAccountAssignment, Error> {
        self.get_json(format!("{}/{}", PATH, id), AuthStyle::Header)
            .await
    }

    /// Assigns an AWS account to a customer.
    pub async fn create_aws_account_assignment(
        &self,
        assignment: &AwsAccountAssignment,
    ) -> Result<AwsAccountAssignment, Error> {
        self.create(PATH.to_string(), AuthStyle::Header, assignment)
            .await
    }

    /// Updates an existing assignment. `assignment.id` must be set.
    pub async fn update_aws_account_assignment(
        &self,
        assignment: &AwsAccountAssignment,
    ) -> Result<AwsAccountAssignment, Error> {
        let id = assignment
            .id
            .ok_or_else(|| Error::Validation("assignment id is required for update".into()))?;
        self.update(format!("{}/{}", PATH, id), AuthStyle::Header, assignment)
            .await
    }

    pub async fn delete_aws_account_assignment(&self, id: i64) -> Result<(), Error> {
        self.delete(format!("{}/{}", PATH, id), AuthStyle::Header)
            .await
    }
}
