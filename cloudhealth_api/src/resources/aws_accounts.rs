use crate::{
    client::AuthStyle,
    types::{AwsAccount, AwsAccounts, AwsExternalId},
    Client, Error,
};

const PATH: &str = "v1/aws_accounts";
const PAGE_SIZE: u32 = 100;

impl Client {
    /// Fetches every AWS account enabled in CloudHealth.
    pub async fn get_aws_accounts(&self) -> Result<Vec<AwsAccount>, Error> {
        self.fetch_all::<AwsAccounts>(PATH, AuthStyle::Header, PAGE_SIZE)
            .await
    }

    /// Fetches a single AWS account by its CloudHealth id.
    pub async fn get_aws_account(&self, id: i64) -> Result<AwsAccount, Error> {
        self.get_json(format!("{}/{}", PATH, id), AuthStyle::Header)
            .await
            .map_err(|e| e.remap_not_found(|| Error::AwsAccountNotFound { id }))
    }

    /// Enables a new AWS account and returns it as stored by CloudHealth.
    pub async fn create_aws_account(&self, account: &AwsAccount) -> Result<AwsAccount, Error> {
        self.create(PATH.to_string(), AuthStyle::Header, account)
            .await
            .map_err(|e| {
                e.remap_conflict(|| Error::AwsAccountExists {
                    name: account.name.clone(),
                })
            })
    }

    /// Replaces the configuration of an existing account. `account.id` must be set.
    pub async fn update_aws_account(&self, account: &AwsAccount) -> Result<AwsAccount, Error> {
        let id = account
            .id
            .ok_or_else(|| Error::Validation("AWS account id is required for update".into()))?;
        self.update(format!("{}/{}", PATH, id), AuthStyle::Header, account)
            .await
            .map_err(|e| {
                e.remap_not_found(|| Error::AwsAccountNotFound { id })
                    .remap_conflict(|| Error::AwsAccountExists {
                        name: account.name.clone(),
                    })
            })
    }

    pub async fn delete_aws_account(&self, id: i64) -> Result<(), Error> {
        self.delete(format!("{}/{}", PATH, id), AuthStyle::Header)
            .await
            .map_err(|e| e.remap_not_found(|| Error::AwsAccountNotFound { id }))
    }

    /// Fetches the external id to use in the trust policy of the role
    /// CloudHealth assumes in this account.
    pub async fn get_aws_external_id(&self, id: i64) -> Result<AwsExternalId, Error> {
        self.get_json(
            format!("{}/{}/generate_external_id", PATH, id),
            AuthStyle::Header,
        )
        .await
        .map_err(|e| e.remap_not_found(|| Error::AwsAccountNotFound { id }))
    }
}
