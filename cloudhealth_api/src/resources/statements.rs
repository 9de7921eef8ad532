use crate::{
    client::AuthStyle,
    types::{BillingArtifact, BillingArtifacts},
    Client, Error,
};

const PATH: &str = "v1/customer_statements";
const PAGE_SIZE: u32 = 100;

impl Client {
    /// Fetches the statements of every customer.
    pub async fn get_customer_statements(&self) -> Result<Vec<BillingArtifact>, Error> {
        self.fetch_all::<BillingArtifacts>(PATH, AuthStyle::Header, PAGE_SIZE)
            .await
    }

    /// Fetches the statements of one customer.
    pub async fn get_customer_statements_for(
        &self,
        customer_id: i64,
    ) -> Result<Vec<BillingArtifact>, Error> {
        let path = format!("{}?client_api_id={}", PATH, customer_id);
        self.fetch_all::<BillingArtifacts>(&path, AuthStyle::Header, PAGE_SIZE)
            .await
    }
}
