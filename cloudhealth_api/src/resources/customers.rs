use crate::{
    client::AuthStyle,
    types::{Customer, Customers},
    Client, Error,
};

const PATH: &str = "v1/customers";
const PAGE_SIZE: u32 = 100;

impl Client {
    /// Fetches every customer under the partner account.
    pub async fn get_customers(&self) -> Result<Vec<Customer>, Error> {
        self.fetch_all::<Customers>(PATH, AuthStyle::Header, PAGE_SIZE)
            .await
    }

    pub async fn get_customer(&self, id: i64) -> Result<Customer, Error> {
        self.get_json(format!("{}/{}", PATH, id), AuthStyle::Header)
            .await
            .map_err(|e| e.remap_not_found(|| Error::CustomerNotFound { id }))
    }

    pub async fn create_customer(&self, customer: &Customer) -> Result<Customer, Error> {
        self.create(PATH.to_string(), AuthStyle::Header, customer)
            .await
            .map_err(|e| {
                e.remap_conflict(|| Error::CustomerExists {
                    name: customer.name.clone(),
                })
            })
    }

    /// Updates an existing customer. `customer.id` must be set.
    pub async fn update_customer(&self, customer: &Customer) -> Result<Customer, Error> {
        let id = customer
            .id
            .ok_or_else(|| Error::Validation("customer id is required for update".into()))?;
        self.update(format!("{}/{}", PATH, id), AuthStyle::Header, customer)
            .await
            .map_err(|e| {
                e.remap_not_found(|| Error::CustomerNotFound { id })
                    .remap_conflict(|| Error::CustomerExists {
                        name: customer.name.clone(),
                    })
            })
    }

    pub async fn delete_customer(&self, id: i64) -> Result<(), Error> {
        self.delete(format!("{}/{}", PATH, id), AuthStyle::Header)
            .await
            .map_err(|e| e.remap_not_found(|| Error::CustomerNotFound { id }))
    }
}
