use crate::{
    client::AuthStyle,
    types::{
        AccountPriceBookAssignment, AccountPriceBookAssignments, CustomerPriceBookAssignment,
        CustomerPriceBookAssignments,
    },
    Client, Error,
};

// Customer assignments are only served by the unversioned API, which wants
// the key as a query parameter.
const CUSTOMER_PATH: &str = "price_book_assignments";
const ACCOUNT_PATH: &str = "v1/price_book_account_assignments";
const PAGE_SIZE: u32 = 50;

impl Client {
    pub async fn get_customer_price_book_assignments(
        &self,
    ) -> Result<Vec<CustomerPriceBookAssignment>, Error> {
        self.fetch_all::<CustomerPriceBookAssignments>(
            CUSTOMER_PATH,
            AuthStyle::QueryParam,
            PAGE_SIZE,
        )
        .await
    }

    pub async fn get_customer_price_book_assignment(
        &self,
        id: i64,
    ) -> Result<CustomerPriceBookAssignment, Error> {
        self.get_json(format!("{}/{}", CUSTOMER_PATH, id), AuthStyle::QueryParam)
            .await
    }

    pub async fn delete_customer_price_book_assignment(&self, id: i64) -> Result<(), Error> {
        self.delete(format!("{}/{}", CUSTOMER_PATH, id), AuthStyle::QueryParam)
            .await
    }

    pub async fn get_account_price_book_assignments(
        &self,
    ) -> Result<Vec<AccountPriceBookAssignment>, Error> {
        self.fetch_all::<AccountPriceBookAssignments>(ACCOUNT_PATH, AuthStyle::Header, PAGE_SIZE)
            .await
    }

    pub async fn get_account_price_book_assignment(
        &self,
        id: i64,
    ) -> Result<AccountPriceBookAssignment, Error> {
        self.get_json(format!("{}/{}", ACCOUNT_PATH, id), AuthStyle::Header)
            .await
    }
}
