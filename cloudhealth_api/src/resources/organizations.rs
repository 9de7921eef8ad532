use url::form_urlencoded;

use crate::{
    client::AuthStyle,
    types::{Organization, Organizations},
    Client, Error,
};

const PATH: &str = "v2/organizations";
const PAGE_SIZE: u32 = 100;

impl Client {
    pub async fn get_organizations(&self) -> Result<Vec<Organization>, Error> {
        self.fetch_all::<Organizations>(PATH, AuthStyle::Header, PAGE_SIZE)
            .await
    }

    /// Looks an organization up by id. The endpoint answers with a filtered
    /// listing, so an empty one means the organization does not exist.
    pub async fn get_organization(&self, org_id: &str) -> Result<Organization, Error> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("org_id", org_id)
            .finish();
        let page: Organizations = self
            .get_json(format!("{}?{}", PATH, query), AuthStyle::Header)
            .await?;
        page.organizations
            .into_iter()
            .next()
            .ok_or(Error::NotFound)
    }
}
