use crate::{client::AuthStyle, query::CostHistoryQuery, types::AwsCostHistoryReport, Client, Error};

const COST_HISTORY_PATH: &str = "olap_reports/cost/history";

impl Client {
    /// Runs the AWS cost history report broken down by service category.
    ///
    /// Fails with [`Error::Validation`] without touching the network when a
    /// required parameter is blank.
    pub async fn get_aws_cost_history_report(
        &self,
        query: &CostHistoryQuery,
    ) -> Result<AwsCostHistoryReport, Error> {
        query.validate()?;
        let path = format!("{}?{}", COST_HISTORY_PATH, query.to_query_string());
        self.get_json(path, AuthStyle::Header).await
    }
}
