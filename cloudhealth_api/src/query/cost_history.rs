//! Query builder for the AWS cost history report.

use url::{form_urlencoded, Url};

use crate::Error;

const DIMENSION: &str = "AWS-Service-Category";

/// Parameters of a cost history request.
///
/// `measures`, `interval` and `time` are required; [`CostHistoryQuery::validate`]
/// rejects the query before any request is sent if one of them is blank.
#[derive(Clone, Debug, Default)]
pub struct CostHistoryQuery {
    /// Measure to report, e.g. `cost`.
    pub measures: String,
    /// Bucket size: `hourly`, `daily`, `weekly` or `monthly`.
    pub interval: String,
    /// Time selector, e.g. `-1` for the current period.
    pub time: String,
    pub client_api_id: Option<String>,
    pub selected_dimensions: Option<String>,
    pub rejected_dimensions: Option<String>,
    pub target_aws_account_id: Option<String>,
}

impl CostHistoryQuery {
    pub fn with_measures(mut self, measures: &str) -> Self {
        self.measures = measures.to_string();
        self
    }

    pub fn with_interval(mut self, interval: &str) -> Self {
        self.interval = interval.to_string();
        self
    }

    pub fn with_time(mut self, time: &str) -> Self {
        self.time = time.to_string();
        self
    }

    /// Runs the report on behalf of a partner customer.
    pub fn with_client_api_id(mut self, client_api_id: &str) -> Self {
        self.client_api_id = Some(client_api_id.to_string());
        self
    }

    /// Keeps only the given service category members.
    pub fn with_selected_dimensions(mut self, dimensions: &str) -> Self {
        self.selected_dimensions = Some(dimensions.to_string());
        self
    }

    /// Drops the given service category members.
    pub fn with_rejected_dimensions(mut self, dimensions: &str) -> Self {
        self.rejected_dimensions = Some(dimensions.to_string());
        self
    }

    pub fn with_target_aws_account_id(mut self, account_id: &str) -> Self {
        self.target_aws_account_id = Some(account_id.to_string());
        self
    }

    /// Checks the required fields, reporting the first blank one.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [
            ("measures", &self.measures),
            ("interval", &self.interval),
            ("time", &self.time),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!(
                    "the `{}` property is required and cannot be blank",
                    name
                )));
            }
        }
        Ok(())
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("dimensions[]", DIMENSION.to_string()),
            ("measures[]", self.measures.clone()),
            ("interval", self.interval.clone()),
            ("filters[]", format!("time:select:{}", self.time)),
        ];
        if let Some(id) = non_blank(&self.client_api_id) {
            pairs.push(("client_api_id", id.to_string()));
        }
        if let Some(selected) = non_blank(&self.selected_dimensions) {
            pairs.push(("filters[]", format!("{}:select:{}", DIMENSION, selected)));
        }
        if let Some(rejected) = non_blank(&self.rejected_dimensions) {
            pairs.push(("filters[]", format!("{}:reject:{}", DIMENSION, rejected)));
        }
        if let Some(account) = non_blank(&self.target_aws_account_id) {
            pairs.push(("filters[]", format!("AWS-Account:select:{}", account)));
        }
        pairs
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().extend_pairs(self.pairs());
        url
    }

    /// The encoded query string, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monthly_cost() -> CostHistoryQuery {
        CostHistoryQuery::default()
            .with_measures("cost")
            .with_interval("monthly")
            .with_time("-1")
    }

    #[test]
    fn required_parameters_only() {
        insta::assert_snapshot!(
            monthly_cost().to_query_string(),
            @"dimensions%5B%5D=AWS-Service-Category&measures%5B%5D=cost&interval=monthly&filters%5B%5D=time%3Aselect%3A-1"
        );
    }

    #[test]
    fn optional_filters_follow_required_ones() {
        let query = monthly_cost()
            .with_client_api_id("42")
            .with_selected_dimensions("EC2")
            .with_rejected_dimensions("S3")
            .with_target_aws_account_id("123456789012");
        insta::assert_snapshot!(
            query.to_query_string(),
            @"dimensions%5B%5D=AWS-Service-Category&measures%5B%5D=cost&interval=monthly&filters%5B%5D=time%3Aselect%3A-1&client_api_id=42&filters%5B%5D=AWS-Service-Category%3Aselect%3AEC2&filters%5B%5D=AWS-Service-Category%3Areject%3AS3&filters%5B%5D=AWS-Account%3Aselect%3A123456789012"
        );
    }

    #[test]
    fn add_to_url_matches_query_string() {
        let url = Url::parse("https://api.example.test/olap_reports/cost/history").unwrap();
        let query = monthly_cost().with_client_api_id("42");
        assert_eq!(
            query.add_to_url(&url).query(),
            Some(query.to_query_string().as_str())
        );
    }

    #[test]
    fn blank_optional_filters_are_skipped() {
        let query = monthly_cost().with_client_api_id("  ");
        assert!(!query.to_query_string().contains("client_api_id"));
    }

    #[test]
    fn validate_names_first_blank_field() {
        let err = CostHistoryQuery::default()
            .with_interval("daily")
            .with_time("-1")
            .validate()
            .unwrap_err();
        assert!(matches!(&err, Error::Validation(msg) if msg.contains("`measures`")));

        let err = CostHistoryQuery::default()
            .with_measures("cost")
            .with_interval(" ")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("`interval`"));

        let err = CostHistoryQuery::default()
            .with_measures("cost")
            .with_interval("daily")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("`time`"));

        assert!(monthly_cost().validate().is_ok());
    }
}
