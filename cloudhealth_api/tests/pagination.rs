use cloudhealth_api::{AuthStyle, Client, Error};
use cloudhealth_api::types::AwsAccounts;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn accounts_page(start: usize, count: usize) -> Value {
    let accounts: Vec<Value> = (start..start + count)
        .map(|i| json!({"id": i, "name": format!("account-{}", i)}))
        .collect();
    json!({ "aws_accounts": accounts })
}

async fn mount_accounts_page(server: &MockServer, page: u32, start: usize, count: usize) {
    Mock::given(method("GET"))
        .and(path("/v1/aws_accounts"))
        .and(query_param("page", page.to_string()))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(accounts_page(start, count)))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn stops_after_short_page() {
    let server = MockServer::start().await;
    mount_accounts_page(&server, 1, 0, 100).await;
    mount_accounts_page(&server, 2, 100, 30).await;

    let client = Client::new("key1", &server.uri()).unwrap();
    let accounts = client.get_aws_accounts().await.unwrap();

    assert_eq!(accounts.len(), 130);
    let ids: Vec<i64> = accounts.iter().map(|a| a.id.unwrap()).collect();
    assert_eq!(ids, (0..130).collect::<Vec<i64>>());
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn exact_multiple_costs_one_empty_request() {
    let server = MockServer::start().await;
    mount_accounts_page(&server, 1, 0, 100).await;
    mount_accounts_page(&server, 2, 100, 100).await;
    mount_accounts_page(&server, 3, 200, 0).await;

    let client = Client::new("key1", &server.uri()).unwrap();
    let accounts = client.get_aws_accounts().await.unwrap();

    assert_eq!(accounts.len(), 200);
    assert_eq!(accounts[199].name, "account-199");
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn single_short_page() {
    let server = MockServer::start().await;
    mount_accounts_page(&server, 1, 0, 2).await;

    let client = Client::new("key1", &server.uri()).unwrap();
    assert_eq!(client.get_aws_accounts().await.unwrap().len(), 2);
}

#[tokio::test]
async fn failing_page_aborts_listing() {
    let server = MockServer::start().await;
    mount_accounts_page(&server, 1, 0, 100).await;
    Mock::given(method("GET"))
        .and(path("/v1/aws_accounts"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new("key1", &server.uri()).unwrap();
    let result = client.get_aws_accounts().await;
    assert!(matches!(result, Err(Error::TooManyRequests)));
}

#[tokio::test]
async fn malformed_page_aborts_listing() {
    let server = MockServer::start().await;
    mount_accounts_page(&server, 1, 0, 100).await;
    Mock::given(method("GET"))
        .and(path("/v1/aws_accounts"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"customers": []})))
        .mount(&server)
        .await;

    let client = Client::new("key1", &server.uri()).unwrap();
    let result = client.get_aws_accounts().await;
    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[tokio::test]
async fn statements_for_customer_keep_filter_on_every_page() {
    let server = MockServer::start().await;
    let statement = json!({
        "customer_id": 7,
        "cloud": "AWS",
        "billing_period": "2024-04",
        "total_amount": 1.0,
        "status": "Final",
        "currency": {"name": "USD", "symbol": "$"}
    });

    Mock::given(method("GET"))
        .and(path("/v1/customer_statements"))
        .and(query_param("client_api_id", "7"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "billing_artifacts": vec![statement.clone(); 100]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/customer_statements"))
        .and(query_param("client_api_id", "7"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "billing_artifacts": vec![statement; 5]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new("key1", &server.uri()).unwrap();
    let statements = client.get_customer_statements_for(7).await.unwrap();
    assert_eq!(statements.len(), 105);
}

#[tokio::test]
async fn assignments_use_page_size_fifty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/aws_account_assignments"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "50"))
        .and(header("authorization", "Bearer key1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "aws_account_assignments": [
                {"id": 1, "owner_id": "123456789012", "customer_id": 7}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new("key1", &server.uri()).unwrap();
    let assignments = client.get_aws_account_assignments().await.unwrap();
    assert_eq!(assignments[0].customer_id, 7);
}

#[tokio::test]
async fn customer_price_books_page_with_query_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/price_book_assignments"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "50"))
        .and(query_param("api_key", "key1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "price_book_assignments": [
                {"id": 3, "price_book_id": 100, "target_client_api_id": 7}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new("key1", &server.uri()).unwrap();
    let assignments = client.get_customer_price_book_assignments().await.unwrap();
    assert_eq!(assignments.len(), 1);
}

#[tokio::test]
async fn fetch_all_on_custom_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/aws_accounts"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "10"))
        .and(query_param("api_key", "key1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(accounts_page(0, 3)))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new("key1", &server.uri()).unwrap();
    let accounts = client
        .fetch_all::<AwsAccounts>("v1/aws_accounts", AuthStyle::QueryParam, 10)
        .await
        .unwrap();
    assert_eq!(accounts.len(), 3);
}
