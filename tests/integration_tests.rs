use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use petsheets::prelude::*;
use petsheets::records::Tip;

fn fast_client(uri: &str, retries: u32) -> Petsheets {
    let options = ClientOptions::default()
        .with_retries(retries)
        .with_backoff_base(Duration::from_millis(50));
    Petsheets::new_with_options(uri, options)
}

fn rows_body(rows: serde_json::Value) -> serde_json::Value {
    json!({ "success": true, "data": rows })
}

#[tokio::test]
async fn fetch_returns_rows_including_the_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .and(query_param("sheet", "Tips"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows_body(json!([
            ["ID", "Title"],
            ["t1", "First tip"]
        ]))))
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 3);
    let rows = client.sheets().fetch_rows("Tips").await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["ID", "Title"]);
    assert_eq!(rows[1], vec!["t1", "First tip"]);
}

#[tokio::test]
async fn fetch_retries_through_transient_failures_with_backoff() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(rows_body(json!([["ID"], ["t1"]]))),
        )
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 3);
    let started = Instant::now();
    let rows = client.sheets().fetch_rows("Tips").await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(rows.len(), 2);
    // two failed attempts wait base and 2x base before the third succeeds
    assert!(
        elapsed >= Duration::from_millis(150),
        "elapsed only {:?}",
        elapsed
    );
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn exhausted_retries_surface_the_last_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "error": "quota exceeded"
            })),
        )
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 3);
    let result = client.sheets().fetch_rows("Tips").await;

    let error = result.unwrap_err();
    assert!(error.to_string().contains("quota exceeded"), "{}", error);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn explicit_retry_budget_overrides_the_configured_one() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 3);
    let result = client.sheets().fetch_rows_with_retries("Tips", 1).await;

    assert!(result.is_err());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn append_posts_the_row_and_returns_the_raw_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/data"))
        .and(body_json(json!({ "sheet": "Tips", "data": ["t9", "New tip"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "result": { "updatedRange": "Tips!A7:B7" }
        })))
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 3);
    let values = vec!["t9".to_string(), "New tip".to_string()];
    let response = client.sheets().append_row("Tips", &values).await.unwrap();

    assert_eq!(
        response["result"]["updatedRange"].as_str(),
        Some("Tips!A7:B7")
    );
}

#[tokio::test]
async fn append_with_a_falsy_envelope_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/data"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "error": "sheet is read-only" })),
        )
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 3);
    let values = vec!["t9".to_string()];
    let error = client
        .sheets()
        .append_row("Tips", &values)
        .await
        .unwrap_err();

    assert!(error.to_string().contains("read-only"), "{}", error);
}

#[tokio::test]
async fn mutations_do_not_retry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/data"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 3);
    let values = vec!["t9".to_string()];
    let result = client.sheets().append_row("Tips", &values).await;

    assert!(result.is_err());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_sends_the_one_based_row_index() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/data"))
        .and(body_json(json!({
            "sheet": "Vets",
            "rowIndex": 4,
            "values": ["v3", "Happy Paws Clinic"]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "result": { "updatedRows": 1 } })),
        )
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 3);
    let values = vec!["v3".to_string(), "Happy Paws Clinic".to_string()];
    let response = client
        .sheets()
        .update_row("Vets", 4, &values)
        .await
        .unwrap();

    assert_eq!(response["result"]["updatedRows"].as_i64(), Some(1));
}

#[tokio::test]
async fn delete_passes_sheet_and_row_index_as_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/data"))
        .and(query_param("sheet", "Stories"))
        .and(query_param("rowIndex", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": {} })))
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 3);
    let response = client.sheets().delete_row("Stories", 7).await.unwrap();

    assert!(response["result"].is_object());
}

#[tokio::test]
async fn content_getter_skips_the_header_and_decodes_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .and(query_param("sheet", "Tips"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows_body(json!([
            [
                "ID", "Title", "Category", "Content", "Image", "Created", "Pet type",
                "Difficulty", "Author", "Duration", "Requirements", "Frequency",
                "Priority", "Featured"
            ],
            [
                "t1",
                "Title",
                "Cat",
                "Body",
                "img.jpg",
                "2024-01-01T00:00:00Z",
                "Dogs",
                "Beginner",
                "Author",
                "5 min",
                "",
                "Daily",
                "High",
                "Yes"
            ]
        ]))))
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 3);
    let tips = client.content().tips().await.unwrap();

    assert_eq!(
        tips,
        vec![Tip {
            id: "t1".to_string(),
            title: "Title".to_string(),
            category: "Cat".to_string(),
            content: "Body".to_string(),
            image_url: "img.jpg".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            pet_type: "Dogs".to_string(),
            difficulty: "Beginner".to_string(),
            author: "Author".to_string(),
            duration: "5 min".to_string(),
            requirements: "".to_string(),
            frequency: "Daily".to_string(),
            priority: "High".to_string(),
            featured: true,
        }]
    );
}

#[tokio::test]
async fn independent_getters_can_be_joined_concurrently() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .and(query_param("sheet", "Tips"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(rows_body(json!([["ID"], ["t1"]]))),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .and(query_param("sheet", "Vets"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(rows_body(json!([["ID"], ["v1"]]))),
        )
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 3);
    let content = client.content();
    let (tips, vets) = tokio::join!(content.tips(), content.vets());

    assert_eq!(tips.unwrap().len(), 1);
    assert_eq!(vets.unwrap().len(), 1);
}

#[tokio::test]
async fn strict_rows_reject_over_wide_sheets() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .and(query_param("sheet", "Pets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows_body(json!([
            ["ID"],
            ["p1", "Rex", "Dog", "Beagle", "3", "", "", "", "Available", "extra column"]
        ]))))
        .mount(&server)
        .await;

    let options = ClientOptions::default()
        .with_backoff_base(Duration::from_millis(10))
        .with_row_policy(RowPolicy::default().with_strict_width(true));
    let client = Petsheets::new_with_options(&server.uri(), options);

    assert!(client.content().pets().await.is_err());
}

#[tokio::test]
async fn create_order_converts_to_minor_units() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .and(header("Authorization", "Basic a2V5OnNlY3JldA=="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "order_abc123",
            "amount": 50000,
            "currency": "INR",
            "status": "created"
        })))
        .mount(&server)
        .await;

    let client = Petsheets::new(&server.uri());
    let payments = client.payments("key", "secret").with_base_url(&server.uri());
    let order = payments.create_order(500).await.unwrap();

    assert_eq!(order.id, "order_abc123");
    assert_eq!(order.amount, 50000);
    assert_eq!(order.currency, "INR");

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["amount"].as_i64(), Some(50000));
    assert_eq!(body["currency"].as_str(), Some("INR"));
    assert!(body["receipt"].as_str().unwrap().starts_with("receipt_"));
}

#[tokio::test]
async fn gateway_failures_surface_as_payment_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "bad credentials" })),
        )
        .mount(&server)
        .await;

    let client = Petsheets::new(&server.uri());
    let payments = client.payments("key", "wrong").with_base_url(&server.uri());
    let error = payments.create_order(100).await.unwrap_err();

    assert!(matches!(error, Error::Payment(_)), "{:?}", error);
}
