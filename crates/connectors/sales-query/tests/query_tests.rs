use axum::http::StatusCode;
use sales_query::extract::API_KEY_HEADER;
use serde_json::json;
use tests_common::router::{create_client, request, request_json, TEST_API_KEY};

#[tokio::test]
async fn show_all_orders_returns_every_seeded_row() {
    let client = create_client().await;
    let body = request_json(&client, "/query", "show all orders").await;

    assert_eq!(body["query"], "show all orders");
    assert_eq!(body["sql"], "SELECT * FROM sales_table;");
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 9);
    assert_eq!(
        results[0],
        json!([1, "ODID001", "T-Shirts", "Shipped", 1599.0, "2025-03-28 14:30"])
    );
}

#[tokio::test]
async fn count_all_shoes_orders() {
    let client = create_client().await;
    let body = request_json(&client, "/query", "count all shoes orders").await;

    assert_eq!(
        body["sql"],
        "SELECT COUNT(*) FROM sales_table WHERE category = 'Shoes';"
    );
    assert_eq!(body["results"], json!([[3]]));
}

#[tokio::test]
async fn show_all_pending_orders() {
    let client = create_client().await;
    let body = request_json(&client, "/query", "show all pending orders").await;

    let order_ids = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row[1].clone())
        .collect::<Vec<_>>();
    assert_eq!(order_ids, vec![json!("ODID002"), json!("ODID007")]);
}

#[tokio::test]
async fn the_query_is_echoed_as_sent() {
    let client = create_client().await;
    let body = request_json(&client, "/query", "  Count All T-Shirts Orders ").await;

    assert_eq!(body["query"], "  Count All T-Shirts Orders ");
    assert_eq!(body["results"], json!([[3]]));
}

#[tokio::test]
async fn count_all_orders() {
    let client = create_client().await;
    let body = request_json(&client, "/query", "count all orders").await;

    assert_eq!(body["results"], json!([[9]]));
}

#[tokio::test]
async fn unsupported_query_is_a_bad_request() {
    let client = create_client().await;
    let response = request(&client, "/query", "list every order please").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>().await,
        json!({ "message": "Unsupported query" })
    );
}

#[tokio::test]
async fn unknown_keyword_is_a_bad_request() {
    let client = create_client().await;
    let response = request(&client, "/query", "show all bicycles orders").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_natural_query_gets_a_json_error() {
    let client = create_client().await;
    for endpoint in ["/query", "/explain", "/validate"] {
        let response = client
            .get(endpoint)
            .header(API_KEY_HEADER, TEST_API_KEY)
            .send()
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{endpoint}");
        let body = response.json::<serde_json::Value>().await;
        let message = body["message"].as_str().unwrap();
        assert!(message.contains("natural_query"), "{message}");
    }
}
