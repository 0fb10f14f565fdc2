use axum::http::StatusCode;
use serde_json::json;
use tests_common::router::{create_client, request, request_json};

#[tokio::test]
async fn explain_returns_the_sql_without_results() {
    let client = create_client().await;
    let body = request_json(&client, "/explain", "show all delivered orders").await;

    assert_eq!(
        body,
        json!({
            "query": "show all delivered orders",
            "sql": "SELECT * FROM sales_table WHERE status = 'Delivered';"
        })
    );
}

#[tokio::test]
async fn explain_unsupported_query() {
    let client = create_client().await;
    let response = request(&client, "/explain", "show all").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>().await,
        json!({ "message": "Unsupported query" })
    );
}
