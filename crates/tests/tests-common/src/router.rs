//! Build a router over a freshly seeded in-memory database.

use axum::http::StatusCode;
use axum::Router;
use axum_test_helper::{TestClient, TestResponse};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use sales_query::extract::API_KEY_HEADER;
use sales_query::{routes, state};
use sales_query_configuration::environment::{FixedEnvironment, Variable};
use sales_query_configuration::{make_runtime_configuration, ParsedConfiguration};

/// The API key every test router accepts.
pub const TEST_API_KEY: &str = "secret-api";

/// Create a router with the default configuration, resolving its secrets
/// from a fixed environment that points at an in-memory database.
pub async fn create_router() -> Router {
    let _ = env_logger::builder().is_test(true).try_init();

    let environment = FixedEnvironment::from([
        (Variable::new("SALES_QUERY_API_KEY"), TEST_API_KEY.to_string()),
        (
            Variable::new("SALES_QUERY_DATABASE_URL"),
            "sqlite::memory:".to_string(),
        ),
    ]);
    let configuration = make_runtime_configuration(ParsedConfiguration::initial(), environment)
        .expect("make_runtime_configuration");
    let state = state::create_state(configuration)
        .await
        .expect("create_state");

    routes::create_router(state)
}

pub async fn create_client() -> TestClient {
    TestClient::new(create_router().await)
}

/// The path of an endpoint with a phrase in its query string.
pub fn natural_query_path(endpoint: &str, natural_query: &str) -> String {
    let encoded = utf8_percent_encode(natural_query, NON_ALPHANUMERIC);
    format!("{endpoint}?natural_query={encoded}")
}

/// Send an authorized request for a phrase to an endpoint.
pub async fn request(client: &TestClient, endpoint: &str, natural_query: &str) -> TestResponse {
    client
        .get(&natural_query_path(endpoint, natural_query))
        .header(API_KEY_HEADER, TEST_API_KEY)
        .send()
        .await
}

/// Send an authorized request for a phrase and decode the successful response.
pub async fn request_json(
    client: &TestClient,
    endpoint: &str,
    natural_query: &str,
) -> serde_json::Value {
    let response = request(client, endpoint, natural_query).await;
    assert_eq!(response.status(), StatusCode::OK, "{endpoint} {natural_query}");
    response.json().await
}

#[cfg(test)]
mod tests {
    use super::natural_query_path;

    #[test]
    fn query_string_reserved_characters_are_encoded() {
        assert_eq!(
            natural_query_path("/query", "show all orders&a=b?#"),
            "/query?natural_query=show%20all%20orders%26a%3Db%3F%23"
        );
        assert_eq!(
            natural_query_path("/query", "ü 100%"),
            "/query?natural_query=%C3%BC%20100%25"
        );
    }
}
