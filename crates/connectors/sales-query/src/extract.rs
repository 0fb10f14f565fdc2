use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use super::{error::ServerError, state::ServerState, types::input::NaturalQueryParams};

/// The header clients put their API key in.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Proof that the request carried the configured API key.
///
/// Add this as the first extractor of a handler to gate it.
pub struct Authorized;

#[async_trait]
impl FromRequestParts<ServerState> for Authorized {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let provided = parts
            .headers
            .get(API_KEY_HEADER)
            .ok_or(ServerError::MissingApiKey)?;

        if provided.as_bytes() == state.configuration.api_key.as_bytes() {
            Ok(Authorized)
        } else {
            Err(ServerError::InvalidApiKey)
        }
    }
}

/// The `natural_query` parameter of the query string. A missing or
/// malformed query string is answered with the usual JSON error body.
pub struct NaturalQuery(pub NaturalQueryParams);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for NaturalQuery {
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<NaturalQueryParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ServerError::InvalidRequest(rejection.body_text()))?;
        Ok(NaturalQuery(params))
    }
}
