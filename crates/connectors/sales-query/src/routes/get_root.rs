use axum::Json;

use crate::types::output::RootResponse;

pub async fn get_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "sales-query NL to SQL service is running!".to_string(),
    })
}
