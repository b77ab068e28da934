use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Fixed greeting identifying this deployment.
pub const HELLO_MESSAGE: &str = "hello from demo1-471009";

#[derive(Debug, Serialize, ToSchema)]
pub struct HelloResponse {
    pub message: &'static str,
}

/// Greeting endpoint
///
/// Returns 200 OK with a fixed greeting message.
#[utoipa::path(
    get,
    path = "/hello",
    responses(
        (status = 200, description = "Greeting retrieved successfully", body = HelloResponse),
    ),
    tag = "hello"
)]
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: HELLO_MESSAGE,
    })
}
