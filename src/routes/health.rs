use crate::models::dto::Message;
use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;
#[derive(OpenApi)]
#[openapi(paths(health_checker_handler))]
/// Defines the OpenAPI document for the health endpoint
pub struct HealthApi;
#[utoipa::path(
    get,
    path = "/health",
    tag = "HEALTH",
    responses(
        (status = OK, description = "Success", body = Message)
    )
)]
pub async fn health_checker_handler() -> impl IntoResponse {
    Json(Message::new("OK, I'm alive!"))
}
