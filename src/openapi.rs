use axum::Json;
use utoipa::OpenApi;

use crate::{health, summaries};

#[derive(OpenApi)]
#[openapi(
    paths(summaries::handlers::send_url, health::health_check),
    components(schemas(
        summaries::dtos::SendUrlRequest,
        summaries::dtos::SummaryResponse,
        summaries::dtos::SummaryMetadata,
        summaries::dtos::DatabaseStatus,
        summaries::dtos::ErrorResponse,
        health::HealthResponse
    )),
    tags(
        (name = "summaries", description = "Summarize a blog post in English and Urdu"),
        (name = "health", description = "Liveness of the service and its store")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
