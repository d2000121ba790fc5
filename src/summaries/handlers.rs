use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::{
    app_state::AppState,
    pipeline::{PipelineFailure, PipelineOutcome, Stage},
    summaries::dtos::{ErrorResponse, SendUrlRequest, SummaryResponse},
};

fn error_response(status: StatusCode, error: &str, details: Option<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            details,
        }),
    )
        .into_response()
}

fn stage_error(stage: Stage) -> &'static str {
    match stage {
        Stage::Validate => "Invalid URL",
        Stage::Fetch => "Failed to fetch blog content",
        Stage::Extract => "Could not extract enough content from the page",
        Stage::Summarize => "Failed to generate summary",
        Stage::Translate => "Failed to translate summary",
    }
}

fn failure_response(failure: PipelineFailure, expose_details: bool) -> Response {
    let status = StatusCode::from_u16(failure.error.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let details = expose_details.then(|| failure.message());
    error_response(status, stage_error(failure.stage), details)
}

#[utoipa::path(
    post,
    path = "/api/send-url",
    tag = "summaries",
    request_body = SendUrlRequest,
    responses(
        (status = 200, description = "Blog post summarized in English and Urdu", body = SummaryResponse),
        (status = 400, description = "Missing or invalid URL, or too little content on the page", body = ErrorResponse),
        (status = 405, description = "Only POST is accepted", body = ErrorResponse),
        (status = 500, description = "Fetching or generation failed", body = ErrorResponse)
    )
)]
pub async fn send_url(
    State(state): State<AppState>,
    payload: Result<Json<SendUrlRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected request body");
            let details = state
                .expose_error_details
                .then(|| rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, "Invalid request body", details);
        }
    };

    let url = match payload.validate() {
        Ok(url) => url,
        Err(error) => return error_response(StatusCode::BAD_REQUEST, &error, None),
    };

    match state.pipeline.run(url).await {
        PipelineOutcome::Success(success) => {
            info!(url = %success.url, persisted = success.persisted, "summary ready");
            (StatusCode::OK, Json(SummaryResponse::from(success))).into_response()
        }
        PipelineOutcome::Failure(failure) => {
            failure_response(failure, state.expose_error_details)
        }
    }
}

pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", None)
}
