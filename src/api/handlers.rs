use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::concise;

use super::{
    extract::JsonBody,
    models::{ConciseRequest, ConciseResponse, ErrorResponse, HealthResponse},
};

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

pub async fn concise(JsonBody(req): JsonBody<ConciseRequest>) -> Json<ConciseResponse> {
    let answer = concise::concise(&req.selection, &req.title, &req.text, &req.question);
    debug!(
        hostname = %req.hostname,
        kind = %answer.kind,
        "answered /concise"
    );

    Json(ConciseResponse {
        answer: answer.text,
    })
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
