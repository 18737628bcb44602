mod extract;
mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

pub use extract::{BodyRejection, JsonBody};
pub use handlers::{concise, health, not_found};
pub use models::{ConciseRequest, ConciseResponse, ErrorResponse, HealthResponse};

pub fn router() -> Router {
    Router::new()
        .route("/test", get(health))
        .route("/concise", post(concise))
        .fallback(not_found)
}
