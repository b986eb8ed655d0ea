//! API Routes
//!
//! `POST /presensi` runs the SSO login and attendance scrape; `GET /metrics`
//! exposes pipeline counters in Prometheus text format.

mod error;
mod presensi;


use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub use error::ApiError;

pub const NOT_FOUND_BODY: &str = "404 page not found";

pub fn router() -> Router<AppState> {
    Router::new()
        // Any method other than POST is answered like an unknown route.
        .route("/presensi", post(presensi::fetch_attendance).fallback(not_found))
        .route("/metrics", get(get_metrics))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

async fn get_metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        presensi_core::metrics::render_metrics(),
    )
}
