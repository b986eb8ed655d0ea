//! `POST /presensi` handler

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::{info, warn};

use presensi_core::metrics;
use presensi_types::PortalError;

use super::ApiError;
use crate::state::AppState;

pub async fn fetch_attendance(State(state): State<AppState>) -> Result<Response, ApiError> {
    let started = Instant::now();
    let outcome = state.portal().fetch_attendance().await;
    let elapsed = started.elapsed().as_secs_f64();

    let report = match outcome {
        Ok(report) => report,
        Err(e) => {
            warn!(stage = ?e.stage(), error = %e, "attendance request failed");
            metrics::record_request("error", elapsed);
            return Err(e.into());
        },
    };

    let body = serde_json::to_vec(&report).map_err(|e| {
        metrics::record_request("error", elapsed);
        ApiError(PortalError::from_json_error(&e))
    })?;

    metrics::record_request("success", elapsed);
    info!(
        completed = report.completed.len(),
        pending = report.pending.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "attendance request served"
    );

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}
