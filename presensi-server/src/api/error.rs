//! Mapping of pipeline failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use presensi_types::{PortalError, Stage};

/// A failed `/presensi` request. Only this request fails; the server keeps serving.
#[derive(Debug)]
pub struct ApiError(pub PortalError);

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    stage: Option<Stage>,
    message: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        if self.0.is_timeout() {
            StatusCode::GATEWAY_TIMEOUT
        } else if self.0.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<PortalError> for ApiError {
    fn from(err: PortalError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body =
            ErrorBody { status: "error", stage: self.0.stage(), message: self.0.to_string() };
        (status, Json(body)).into_response()
    }
}
