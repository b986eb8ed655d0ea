//! Prometheus metrics for the login and scrape pipeline.
//!
//! - `presensi_requests_total{outcome}` - Counter of `/presensi` requests by outcome
//! - `presensi_request_duration_seconds` - Histogram of full pipeline durations
//! - `presensi_upstream_requests_total{stage}` - Counter of upstream HTTP exchanges
//! - `presensi_blank_fields_total{field}` - Counter of session blocks missing a sub-field
//!
//! Recording is a no-op until [`init_metrics`] installs the recorder.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

use presensi_types::Stage;

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// A login plus scrape is five sequential hops and N detail pages, so the tail is long.
const PIPELINE_LATENCY_BUCKETS: &[f64] = &[0.25, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 30.0, 60.0];

/// Install the global Prometheus recorder. Calling it again is a no-op.
pub fn init_metrics() -> Result<(), String> {
    if PROMETHEUS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new()
        .set_buckets(PIPELINE_LATENCY_BUCKETS)
        .map_err(|e| format!("invalid histogram buckets: {e}"))?
        .install_recorder()
        .map_err(|e| format!("failed to install Prometheus recorder: {e}"))?;

    describe_counter!("presensi_requests_total", "Attendance requests handled, by outcome");
    describe_histogram!(
        "presensi_request_duration_seconds",
        "Duration of the full login and scrape pipeline in seconds"
    );
    describe_counter!("presensi_upstream_requests_total", "Upstream HTTP exchanges, by stage");
    describe_counter!(
        "presensi_blank_fields_total",
        "Session blocks whose sub-field was missing and defaulted to an empty string"
    );

    let _ = PROMETHEUS_HANDLE.set(handle);
    Ok(())
}

/// Render every recorded metric in Prometheus text format.
pub fn render_metrics() -> String {
    PROMETHEUS_HANDLE.get().map(PrometheusHandle::render).unwrap_or_default()
}

pub fn record_request(outcome: &'static str, duration_secs: f64) {
    counter!("presensi_requests_total", "outcome" => outcome).increment(1);
    histogram!("presensi_request_duration_seconds").record(duration_secs);
}

pub fn record_upstream(stage: Stage) {
    counter!("presensi_upstream_requests_total", "stage" => stage.as_str()).increment(1);
}

pub fn record_blank_field(field: &'static str) {
    counter!("presensi_blank_fields_total", "field" => field).increment(1);
}
