//! HTTP client construction for portal sessions.

use reqwest::cookie::Jar;
use reqwest::{redirect, Client};
use std::sync::Arc;
use std::time::Duration;

use presensi_types::PortalError;

/// Some SSO deployments refuse obvious non-browser agents on the login form.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

const MIN_TIMEOUT_SECS: u64 = 5;
const MAX_REDIRECTS: usize = 10;

/// Shared builder settings for every upstream client.
fn base_builder(timeout_secs: u64) -> reqwest::ClientBuilder {
    let timeout = Duration::from_secs(timeout_secs.max(MIN_TIMEOUT_SECS));
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .tcp_nodelay(true)
        .user_agent(USER_AGENT)
        .redirect(redirect::Policy::limited(MAX_REDIRECTS))
}

/// Create a client bound to its own empty cookie jar.
///
/// Every client returned here has a distinct jar; cookies never leak between
/// two sessions.
pub fn create_session_client(timeout_secs: u64) -> Result<(Client, Arc<Jar>), PortalError> {
    let jar = Arc::new(Jar::default());
    let client = base_builder(timeout_secs)
        .cookie_provider(Arc::clone(&jar))
        .build()
        .map_err(|e| PortalError::config(format!("HTTP client builder failed: {e}")))?;
    Ok((client, jar))
}

/// Effective per-request deadline for a configured timeout.
pub fn effective_timeout_secs(timeout_secs: u64) -> u64 {
    timeout_secs.max(MIN_TIMEOUT_SECS)
}
