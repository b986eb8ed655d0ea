//! Application State
//!
//! Holds the portal client shared by every request. The client carries only
//! configuration and credentials; each request still logs in on its own cookie jar.

use std::sync::Arc;
use std::time::Instant;

use presensi_core::PortalClient;

#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub portal: PortalClient,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(portal: PortalClient) -> Self {
        Self { inner: Arc::new(AppStateInner { portal, started_at: Instant::now() }) }
    }

    pub fn portal(&self) -> &PortalClient {
        &self.inner.portal
    }

    pub fn uptime_secs(&self) -> u64 {
        self.inner.started_at.elapsed().as_secs()
    }
}
