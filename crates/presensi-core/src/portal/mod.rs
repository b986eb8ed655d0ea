//! SSO login and attendance scraping for the university portal.

pub mod html;
pub mod login;
pub mod scrape;
pub mod session;

use std::sync::Arc;

use presensi_types::{AttendanceReport, PortalConfig, PortalError};

use crate::credentials::Credentials;

pub use login::login;
pub use scrape::scrape_attendance;
pub use session::{Page, PortalSession};

/// Entry point used by the server: configuration plus credentials, nothing else.
///
/// Holds no session state. Every [`fetch_attendance`](Self::fetch_attendance) call
/// logs in from scratch on its own cookie jar, so concurrent callers never share
/// cookies.
#[derive(Debug, Clone)]
pub struct PortalClient {
    config: Arc<PortalConfig>,
    credentials: Arc<Credentials>,
}

impl PortalClient {
    pub fn new(config: PortalConfig, credentials: Credentials) -> Self {
        Self { config: Arc::new(config), credentials: Arc::new(credentials) }
    }

    /// Log in and scrape with a fresh session that is dropped on return.
    pub async fn fetch_attendance(&self) -> Result<AttendanceReport, PortalError> {
        let session = PortalSession::new(&self.config)?;
        login(&session, &self.config, &self.credentials).await?;
        scrape_attendance(&session, &self.config).await
    }
}
