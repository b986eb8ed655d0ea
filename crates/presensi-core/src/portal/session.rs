//! Cookie-carrying HTTP session.
//!
//! A [`PortalSession`] owns one reqwest client and one cookie jar. It is created at
//! the start of a `/presensi` request and dropped at its end; the SAML login leaves
//! the portal's session cookie in the jar so the scrape can reuse it.

use reqwest::cookie::Jar;
use reqwest::{Client, Response};
use std::sync::Arc;
use tracing::debug;

use presensi_types::{PortalConfig, PortalError, Stage};

use crate::metrics;
use crate::utils::http::{create_session_client, effective_timeout_secs};

/// A fetched upstream page after redirects.
#[derive(Debug, Clone)]
pub struct Page {
    /// Final URL after redirects
    pub url: String,
    pub body: String,
}

pub struct PortalSession {
    client: Client,
    jar: Arc<Jar>,
    timeout_secs: u64,
}

impl PortalSession {
    /// Fresh session with an empty cookie jar. No network activity.
    pub fn new(config: &PortalConfig) -> Result<Self, PortalError> {
        let (client, jar) = create_session_client(config.timeout_secs)?;
        Ok(Self { client, jar, timeout_secs: effective_timeout_secs(config.timeout_secs) })
    }

    pub async fn get(&self, stage: Stage, url: &str) -> Result<Page, PortalError> {
        debug!(%stage, url, "GET");
        metrics::record_upstream(stage);
        let response =
            self.client.get(url).send().await.map_err(|e| self.transport_error(stage, &e))?;
        self.read(stage, response).await
    }

    /// POST `fields` as `application/x-www-form-urlencoded`.
    pub async fn post_form(
        &self,
        stage: Stage,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<Page, PortalError> {
        debug!(%stage, url, "POST form");
        metrics::record_upstream(stage);
        let response = self
            .client
            .post(url)
            .form(fields)
            .send()
            .await
            .map_err(|e| self.transport_error(stage, &e))?;
        self.read(stage, response).await
    }

    /// Whether the jar holds any cookie for `url`.
    pub fn has_cookies_for(&self, url: &str) -> bool {
        use reqwest::cookie::CookieStore;

        reqwest::Url::parse(url).ok().and_then(|u| self.jar.cookies(&u)).is_some()
    }

    async fn read(&self, stage: Stage, response: Response) -> Result<Page, PortalError> {
        let status = response.status();
        let url = response.url().to_string();
        if !status.is_success() {
            debug!(%stage, status = status.as_u16(), url = %url, "upstream rejected request");
            return Err(PortalError::UpstreamStatus { stage, status: status.as_u16() });
        }
        let body = response.text().await.map_err(|e| self.transport_error(stage, &e))?;
        debug!(%stage, status = status.as_u16(), bytes = body.len(), "upstream responded");
        Ok(Page { url, body })
    }

    fn transport_error(&self, stage: Stage, error: &reqwest::Error) -> PortalError {
        if error.is_timeout() {
            PortalError::Timeout { stage, timeout_secs: self.timeout_secs }
        } else {
            PortalError::Transport { stage, message: error.to_string() }
        }
    }
}
