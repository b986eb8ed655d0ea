//! Upstream portal configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PORTAL_ORIGIN: &str = "https://ocw.uns.ac.id";
pub const DEFAULT_SSO_ORIGIN: &str = "https://sso.uns.ac.id";

const LOGIN_PATH: &str = "/saml/login";
const CREDENTIALS_PATH: &str = "/module.php/core/loginuserpass.php";
const ACS_PATH: &str = "/saml/acs";
const OVERVIEW_PATH: &str = "/presensi-online-mahasiswa/kuliah-berlangsung";

/// Where the SSO and the attendance portal live, and how hard to push them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortalConfig {
    /// IdP-initiated login page carrying the `AuthState` form field
    pub login_url: String,
    /// SSO endpoint accepting `AuthState`, `username` and `password`
    pub credentials_url: String,
    /// Service-provider assertion consumer accepting `SAMLResponse`
    pub acs_url: String,
    /// Page listing today's class sessions
    pub overview_url: String,
    /// Origin prefixed to relative links found on portal pages
    pub base_origin: String,
    /// Deadline for each upstream request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Maximum detail pages fetched at once
    #[serde(default = "default_detail_concurrency")]
    pub detail_concurrency: usize,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_detail_concurrency() -> usize {
    4
}

impl PortalConfig {
    /// Derive every endpoint from the portal (service provider) and SSO (IdP) origins.
    pub fn from_origins(portal_origin: &str, sso_origin: &str) -> Self {
        let portal = portal_origin.trim_end_matches('/');
        let sso = sso_origin.trim_end_matches('/');
        Self {
            login_url: format!("{portal}{LOGIN_PATH}"),
            credentials_url: format!("{sso}{CREDENTIALS_PATH}"),
            acs_url: format!("{portal}{ACS_PATH}"),
            overview_url: format!("{portal}{OVERVIEW_PATH}"),
            base_origin: portal.to_string(),
            timeout_secs: default_timeout_secs(),
            detail_concurrency: default_detail_concurrency(),
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_detail_concurrency(mut self, detail_concurrency: usize) -> Self {
        self.detail_concurrency = detail_concurrency.max(1);
        self
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::from_origins(DEFAULT_PORTAL_ORIGIN, DEFAULT_SSO_ORIGIN)
    }
}
