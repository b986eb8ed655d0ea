//! Three-hop SAML login.
//!
//! ```text
//! GET  login_url        -> AuthState
//! POST credentials_url  {AuthState, username, password} -> SAMLResponse
//! POST acs_url          {SAMLResponse} -> portal session cookie
//! ```
//!
//! Each hop needs the value extracted by the previous one; the first failure ends
//! the sequence and no later hop is attempted.

use tracing::{debug, info};

use presensi_types::{PortalConfig, PortalError, Stage};

use super::html::{self, AUTH_STATE_FIELD, SAML_RESPONSE_FIELD};
use super::session::PortalSession;
use crate::credentials::Credentials;

/// Per-attempt correlation value issued by the IdP login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState(String);

/// Signed assertion handed from the IdP to the portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamlAssertion(String);

/// Authenticate `session` against the SSO. On success the session's cookie jar
/// carries the portal's session cookie.
pub async fn login(
    session: &PortalSession,
    config: &PortalConfig,
    credentials: &Credentials,
) -> Result<(), PortalError> {
    let auth_state = fetch_auth_state(session, config).await?;
    let assertion = submit_credentials(session, config, credentials, &auth_state).await?;
    post_assertion(session, config, &assertion).await?;
    info!(username = credentials.username(), "SSO login completed");
    Ok(())
}

pub async fn fetch_auth_state(
    session: &PortalSession,
    config: &PortalConfig,
) -> Result<AuthState, PortalError> {
    let page = session.get(Stage::LoginPage, &config.login_url).await?;
    let token = html::auth_state(&page.body).ok_or_else(|| PortalError::MissingField {
        stage: Stage::LoginPage,
        field: AUTH_STATE_FIELD.to_string(),
    })?;
    debug!(landed_on = %page.url, "obtained AuthState");
    Ok(AuthState(token))
}

/// A missing `SAMLResponse` usually means the SSO rejected the credentials and
/// re-rendered its login form.
pub async fn submit_credentials(
    session: &PortalSession,
    config: &PortalConfig,
    credentials: &Credentials,
    auth_state: &AuthState,
) -> Result<SamlAssertion, PortalError> {
    let fields = [
        (AUTH_STATE_FIELD, auth_state.0.as_str()),
        ("username", credentials.username()),
        ("password", credentials.password()),
    ];
    let page = session.post_form(Stage::Credentials, &config.credentials_url, &fields).await?;
    let assertion = html::saml_response(&page.body).ok_or_else(|| PortalError::MissingField {
        stage: Stage::Credentials,
        field: SAML_RESPONSE_FIELD.to_string(),
    })?;
    debug!(bytes = assertion.len(), "obtained SAMLResponse");
    Ok(SamlAssertion(assertion))
}

/// The response body carries nothing we need; only the cookie it sets matters.
pub async fn post_assertion(
    session: &PortalSession,
    config: &PortalConfig,
    assertion: &SamlAssertion,
) -> Result<(), PortalError> {
    let fields = [(SAML_RESPONSE_FIELD, assertion.0.as_str())];
    let page = session.post_form(Stage::AssertionConsumer, &config.acs_url, &fields).await?;
    debug!(landed_on = %page.url, "assertion accepted");
    Ok(())
}
