//! Pipeline stages an upstream exchange can fail in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One hop of the login-then-scrape pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// GET of the IdP-initiated login page (AuthState extraction)
    LoginPage,
    /// POST of the credential form to the SSO (SAMLResponse extraction)
    Credentials,
    /// POST of the assertion to the service provider
    AssertionConsumer,
    /// GET of the course overview page
    Overview,
    /// GET of a pending session's detail page
    Detail,
}

impl Stage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoginPage => "login_page",
            Self::Credentials => "credentials",
            Self::AssertionConsumer => "assertion_consumer",
            Self::Overview => "overview",
            Self::Detail => "detail",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
