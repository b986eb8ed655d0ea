//! Portal pipeline errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Stage;

/// Errors that can occur while logging in to the SSO or scraping the portal.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum PortalError {
    /// Network, DNS or TLS failure talking to upstream
    #[error("Transport failure during {stage}: {message}")]
    Transport { stage: Stage, message: String },

    /// Upstream did not answer within the configured deadline
    #[error("Upstream timed out during {stage} after {timeout_secs}s")]
    Timeout { stage: Stage, timeout_secs: u64 },

    /// Upstream answered with a non-success status after redirects
    #[error("Upstream returned HTTP {status} during {stage}")]
    UpstreamStatus { stage: Stage, status: u16 },

    /// An expected form field or link is missing from the page
    #[error("Expected field '{field}' not found during {stage}")]
    MissingField { stage: Stage, field: String },

    /// The attendance report could not be encoded
    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    /// Credentials or portal configuration are unusable
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl PortalError {
    /// Stage the error happened in, if it came from an upstream exchange.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Transport { stage, .. }
            | Self::Timeout { stage, .. }
            | Self::UpstreamStatus { stage, .. }
            | Self::MissingField { stage, .. } => Some(*stage),
            Self::Serialization { .. } | Self::Config { .. } => None,
        }
    }

    /// Whether the failure originates from the upstream portal rather than from us.
    pub fn is_upstream(&self) -> bool {
        self.stage().is_some()
    }

    /// Whether the failure is a deadline expiry.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::Serialization { message: e.to_string() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}
