//! SSO credentials.
//!
//! Credentials arrive base64-encoded (CLI flag or environment) and are decoded
//! exactly once at startup. The password never appears in `Debug` output.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;

use presensi_types::PortalError;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// Decode a base64 username/password pair.
    pub fn from_base64(username_b64: &str, password_b64: &str) -> Result<Self, PortalError> {
        let username = decode_field("username", username_b64)?;
        if username.is_empty() {
            return Err(PortalError::config("username decodes to an empty string"));
        }
        let password = decode_field("password", password_b64)?;
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

fn decode_field(name: &str, encoded: &str) -> Result<String, PortalError> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| PortalError::config(format!("{name} is not valid base64: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| PortalError::config(format!("{name} is not valid UTF-8: {e}")))
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_base64_pair() {
        // "mahasiswa@student.uns.ac.id" / "rahasia"
        let creds =
            Credentials::from_base64("bWFoYXNpc3dhQHN0dWRlbnQudW5zLmFjLmlk", "cmFoYXNpYQ==")
                .unwrap();
        assert_eq!(creds.username(), "mahasiswa@student.uns.ac.id");
        assert_eq!(creds.password(), "rahasia");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let creds = Credentials::from_base64(" dXNlcg==\n", "cGFzcw==\n").unwrap();
        assert_eq!(creds, Credentials::new("user", "pass"));
    }

    #[test]
    fn test_rejects_invalid_base64() {
        let err = Credentials::from_base64("not base64!", "cGFzcw==").unwrap_err();
        assert!(matches!(err, PortalError::Config { .. }));
        assert!(err.to_string().contains("username"));
    }

    #[test]
    fn test_rejects_empty_username() {
        let err = Credentials::from_base64("", "cGFzcw==").unwrap_err();
        assert!(matches!(err, PortalError::Config { .. }));
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", Credentials::new("user", "hunter2"));
        assert!(rendered.contains("user"));
        assert!(!rendered.contains("hunter2"));
    }
}
