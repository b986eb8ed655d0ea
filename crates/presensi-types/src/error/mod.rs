//! Typed error definitions for Presensi Gateway.
//!
//! Every failure carries the pipeline [`Stage`] it happened in, so the server can
//! report where an upstream exchange broke without inspecting message text.

mod portal;
mod stage;

pub use portal::PortalError;
pub use stage::Stage;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = PortalError::MissingField {
            stage: Stage::LoginPage,
            field: "AuthState".to_string(),
        };

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("MissingField"));
        assert!(json.contains("login_page"));
        assert!(json.contains("AuthState"));

        let deserialized: PortalError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = PortalError::UpstreamStatus { stage: Stage::Overview, status: 503 };

        let msg = format!("{}", err);
        assert!(msg.contains("overview"));
        assert!(msg.contains("503"));
    }
}
