//! Domain models for Presensi Gateway.

mod attendance;
mod config;

pub use attendance::{AttendanceReport, CompletedSession, PendingSession, STATUS_SUCCESS};
pub use config::{PortalConfig, DEFAULT_PORTAL_ORIGIN, DEFAULT_SSO_ORIGIN};
