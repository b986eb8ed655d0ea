//! # Presensi Types
//!
//! Models, configuration and error definitions for Presensi Gateway.
//!
//! - **`error`** - Typed errors for every stage of the SSO login and scrape pipeline
//! - **`models`** - Attendance report, session entries and portal configuration
//!
//! ## Architecture Role
//!
//! ```text
//!     presensi-types (this crate)
//!            │
//!            ▼
//!      presensi-core
//!            │
//!            ▼
//!     presensi-server
//! ```
//!
//! Everything here is serializable via serde so it can cross the HTTP boundary as-is.

pub mod error;
pub mod models;

pub use error::{PortalError, Stage};
pub use models::{AttendanceReport, CompletedSession, PendingSession, PortalConfig};
