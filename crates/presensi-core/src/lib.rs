//! # Presensi Core
//!
//! Business logic for Presensi Gateway.
//!
//! ```text
//! presensi-core/src/
//! ├── credentials.rs    # base64-configured SSO credentials
//! ├── metrics.rs        # Prometheus recorder and pipeline counters
//! ├── portal/
//! │   ├── session.rs    # cookie-carrying HTTP session, one per request
//! │   ├── login.rs      # three-hop SAML login
//! │   ├── html.rs       # markup extraction (forms, session blocks, links)
//! │   └── scrape.rs     # overview walk and detail-page fan-out
//! └── utils/http.rs     # reqwest client builder
//! ```
//!
//! [`PortalClient::fetch_attendance`] runs the whole pipeline against a fresh
//! cookie store and returns the classified [`AttendanceReport`].

pub mod credentials;
pub mod metrics;
pub mod portal;
pub mod utils;

pub use credentials::Credentials;
pub use portal::PortalClient;
pub use presensi_types::{AttendanceReport, PortalConfig, PortalError, Stage};
