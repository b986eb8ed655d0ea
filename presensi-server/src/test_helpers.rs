//! Test helpers for presensi-server unit tests.

use presensi_core::{Credentials, PortalClient, PortalConfig};

use crate::state::AppState;

/// `AppState` whose portal and SSO both live at `origin` (usually a wiremock server).
pub fn test_app_state(origin: &str) -> AppState {
    let config = PortalConfig::from_origins(origin, origin);
    AppState::new(PortalClient::new(config, Credentials::new("mahasiswa", "rahasia")))
}
