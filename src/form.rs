// File: form.rs
// Location: /src/form.rs

use crate::credentials::{AuthChoice, WirelessCredentials};

/// Widget-free state of the credentials form: what the entry rows and the
/// auth selector hold at any point in time. The GTK layer loads one of these
/// into its widgets and snapshots one back out, so the in/out mapping stays
/// testable without a display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormModel {
    pub network_name: String,
    pub auth_choice: AuthChoice,
    pub password: String,
}

impl FormModel {
    /// Builds the initial form contents. Name and password are taken
    /// verbatim; the auth mode collapses onto one of the three selector
    /// choices.
    pub fn load(credentials: &WirelessCredentials) -> Self {
        Self {
            network_name: credentials.network_name.clone(),
            auth_choice: AuthChoice::from_mode(credentials.auth_mode),
            password: credentials.password.clone(),
        }
    }

    /// Reads the form back out. Pure; the selector resolves WEP first, then
    /// WPA/WPA2, otherwise Open.
    pub fn read_back(&self) -> WirelessCredentials {
        WirelessCredentials {
            network_name: self.network_name.clone(),
            auth_mode: self.auth_choice.to_mode(),
            password: self.password.clone(),
        }
    }
}
