// File: credentials.rs
// Location: /src/credentials.rs

use std::fmt;

/// Authentication scheme of a wireless network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Open,
    Wep,
    Wpa,
    Wpa2,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AuthMode::Open => "Open",
            AuthMode::Wep => "WEP",
            AuthMode::Wpa => "WPA",
            AuthMode::Wpa2 => "WPA2",
        };
        write!(f, "{}", label)
    }
}

/// The three values the dialog edits. Owned by the caller before and after
/// the call; the live copy sits in the dialog's widgets while it is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirelessCredentials {
    pub network_name: String,
    pub auth_mode: AuthMode,
    pub password: String,
}

impl Default for WirelessCredentials {
    fn default() -> Self {
        Self {
            network_name: String::new(),
            auth_mode: AuthMode::Open,
            password: String::new(),
        }
    }
}

/// The selector offers exactly three choices; WPA and WPA2 share one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthChoice {
    Open,
    Wep,
    WpaFamily,
}

impl AuthChoice {
    pub const LABELS: [&'static str; 3] = ["Open", "WEP", "WPA/WPA2"];

    /// Maps an auth mode onto the selector. Anything that is not WEP or a
    /// WPA variant selects Open.
    pub fn from_mode(mode: AuthMode) -> Self {
        match mode {
            AuthMode::Wep => AuthChoice::Wep,
            AuthMode::Wpa | AuthMode::Wpa2 => AuthChoice::WpaFamily,
            AuthMode::Open => AuthChoice::Open,
        }
    }

    /// Maps the selection back out. The WPA/WPA2 choice always reads back as
    /// WPA; the distinction is not preserved across the dialog.
    pub fn to_mode(self) -> AuthMode {
        match self {
            AuthChoice::Wep => AuthMode::Wep,
            AuthChoice::WpaFamily => AuthMode::Wpa,
            AuthChoice::Open => AuthMode::Open,
        }
    }

    /// Position of this choice in the selector widget.
    pub fn index(self) -> u32 {
        match self {
            AuthChoice::Open => 0,
            AuthChoice::Wep => 1,
            AuthChoice::WpaFamily => 2,
        }
    }

    /// Resolves a selector position; out-of-range positions fall back to
    /// Open.
    pub fn from_index(index: u32) -> Self {
        match index {
            1 => AuthChoice::Wep,
            2 => AuthChoice::WpaFamily,
            _ => AuthChoice::Open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wep_maps_both_ways() {
        assert_eq!(AuthChoice::from_mode(AuthMode::Wep), AuthChoice::Wep);
        assert_eq!(AuthChoice::Wep.to_mode(), AuthMode::Wep);
    }

    #[test]
    fn test_wpa_and_wpa2_share_one_choice() {
        assert_eq!(AuthChoice::from_mode(AuthMode::Wpa), AuthChoice::WpaFamily);
        assert_eq!(AuthChoice::from_mode(AuthMode::Wpa2), AuthChoice::WpaFamily);
    }

    #[test]
    fn test_wpa_family_reads_back_as_wpa_never_wpa2() {
        assert_eq!(AuthChoice::WpaFamily.to_mode(), AuthMode::Wpa);
    }

    #[test]
    fn test_open_is_the_default_choice() {
        assert_eq!(AuthChoice::from_mode(AuthMode::Open), AuthChoice::Open);
        assert_eq!(AuthChoice::Open.to_mode(), AuthMode::Open);
    }

    #[test]
    fn test_index_round_trip() {
        for choice in [AuthChoice::Open, AuthChoice::Wep, AuthChoice::WpaFamily] {
            assert_eq!(AuthChoice::from_index(choice.index()), choice);
        }
    }

    #[test]
    fn test_out_of_range_index_falls_back_to_open() {
        assert_eq!(AuthChoice::from_index(3), AuthChoice::Open);
        assert_eq!(AuthChoice::from_index(u32::MAX), AuthChoice::Open);
    }
}
