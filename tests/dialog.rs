// File: dialog.rs
// Location: /tests/dialog.rs

use adw_wifi_dialog::{
    open_wireless_credentials_dialog, AuthMode, DialogError, ModalHost, WirelessCredentials,
};

// These run without a display, so GTK is never initialized here and
// construction must fail eagerly instead of blocking.

#[test]
fn test_uninitialized_toolkit_yields_resource_exhausted() {
    let mut credentials = WirelessCredentials {
        network_name: "HomeNet".to_string(),
        auth_mode: AuthMode::Wpa2,
        password: "secret123".to_string(),
    };
    let before = credentials.clone();

    let result = open_wireless_credentials_dialog(&mut credentials);

    assert!(matches!(result, Err(DialogError::ResourceExhausted(_))));
    // The dialog was never shown; the caller's values are untouched.
    assert_eq!(credentials, before);
}

#[test]
fn test_host_construction_fails_and_names_the_failed_step() {
    let err = match ModalHost::new() {
        Err(e) => e,
        Ok(_) => panic!("host construction succeeded without GTK"),
    };
    let DialogError::ResourceExhausted(step) = err;
    assert!(!step.is_empty());
}
