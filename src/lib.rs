// File: lib.rs
// Location: /src/lib.rs

pub mod credentials;
pub mod error;
pub mod form;
pub mod rendezvous;
pub mod ui;

pub use credentials::{AuthMode, WirelessCredentials};
pub use error::DialogError;
pub use ui::dialog::{open_wireless_credentials_dialog, DialogOutcome, ModalHost};
