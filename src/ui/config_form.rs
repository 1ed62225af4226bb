// File: config_form.rs
// Location: /src/ui/config_form.rs

use gtk4::prelude::*;
use libadwaita::{self as adw, prelude::*};

use crate::credentials::{AuthChoice, WirelessCredentials};
use crate::form::FormModel;

/// The editable face of the dialog: three input rows and the two action
/// buttons. Main thread only.
pub struct ConfigForm {
    pub root: gtk4::Box,
    network_name: adw::EntryRow,
    auth_mode: adw::ComboRow,
    password: adw::PasswordEntryRow,
    pub cancel_button: gtk4::Button,
    pub confirm_button: gtk4::Button,
}

impl ConfigForm {
    pub fn new() -> Self {
        let root = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
        root.set_margin_top(12);
        root.set_margin_bottom(12);
        root.set_margin_start(12);
        root.set_margin_end(12);

        let subtitle = gtk4::Label::new(Some("Enter the network details"));
        subtitle.set_xalign(0.0);
        subtitle.set_opacity(0.7);
        root.append(&subtitle);

        let rows = adw::PreferencesGroup::new();

        let network_name = adw::EntryRow::builder()
            .title("Network Name")
            .build();
        rows.add(&network_name);

        let choices = gtk4::StringList::new(&AuthChoice::LABELS[..]);
        let auth_mode = adw::ComboRow::builder()
            .title("Authentication")
            .model(&choices)
            .build();
        rows.add(&auth_mode);

        let password = adw::PasswordEntryRow::builder()
            .title("Password")
            .activates_default(true)
            .build();
        rows.add(&password);
        root.append(&rows);

        let buttons = gtk4::Box::new(gtk4::Orientation::Horizontal, 12);
        buttons.set_halign(gtk4::Align::End);
        buttons.set_margin_top(12);

        let cancel_button = gtk4::Button::builder()
            .label("Cancel")
            .css_classes(vec!["flat".to_string()])
            .build();

        let confirm_button = gtk4::Button::builder()
            .label("Connect")
            .css_classes(vec!["suggested-action".to_string()])
            .build();

        let confirm_trigger = confirm_button.clone();
        password.connect_entry_activated(move |_| {
            confirm_trigger.emit_clicked();
        });

        buttons.append(&cancel_button);
        buttons.append(&confirm_button);
        root.append(&buttons);

        Self {
            root,
            network_name,
            auth_mode,
            password,
            cancel_button,
            confirm_button,
        }
    }

    /// Loads the caller's values into the widgets verbatim; the auth mode
    /// collapses onto the three selector choices.
    pub fn initialize(&self, credentials: &WirelessCredentials) {
        let model = FormModel::load(credentials);
        self.network_name.set_text(&model.network_name);
        self.auth_mode.set_selected(model.auth_choice.index());
        self.password.set_text(&model.password);
    }

    /// Snapshots the current widget contents. Pure read, no side effects.
    pub fn read_back(&self) -> WirelessCredentials {
        let model = FormModel {
            network_name: self.network_name.text().to_string(),
            auth_choice: AuthChoice::from_index(self.auth_mode.selected()),
            password: self.password.text().to_string(),
        };
        model.read_back()
    }
}
