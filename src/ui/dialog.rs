// File: dialog.rs
// Location: /src/ui/dialog.rs

use gtk4::glib;
use gtk4::prelude::*;
use libadwaita::{self as adw, prelude::*};
use std::cell::Cell;
use std::rc::Rc;

use crate::credentials::WirelessCredentials;
use crate::error::DialogError;
use crate::rendezvous::Rendezvous;
use crate::ui::config_form::ConfigForm;

/// How the user left the dialog. Cancellation is a normal outcome, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed,
    Canceled,
}

struct Resolution {
    outcome: DialogOutcome,
    values: WirelessCredentials,
}

/// Owns one modal interaction: presents the form on the GTK main thread and
/// blocks the calling thread until the user confirms or cancels.
pub struct ModalHost {
    rendezvous: Rendezvous<Resolution>,
}

impl ModalHost {
    /// Fails eagerly when the dialog cannot be hosted: the toolkit is not
    /// initialized, or the caller *is* the main-loop thread and blocking it
    /// would deadlock the dialog it is waiting for.
    pub fn new() -> Result<Self, DialogError> {
        if !gtk4::is_initialized() {
            log::warn!("Wireless dialog requested before GTK was initialized");
            return Err(DialogError::ResourceExhausted("GTK is not initialized"));
        }

        if glib::MainContext::default().is_owner() {
            log::warn!("Wireless dialog requested on the UI thread itself");
            return Err(DialogError::ResourceExhausted(
                "cannot block the UI thread on its own dialog",
            ));
        }

        Ok(Self {
            rendezvous: Rendezvous::new(),
        })
    }

    /// Shows the dialog seeded with the caller's values and blocks until it
    /// resolves. On both outcomes the caller's values are overwritten with
    /// whatever the fields held at resolution time; on cancel that may be
    /// in-progress edits, and the caller decides whether to honor them.
    ///
    /// The wait has no timeout.
    pub fn wait_for_dialog(
        self,
        credentials: &mut WirelessCredentials,
    ) -> Result<DialogOutcome, DialogError> {
        let initial = credentials.clone();
        let rendezvous = self.rendezvous.clone();

        log::debug!(
            "Opening wireless credentials dialog for {:?}",
            initial.network_name
        );
        glib::MainContext::default().invoke(move || present_dialog(initial, rendezvous));

        let resolution = self.rendezvous.wait();
        log::debug!("Wireless credentials dialog: {:?}", resolution.outcome);

        *credentials = resolution.values;
        Ok(resolution.outcome)
    }
}

// Runs on the GTK main thread. The form is read back here, before the
// signal, because the widgets never leave this thread; the rendezvous
// carries the snapshot over to the caller.
fn present_dialog(initial: WirelessCredentials, rendezvous: Rendezvous<Resolution>) {
    let form = Rc::new(ConfigForm::new());
    form.initialize(&initial);

    let dialog = adw::Dialog::builder()
        .title("Connect Wireless Network")
        .content_width(420)
        .build();
    dialog.set_child(Some(&form.root));
    dialog.set_default_widget(Some(&form.confirm_button));

    // Whichever of the recognized events fires first resolves the dialog;
    // the flag makes every later activation a no-op.
    let resolved = Rc::new(Cell::new(false));

    let form_confirm = Rc::clone(&form);
    let resolved_confirm = Rc::clone(&resolved);
    let rendezvous_confirm = rendezvous.clone();
    let dialog_close = dialog.clone();
    form.confirm_button.connect_clicked(move |_| {
        if resolved_confirm.replace(true) {
            return;
        }
        rendezvous_confirm.signal(Resolution {
            outcome: DialogOutcome::Confirmed,
            values: form_confirm.read_back(),
        });
        dialog_close.close();
    });

    let form_cancel = Rc::clone(&form);
    let resolved_cancel = Rc::clone(&resolved);
    let rendezvous_cancel = rendezvous.clone();
    let dialog_close = dialog.clone();
    form.cancel_button.connect_clicked(move |_| {
        if resolved_cancel.replace(true) {
            return;
        }
        rendezvous_cancel.signal(Resolution {
            outcome: DialogOutcome::Canceled,
            values: form_cancel.read_back(),
        });
        dialog_close.close();
    });

    // Esc or a close request resolves as cancel; without this the blocked
    // caller would be stranded when the dialog goes away.
    let form_closed = Rc::clone(&form);
    let resolved_closed = Rc::clone(&resolved);
    dialog.connect_closed(move |_| {
        if resolved_closed.replace(true) {
            return;
        }
        rendezvous.signal(Resolution {
            outcome: DialogOutcome::Canceled,
            values: form_closed.read_back(),
        });
    });

    dialog.present(None::<&gtk4::Window>);
}

/// Collects wireless network credentials through a modal dialog, blocking
/// the calling thread until the user confirms or cancels.
///
/// Must be called off the GTK main thread while a main loop is running. On
/// `Ok`, `credentials` holds the final field contents for either outcome;
/// on `Err` it is untouched and the dialog was never shown.
pub fn open_wireless_credentials_dialog(
    credentials: &mut WirelessCredentials,
) -> Result<DialogOutcome, DialogError> {
    let host = ModalHost::new()?;
    host.wait_for_dialog(credentials)
}
