// File: main.rs
// Location: /src/main.rs

use chrono::Local;
use gtk4::prelude::*;
use libadwaita as adw;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use std::thread;

use adw_wifi_dialog::ui::icon_name;
use adw_wifi_dialog::{
    open_wireless_credentials_dialog, DialogError, DialogOutcome, WirelessCredentials,
};

const APP_ID: &str = "com.github.adw-wifi-dialog";

fn setup_logging() {
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Debug)
        .try_init()
        .ok();
}

enum DialogReply {
    Resolved(DialogOutcome, WirelessCredentials),
    Failed(DialogError),
}

fn main() -> glib::ExitCode {
    setup_logging();
    log::info!("Application starting...");

    let app = adw::Application::builder()
        .application_id(APP_ID)
        .build();

    app.connect_activate(build_ui);
    app.run()
}

fn build_ui(app: &adw::Application) {
    let credentials = Rc::new(RefCell::new(WirelessCredentials::default()));

    let status_label = gtk4::Label::new(Some("No network configured"));
    status_label.set_xalign(0.0);
    status_label.add_css_class("dim-label");

    let connect_button = gtk4::Button::builder()
        .css_classes(vec!["suggested-action".to_string(), "pill".to_string()])
        .halign(gtk4::Align::Start)
        .build();
    let button_content = adw::ButtonContent::builder()
        .icon_name(icon_name(
            "network-wireless-symbolic",
            &["network-wireless-signal-excellent-symbolic", "network-wireless"],
        ))
        .label("Connect wireless network…")
        .build();
    connect_button.set_child(Some(&button_content));

    // Dialog replies come back from the worker thread through this channel
    // and land on the UI thread here.
    let (tx, rx) = async_channel::unbounded::<DialogReply>();

    let credentials_rx = credentials.clone();
    let status_rx = status_label.clone();
    let button_rx = connect_button.clone();
    glib::spawn_future_local(async move {
        while let Ok(reply) = rx.recv().await {
            button_rx.set_sensitive(true);
            match reply {
                DialogReply::Resolved(DialogOutcome::Confirmed, values) => {
                    log::info!("Credentials confirmed for {:?}", values.network_name);
                    status_rx.set_text(&format!(
                        "{} ({})",
                        values.network_name, values.auth_mode
                    ));
                    *credentials_rx.borrow_mut() = values;
                }
                DialogReply::Resolved(DialogOutcome::Canceled, _) => {
                    log::info!("Dialog canceled, keeping previous credentials");
                }
                DialogReply::Failed(e) => {
                    log::error!("Could not open dialog: {}", e);
                    status_rx.set_text("Dialog unavailable");
                }
            }
        }
    });

    let credentials_click = credentials.clone();
    connect_button.connect_clicked(move |button| {
        // One dialog at a time.
        button.set_sensitive(false);

        let tx = tx.clone();
        let mut values = credentials_click.borrow().clone();
        thread::spawn(move || {
            let reply = match open_wireless_credentials_dialog(&mut values) {
                Ok(outcome) => DialogReply::Resolved(outcome, values),
                Err(e) => DialogReply::Failed(e),
            };
            let _ = tx.send_blocking(reply);
        });
    });

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
    content.set_margin_top(24);
    content.set_margin_bottom(24);
    content.set_margin_start(24);
    content.set_margin_end(24);
    content.append(&status_label);
    content.append(&connect_button);

    let header = adw::HeaderBar::new();
    let toolbar_view = adw::ToolbarView::new();
    toolbar_view.add_top_bar(&header);
    toolbar_view.set_content(Some(&content));

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Wireless Setup")
        .default_width(420)
        .default_height(240)
        .content(&toolbar_view)
        .build();

    window.present();
}
