//! CircaView - an interactive viewer for mouse circadian telemetry.
//!
//! Usage: `circaview [DATA_DIR]`. Without an argument the data directory
//! from the saved settings is used.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use circaview::app::CircaViewApp;
use circaview::settings::AppSettings;
use tracing_subscriber::EnvFilter;

/// Set the macOS application name for the dock
#[cfg(target_os = "macos")]
fn set_macos_app_name() {
    use objc2::{class, msg_send};
    use objc2_foundation::NSString;

    unsafe {
        let app_name = NSString::from_str("CircaView");
        let process_info_class = class!(NSProcessInfo);
        let process_info: *mut objc2::runtime::AnyObject =
            msg_send![process_info_class, processInfo];
        let _: () = msg_send![process_info, setProcessName: &*app_name];
    }
}

#[cfg(not(target_os = "macos"))]
fn set_macos_app_name() {}

fn main() -> eframe::Result<()> {
    set_macos_app_name();

    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut settings = AppSettings::load();
    if let Some(dir) = std::env::args_os().nth(1) {
        settings.data_dir = PathBuf::from(dir);
    }
    tracing::info!("Using data directory {}", settings.data_dir.display());

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("CircaView - Mouse Telemetry")
            .with_app_id("CircaView"),
        ..Default::default()
    };

    eframe::run_native(
        "CircaView",
        native_options,
        Box::new(|_cc| Ok(Box::new(CircaViewApp::new(settings)))),
    )
}
