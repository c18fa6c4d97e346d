//! Bubble Chat - a desktop chat client for a question-answering service
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for HTTP requests
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use bubblechat_client::app::ChatApp;
use bubblechat_client::{config, logging};

fn main() -> eframe::Result<()> {
    logging::init_tracing();

    let settings = config::load_settings();
    tracing::info!(endpoint = %settings.endpoint, "starting Bubble Chat");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size([600.0, 400.0])
            .with_title("Bubble Chat"),
        ..Default::default()
    };

    eframe::run_native(
        "Bubble Chat",
        options,
        Box::new(|cc| Ok(Box::new(ChatApp::new(cc, settings)))),
    )
}
