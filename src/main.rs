#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

// Application shell
mod app;

// Application constants
mod constants;

// CSV ingestion and threshold arithmetic
mod data;

// Error handling
mod error;

mod logging;

// Application state modules
mod state;

// Panels and reusable widgets
mod ui;
mod widgets;

fn main() -> eframe::Result {
    logging::init();

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = {
        puffin::set_scopes_on(true);
        puffin_http::Server::new(&format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT)).ok()
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting inventory optimizer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Inventory Optimizer")
            .with_inner_size([1280.0, 800.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Inventory Optimizer",
        options,
        Box::new(|_| Ok(Box::new(app::InventoryOptimizer::default()))),
    )
}
