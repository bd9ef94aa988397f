//! Grocery Storefront - Main Entry Point
//!
//! Opens the storefront page of the Deepak Devadiga grocery shop in a native
//! window.

use grocery_storefront::{config::AppState, frontend::StorefrontApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,grocery_storefront=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Deepak Devadiga Grocery storefront");

    // Load preferences (theme, font scale, motion, image loading)
    let app_state = AppState::load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Deepak Devadiga Grocery Shop"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Deepak Devadiga Grocery",
        native_options,
        Box::new(|cc| Ok(Box::new(StorefrontApp::new(cc, app_state)))),
    );

    tracing::info!("Shutting down...");

    result
}
