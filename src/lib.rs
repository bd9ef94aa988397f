//! # Grocery Storefront
//!
//! A single-page storefront for the Deepak Devadiga neighborhood grocery shop,
//! rendered natively with eframe/egui.
//!
//! ## Architecture
//!
//! - **Catalog**: the fixed product list and the card view model built from it
//! - **Shop**: static shop profile plus the UPI payment link / QR builders
//! - **Frontend**: the egui page (nav bar, hero, info, products, payment, footer)
//!   and the view state that drives the nav highlight and mobile drawer
//! - **Config**: user preferences persisted between launches
//!
//! Sections never mutate state directly. They return [`frontend::AppAction`]s
//! which the app applies through a single reducer.
//!
//! ## Configuration
//!
//! Preferences are stored in the platform-appropriate data directory under
//! `dev.devadiga.grocery-storefront`:
//!
//! - **Linux**: `~/.local/share/dev.devadiga.grocery-storefront/`
//! - **macOS**: `~/Library/Application Support/dev.devadiga.grocery-storefront/`
//! - **Windows**: `%APPDATA%\dev.devadiga.grocery-storefront\`
//!
//! ## Example
//!
//! ```ignore
//! use grocery_storefront::{config::AppState, frontend::StorefrontApp};
//!
//! fn main() -> eframe::Result<()> {
//!     let app_state = AppState::load_or_default();
//!
//!     eframe::run_native(
//!         "Deepak Devadiga Grocery",
//!         eframe::NativeOptions::default(),
//!         Box::new(|cc| Ok(Box::new(StorefrontApp::new(cc, app_state)))),
//!     )
//! }
//! ```

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod frontend;
pub mod shop;
pub mod types;

// Re-export commonly used types
pub use app::StorefrontApp;
pub use catalog::{catalog, render_cards, ProductCard, PRODUCTS};
pub use config::{AppState, UiPreferences};
pub use error::{Result, StorefrontError};
pub use types::{LayoutClass, NavOrigin, NavTab, Product, Section};
