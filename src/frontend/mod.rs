//! Frontend module for egui UI
//!
//! This module renders the storefront page with eframe/egui.
//!
//! # Architecture
//!
//! The nav bar lives in a top panel so it stays put while the rest of the page
//! scrolls underneath it in the central panel. Sections render top to bottom,
//! unconditionally, and report what the user did as [`AppAction`]s. After the
//! frame the app applies those actions to its [`ViewState`] and requests one
//! repaint so the new state is drawn.
//!
//! # Main Types
//!
//! - [`StorefrontApp`] - Main application state implementing [`eframe::App`]
//! - [`ViewState`] - Active tab highlight and drawer flag
//! - [`FrameReport`] - What a frame rendered and which actions it produced
//!
//! # Submodules
//!
//! - `sections` - Nav, hero, info, products, payment and footer renderers
//! - `widgets` - Pills, icon tiles, cards, remote images
//! - `animation` - Entrance reveal tracking
//! - `theme` - Palette and egui visuals
//! - `icons` - Glyphs for the fixed icon set

pub mod animation;
pub mod icons;
pub mod sections;
pub mod state;
pub mod theme;
pub mod widgets;

pub use state::{AppAction, ViewState};
pub use widgets::*;

use animation::{FrameReveal, RevealTracker};
use sections::{
    render_footer, render_hero, render_info, render_nav, render_payment, render_products,
    FooterContext, HeroContext, InfoContext, NavContext, PaymentContext, ProductsContext,
};
use theme::Palette;

use crate::catalog::{catalog, render_cards, validate_catalog, ProductCard};
use crate::config::{app_state_path, AppState, UiPreferences};
use crate::shop::UpiPayment;
use crate::types::{LayoutClass, Section};
use egui::{Margin, Stroke};

/// What one call to [`StorefrontApp::show`] did
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    /// Ids of the product cards drawn, in drawing order
    pub rendered_cards: Vec<u32>,
    /// Actions emitted by the sections this frame
    pub actions: Vec<AppAction>,
    /// Layout the frame was drawn with
    pub layout: Option<LayoutClass>,
    /// Whether the search text was edited this frame
    pub search_changed: bool,
}

/// Main application state for the storefront
pub struct StorefrontApp {
    app_state: AppState,
    /// Last state written to disk, for change detection
    saved_state: AppState,
    palette: Palette,

    view: ViewState,
    cards: Vec<ProductCard>,
    search_query: String,
    payment: UpiPayment<'static>,

    reveal: RevealTracker,
    pending_scroll: Option<Section>,
}

impl StorefrontApp {
    /// Create the app inside an eframe window
    pub fn new(cc: &eframe::CreationContext<'_>, app_state: AppState) -> Self {
        #[cfg(feature = "remote-images")]
        egui_extras::install_image_loaders(&cc.egui_ctx);

        Self::with_context(&cc.egui_ctx, app_state)
    }

    /// Create the app against any egui context (also used headless)
    pub fn with_context(ctx: &egui::Context, app_state: AppState) -> Self {
        if let Err(e) = validate_catalog(catalog()) {
            tracing::error!("Catalog check failed: {}", e);
        }

        let palette = theme::apply_theme(ctx, &app_state.ui_preferences);
        let cards = render_cards(catalog());
        tracing::info!("Storefront ready with {} products", cards.len());

        Self {
            saved_state: app_state.clone(),
            reveal: RevealTracker::new(app_state.ui_preferences.reduce_motion),
            app_state,
            palette,
            view: ViewState::new(),
            cards,
            search_query: String::new(),
            payment: UpiPayment::merchant(),
            pending_scroll: None,
        }
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// The cards the product grid draws
    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Replace the search text. The product grid is unaffected.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn preferences(&self) -> &UiPreferences {
        &self.app_state.ui_preferences
    }

    /// Change preferences and re-apply the theme
    pub fn update_preferences(&mut self, ctx: &egui::Context, f: impl FnOnce(&mut UiPreferences)) {
        f(&mut self.app_state.ui_preferences);
        self.app_state.ui_preferences.sanitize();
        self.palette = theme::apply_theme(ctx, &self.app_state.ui_preferences);
        self.reveal
            .set_reduce_motion(self.app_state.ui_preferences.reduce_motion);
    }

    /// Section the next frame will scroll to, if any
    pub fn pending_scroll(&self) -> Option<Section> {
        self.pending_scroll
    }

    /// Apply actions to the view state.
    ///
    /// Returns true (and requests exactly one repaint) if there was anything
    /// to apply.
    pub fn dispatch(&mut self, ctx: &egui::Context, actions: &[AppAction]) -> bool {
        if actions.is_empty() {
            return false;
        }

        for action in actions {
            match *action {
                AppAction::SetDarkMode(on) => {
                    tracing::info!("Dark mode: {}", on);
                    self.update_preferences(ctx, |prefs| prefs.dark_mode = on);
                }
                AppAction::SetReduceMotion(on) => {
                    tracing::info!("Reduce motion: {}", on);
                    self.update_preferences(ctx, |prefs| prefs.reduce_motion = on);
                }
                _ => {
                    if let Some(section) = self.view.apply(action) {
                        self.pending_scroll = Some(section);
                    }
                }
            }
        }

        ctx.request_repaint();
        true
    }

    /// Draw one frame of the page and apply whatever the user did
    pub fn show(&mut self, ctx: &egui::Context) -> FrameReport {
        let now = ctx.input(|i| i.time);
        let layout = LayoutClass::from_width(ctx.available_rect().width());
        let palette = self.palette;
        let load_remote_images = self.app_state.ui_preferences.load_remote_images;

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("storefront_nav")
            .frame(
                egui::Frame::new()
                    .fill(palette.surface.gamma_multiply(0.95))
                    .stroke(Stroke::new(1.0, palette.border))
                    .inner_margin(Margin::symmetric(24, 0)),
            )
            .show(ctx, |ui| {
                let nav = NavContext {
                    view: &self.view,
                    palette: &palette,
                    layout,
                };
                actions.extend(render_nav(ui, &nav));
            });

        let mut jump = self.pending_scroll.take();
        let mut reveals = FrameReveal::new(&mut self.reveal, now);
        let mut rendered_cards = Vec::new();
        let mut search_changed = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.page))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing.y = 0.0;

                        let mut anchor = |ui: &mut egui::Ui, section: Section| {
                            if jump == Some(section) {
                                ui.scroll_to_cursor(Some(egui::Align::TOP));
                                jump = None;
                            }
                        };

                        anchor(ui, Section::Home);
                        let hero = HeroContext {
                            palette: &palette,
                            progress: reveals.progress(egui::Id::new("hero"), true, 0.0),
                            load_remote_images,
                        };
                        actions.extend(render_hero(ui, &hero));

                        render_info(
                            ui,
                            &InfoContext {
                                palette: &palette,
                                layout,
                            },
                        );

                        anchor(ui, Section::Products);
                        let products = ProductsContext {
                            cards: &self.cards,
                            palette: &palette,
                            load_remote_images,
                        };
                        let result =
                            render_products(ui, &products, &mut self.search_query, &mut reveals);
                        rendered_cards = result.rendered;
                        search_changed = result.search_changed;

                        anchor(ui, Section::Payment);
                        let payment = PaymentContext {
                            payment: &self.payment,
                            load_remote_images,
                        };
                        render_payment(ui, &payment, &mut reveals);

                        let footer = FooterContext {
                            layout,
                            preferences: &self.app_state.ui_preferences,
                        };
                        actions.extend(render_footer(ui, &footer));
                    });
            });

        if reveals.is_animating() {
            ctx.request_repaint();
        }

        self.dispatch(ctx, &actions);

        FrameReport {
            rendered_cards,
            actions,
            layout: Some(layout),
            search_changed,
        }
    }

    fn needs_save(&self) -> bool {
        self.app_state != self.saved_state || app_state_path().is_some_and(|p| !p.exists())
    }
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        if !self.needs_save() {
            return;
        }

        match self.app_state.save() {
            Ok(()) => self.saved_state = self.app_state.clone(),
            Err(e) => tracing::warn!("Failed to save app state: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NavOrigin, NavTab};

    fn headless_app() -> (egui::Context, StorefrontApp) {
        let ctx = egui::Context::default();
        let mut state = AppState::default();
        state.ui_preferences.load_remote_images = false;
        let app = StorefrontApp::with_context(&ctx, state);
        (ctx, app)
    }

    #[test]
    fn test_dispatch_empty_is_noop() {
        let (ctx, mut app) = headless_app();
        assert!(!app.dispatch(&ctx, &[]));
        assert_eq!(*app.view_state(), ViewState::new());
    }

    #[test]
    fn test_dispatch_jump_sets_pending_scroll() {
        let (ctx, mut app) = headless_app();
        assert!(app.dispatch(&ctx, &[AppAction::JumpTo(Section::Payment)]));
        assert_eq!(app.pending_scroll(), Some(Section::Payment));
    }

    #[test]
    fn test_dispatch_applies_in_order() {
        let (ctx, mut app) = headless_app();
        app.dispatch(
            &ctx,
            &[
                AppAction::ToggleMenu,
                AppAction::SelectTab {
                    tab: NavTab::Payment,
                    origin: NavOrigin::Drawer,
                },
            ],
        );
        assert_eq!(app.view_state().active_tab(), NavTab::Payment);
        assert!(!app.view_state().is_menu_open());
    }

    #[test]
    fn test_dispatch_preference_actions() {
        let (ctx, mut app) = headless_app();
        assert!(app.dispatch(
            &ctx,
            &[AppAction::SetDarkMode(true), AppAction::SetReduceMotion(true)]
        ));
        assert!(app.preferences().dark_mode);
        assert!(app.preferences().reduce_motion);
        assert_eq!(ctx.theme(), egui::Theme::Dark);
        assert!(app.needs_save());
        assert_eq!(*app.view_state(), ViewState::new());
    }

    #[test]
    fn test_update_preferences_sanitizes() {
        let (ctx, mut app) = headless_app();
        app.update_preferences(&ctx, |prefs| prefs.font_scale = 5.0);
        assert_eq!(app.preferences().font_scale, crate::config::MAX_FONT_SCALE);
    }
}
