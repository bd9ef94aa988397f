//! Navigation bar: brand, tab row or hamburger, and the mobile drawer.
//!
//! Sits in a top panel so it stays visible while the page scrolls.

use egui::{Align, CornerRadius, Layout, RichText, Sense, Ui};

use crate::frontend::icons::Icon;
use crate::frontend::state::{AppAction, ViewState};
use crate::frontend::theme::Palette;
use crate::frontend::widgets::IconTile;
use crate::shop::SHOP_NAME;
use crate::types::{LayoutClass, NavOrigin, NavTab};

/// Height of the bar itself, excluding the drawer
pub const NAV_HEIGHT: f32 = 64.0;

/// Context needed to render the nav bar.
pub struct NavContext<'a> {
    pub view: &'a ViewState,
    pub palette: &'a Palette,
    pub layout: LayoutClass,
}

/// Render the nav bar. Returns the actions its controls produced.
pub fn render_nav(ui: &mut Ui, ctx: &NavContext<'_>) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.set_min_height(NAV_HEIGHT);

        render_brand(ui, ctx.palette);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| match ctx.layout {
            LayoutClass::Wide => render_tab_row(ui, ctx, &mut actions),
            LayoutClass::Compact => render_hamburger(ui, ctx, &mut actions),
        });
    });

    if ctx.layout == LayoutClass::Compact {
        render_drawer(ui, ctx, &mut actions);
    }

    actions
}

/// Brand tile and shop name
pub fn render_brand(ui: &mut Ui, palette: &Palette) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        ui.add(
            IconTile::new(Icon::Basket, palette.accent, egui::Color32::WHITE)
                .with_icon_size(20.0)
                .with_padding(8),
        );
        ui.label(
            RichText::new(SHOP_NAME)
                .size(20.0)
                .strong()
                .color(palette.brand),
        );
    });
}

fn render_tab_row(ui: &mut Ui, ctx: &NavContext<'_>, actions: &mut Vec<AppAction>) {
    ui.spacing_mut().item_spacing.x = 32.0;

    // Right-to-left layout: add in reverse so the row reads Home..Contact
    for tab in NavTab::ALL.iter().rev() {
        let color = if ctx.view.is_active(*tab) {
            ctx.palette.accent
        } else {
            ctx.palette.nav_idle
        };

        let response = ui
            .add(
                egui::Label::new(RichText::new(tab.label()).size(14.0).color(color))
                    .sense(Sense::click()),
            )
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if response.clicked() {
            actions.push(AppAction::SelectTab {
                tab: *tab,
                origin: NavOrigin::Desktop,
            });
        }
    }
}

fn render_hamburger(ui: &mut Ui, ctx: &NavContext<'_>, actions: &mut Vec<AppAction>) {
    let icon = if ctx.view.is_menu_open() {
        Icon::Close
    } else {
        Icon::Menu
    };

    let button = egui::Button::new(icon.rich(20.0, ctx.palette.text_muted)).frame(false);
    if ui.add(button).on_hover_text("Menu").clicked() {
        actions.push(AppAction::ToggleMenu);
    }
}

fn render_drawer(ui: &mut Ui, ctx: &NavContext<'_>, actions: &mut Vec<AppAction>) {
    let id = ui.make_persistent_id("mobile_nav_drawer");
    let mut drawer =
        egui::collapsing_header::CollapsingState::load_with_default_open(ui.ctx(), id, false);
    drawer.set_open(ctx.view.is_menu_open());

    drawer.show_body_unindented(ui, |ui| {
        ui.add_space(8.0);
        for tab in NavTab::ALL {
            let background = ui.painter().add(egui::Shape::Noop);

            let response = egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(12, 12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    // Not selectable, so the whole row takes the click
                    ui.add(
                        egui::Label::new(
                            RichText::new(tab.label())
                                .size(16.0)
                                .color(ctx.palette.text_muted),
                        )
                        .selectable(false),
                    );
                })
                .response
                .interact(Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);

            if response.hovered() {
                ui.painter().set(
                    background,
                    egui::Shape::rect_filled(
                        response.rect,
                        CornerRadius::same(6),
                        ctx.palette.accent_soft,
                    ),
                );
            }

            if response.clicked() {
                actions.push(AppAction::SelectTab {
                    tab,
                    origin: NavOrigin::Drawer,
                });
            }
        }
        ui.add_space(16.0);
    });
}
