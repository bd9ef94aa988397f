//! Footer: brand blurb, quick links, shop info and the copyright row.

use egui::{Color32, RichText, Sense, Ui};

use crate::frontend::icons::Icon;
use crate::frontend::state::AppAction;
use crate::frontend::theme::{EMERALD_500, EMERALD_600, STONE_400, STONE_800, STONE_900};
use crate::config::UiPreferences;
use crate::frontend::widgets::{Chip, IconTile};
use crate::shop::{
    copyright_line, LOCATION, OWNER_NAME, PHONE, SHOP_NAME, SINCE_YEAR, SOCIAL_LINKS,
};
use crate::types::{LayoutClass, Section};

/// Context needed to render the footer.
pub struct FooterContext<'a> {
    pub layout: LayoutClass,
    pub preferences: &'a UiPreferences,
}

/// Render the footer. Returns the actions its links and toggles produced.
pub fn render_footer(ui: &mut Ui, ctx: &FooterContext<'_>) -> Vec<AppAction> {
    let mut actions = Vec::new();

    super::band(ui, STONE_900, 64, |ui, width| {
        match ctx.layout {
            LayoutClass::Wide => {
                let quarter = (width - 3.0 * 48.0) / 4.0;
                ui.horizontal_top(|ui| {
                    ui.spacing_mut().item_spacing.x = 48.0;
                    ui.vertical(|ui| {
                        ui.set_width(quarter * 2.0 + 48.0);
                        render_brand_column(ui);
                    });
                    ui.vertical(|ui| {
                        ui.set_width(quarter);
                        render_quick_links(ui, &mut actions);
                    });
                    ui.vertical(|ui| {
                        ui.set_width(quarter);
                        render_shop_info(ui);
                    });
                });
            }
            LayoutClass::Compact => {
                render_brand_column(ui);
                ui.add_space(48.0);
                render_quick_links(ui, &mut actions);
                ui.add_space(48.0);
                render_shop_info(ui);
            }
        }

        ui.add_space(48.0);
        ui.separator();
        ui.add_space(24.0);

        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(copyright_line()).size(12.0).color(STONE_400));
            ui.add_space(24.0);
            render_preferences(ui, ctx.preferences, &mut actions);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.spacing_mut().item_spacing.x = 32.0;
                // Placeholders, there are no policy pages yet
                for label in ["Terms of Service", "Privacy Policy"] {
                    footer_link(ui, label, 12.0);
                }
            });
        });
    });

    actions
}

/// Dark mode and reduce motion toggles
fn render_preferences(ui: &mut Ui, prefs: &UiPreferences, actions: &mut Vec<AppAction>) {
    let mut dark_mode = prefs.dark_mode;
    if ui
        .checkbox(&mut dark_mode, RichText::new("Dark mode").size(12.0).color(STONE_400))
        .changed()
    {
        actions.push(AppAction::SetDarkMode(dark_mode));
    }

    let mut reduce_motion = prefs.reduce_motion;
    if ui
        .checkbox(
            &mut reduce_motion,
            RichText::new("Reduce motion").size(12.0).color(STONE_400),
        )
        .changed()
    {
        actions.push(AppAction::SetReduceMotion(reduce_motion));
    }
}

fn render_brand_column(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        ui.add(
            IconTile::new(Icon::Basket, EMERALD_600, Color32::WHITE)
                .with_icon_size(18.0)
                .with_padding(8),
        );
        ui.label(
            RichText::new(SHOP_NAME)
                .size(20.0)
                .strong()
                .color(Color32::WHITE),
        );
    });
    ui.add_space(24.0);

    ui.scope(|ui| {
        ui.set_max_width(384.0);
        ui.label(
            RichText::new(format!(
                "Your trusted neighborhood grocery shop in Kappinadka. Providing quality \
                 essentials and fresh products for your daily needs since {}.",
                SINCE_YEAR
            ))
            .color(STONE_400),
        );
    });
    ui.add_space(24.0);

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 16.0;
        for social in SOCIAL_LINKS {
            ui.add(Chip::new(social, STONE_800, STONE_400).round())
                .on_hover_cursor(egui::CursorIcon::PointingHand);
        }
    });
}

fn render_quick_links(ui: &mut Ui, actions: &mut Vec<AppAction>) {
    column_heading(ui, "Quick Links");

    ui.spacing_mut().item_spacing.y = 16.0;
    for section in [
        Section::Home,
        Section::Products,
        Section::Payment,
        Section::Contact,
    ] {
        if footer_link(ui, section.link_label(), 14.0).clicked() {
            actions.push(AppAction::JumpTo(section));
        }
    }
}

fn render_shop_info(ui: &mut Ui) {
    column_heading(ui, "Shop Info");

    ui.spacing_mut().item_spacing.y = 16.0;
    let owner = format!("{} (Owner)", OWNER_NAME);
    for (icon, text) in [
        (Icon::Pin, LOCATION),
        (Icon::Phone, PHONE),
        (Icon::User, owner.as_str()),
    ] {
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = 12.0;
            ui.label(icon.rich(14.0, EMERALD_500));
            ui.label(RichText::new(text).size(14.0).color(STONE_400));
        });
    }
}

fn column_heading(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).strong().color(Color32::WHITE));
    ui.add_space(24.0);
}

fn footer_link(ui: &mut Ui, text: &str, size: f32) -> egui::Response {
    let label = egui::Label::new(RichText::new(text).size(size).color(STONE_400));
    ui.add(label.sense(Sense::click()))
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
