//! Hero banner with the welcome copy, the browse button and the owner chip.

use egui::{Color32, CornerRadius, Margin, RichText, Stroke, Ui};

use crate::frontend::animation::reveal;
use crate::frontend::icons::Icon;
use crate::frontend::state::AppAction;
use crate::frontend::theme::Palette;
use crate::frontend::widgets::{Pill, RemoteImage};
use crate::shop::{HERO_IMAGE, OWNER_NAME, SHOP_NAME, SINCE_YEAR};
use crate::types::{NavOrigin, NavTab};

/// Width from which the decorative background image is shown
pub const HERO_IMAGE_BREAKPOINT: f32 = 1024.0;

/// Context needed to render the hero.
pub struct HeroContext<'a> {
    pub palette: &'a Palette,
    /// Entrance progress, 0.0 hidden to 1.0 fully shown
    pub progress: f32,
    pub load_remote_images: bool,
}

/// Render the hero. Returns the actions its controls produced.
pub fn render_hero(ui: &mut Ui, ctx: &HeroContext<'_>) -> Vec<AppAction> {
    let mut actions = Vec::new();
    let palette = ctx.palette;

    super::band(ui, palette.page, 80, |ui, width| {
        let copy_width = width.min(672.0);

        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.vertical(|ui| {
                ui.set_width(copy_width);
                reveal(ui, ctx.progress, |ui| {
                    render_copy(ui, palette, &mut actions);
                });
            });

            if width >= HERO_IMAGE_BREAKPOINT {
                let image_width = (width / 2.0).min(width - copy_width - 32.0);
                ui.add_space(width - copy_width - image_width);
                ui.add(
                    RemoteImage::new(HERO_IMAGE, egui::vec2(image_width, 420.0))
                        .corner_radius(CornerRadius {
                            nw: 100,
                            sw: 100,
                            ne: 0,
                            se: 0,
                        })
                        .enabled(ctx.load_remote_images)
                        .placeholder(palette.band)
                        .opacity(0.1),
                );
            }
        });
    });

    actions
}

fn render_copy(ui: &mut Ui, palette: &Palette, actions: &mut Vec<AppAction>) {
    ui.add(Pill::new(
        format!("Quality Groceries Since {}", SINCE_YEAR),
        palette.accent_soft,
        palette.accent_text,
    ));
    ui.add_space(16.0);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 12.0;
        ui.label(
            RichText::new("Fresh Essentials for Your")
                .size(52.0)
                .strong()
                .color(palette.text),
        );
        ui.label(
            RichText::new("Daily Life")
                .size(52.0)
                .strong()
                .color(palette.accent),
        );
    });
    ui.add_space(24.0);

    ui.label(
        RichText::new(format!(
            "Welcome to {} Grocery Shop. We provide the finest quality grains, oils, and \
             essentials directly to your kitchen in Kappinadka, Gandinagara.",
            SHOP_NAME
        ))
        .size(18.0)
        .color(palette.text_muted),
    );
    ui.add_space(32.0);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 16.0;

        let browse = egui::Button::new(
            RichText::new(format!("Browse Products {}", Icon::Chevron.glyph()))
                .size(16.0)
                .strong()
                .color(Color32::WHITE),
        )
        .fill(palette.accent)
        .corner_radius(CornerRadius::same(255))
        .min_size(egui::vec2(200.0, 56.0));

        if ui.add(browse).clicked() {
            actions.push(AppAction::SelectTab {
                tab: NavTab::Products,
                origin: NavOrigin::Desktop,
            });
        }

        render_owner_chip(ui, palette);
    });
}

fn render_owner_chip(ui: &mut Ui, palette: &Palette) {
    egui::Frame::new()
        .fill(palette.surface)
        .stroke(Stroke::new(1.0, palette.border))
        .corner_radius(CornerRadius::same(255))
        .inner_margin(Margin::symmetric(16, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;

                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, palette.band);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    Icon::User.glyph(),
                    egui::FontId::proportional(18.0),
                    palette.text_muted,
                );

                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing.y = 0.0;
                    ui.label(
                        RichText::new("OWNER")
                            .size(11.0)
                            .color(palette.text_faint),
                    );
                    ui.label(
                        RichText::new(OWNER_NAME)
                            .size(14.0)
                            .strong()
                            .color(palette.text),
                    );
                });
            });
        });
}
