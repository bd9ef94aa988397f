//! Info panel: location, opening hours and phone number.

use egui::Ui;

use crate::frontend::icons::Icon;
use crate::frontend::theme::{Palette, BLUE_50, BLUE_600, ORANGE_50, ORANGE_600};
use crate::frontend::widgets::InfoCard;
use crate::shop::{LOCATION, OPENING_HOURS, PHONE};
use crate::types::LayoutClass;

/// Context needed to render the info panel.
pub struct InfoContext<'a> {
    pub palette: &'a Palette,
    pub layout: LayoutClass,
}

/// Render the three info cards, side by side on wide windows.
pub fn render_info(ui: &mut Ui, ctx: &InfoContext<'_>) {
    let palette = ctx.palette;

    super::band(ui, palette.band, 48, |ui, _width| {
        let cards = |ui: &mut Ui, index: usize| {
            let width = ui.available_width();
            let card = match index {
                0 => InfoCard::new(Icon::Pin, "Our Location", LOCATION, palette),
                1 => InfoCard::new(Icon::Clock, "Opening Hours", OPENING_HOURS, palette)
                    .with_tint(BLUE_600, BLUE_50),
                _ => InfoCard::new(Icon::Phone, "Contact Us", PHONE, palette)
                    .with_tint(ORANGE_600, ORANGE_50),
            };
            ui.add(card.with_width(width));
        };

        match ctx.layout {
            LayoutClass::Wide => {
                ui.spacing_mut().item_spacing.x = 32.0;
                ui.columns(3, |columns| {
                    for (index, column) in columns.iter_mut().enumerate() {
                        cards(column, index);
                    }
                });
            }
            LayoutClass::Compact => {
                for index in 0..3 {
                    cards(ui, index);
                    ui.add_space(16.0);
                }
            }
        }
    });
}
