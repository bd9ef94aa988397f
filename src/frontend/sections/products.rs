//! Product grid with its heading and search field.
//!
//! Every catalog card is rendered, in catalog order. The search field keeps
//! whatever is typed into it but does not filter the grid.

use egui::{Color32, CornerRadius, Margin, RichText, Stroke, Ui};

use crate::catalog::ProductCard;
use crate::frontend::animation::{reveal, FrameReveal};
use crate::frontend::icons::Icon;
use crate::frontend::theme::Palette;
use crate::frontend::widgets::RemoteImage;
use crate::types::grid_columns;

/// Width / height ratio of the card photos
pub const IMAGE_ASPECT: f32 = 4.0 / 3.0;

/// Gap between grid cells
pub const GRID_GAP: f32 = 32.0;

/// Context needed to render the products section.
pub struct ProductsContext<'a> {
    pub cards: &'a [ProductCard],
    pub palette: &'a Palette,
    pub load_remote_images: bool,
}

/// What the products section did this frame
#[derive(Debug, Default)]
pub struct ProductsResult {
    /// Ids of the cards drawn, in drawing order
    pub rendered: Vec<u32>,
    /// Whether the search text was edited
    pub search_changed: bool,
}

/// Render the products section.
pub fn render_products(
    ui: &mut Ui,
    ctx: &ProductsContext<'_>,
    search: &mut String,
    reveals: &mut FrameReveal<'_>,
) -> ProductsResult {
    let mut result = ProductsResult::default();
    let palette = ctx.palette;

    super::band(ui, palette.page, 80, |ui, width| {
        result.search_changed = render_header(ui, palette, width, search);
        ui.add_space(48.0);

        let columns = grid_columns(width);
        let cell_width = (width - GRID_GAP * (columns as f32 - 1.0)) / columns as f32;

        for (row, chunk) in ctx.cards.chunks(columns).enumerate() {
            if row > 0 {
                ui.add_space(GRID_GAP);
            }
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = GRID_GAP;
                for card in chunk {
                    ui.vertical(|ui| {
                        ui.set_width(cell_width);

                        let probe = egui::Rect::from_min_size(
                            ui.cursor().min,
                            egui::vec2(cell_width, 1.0),
                        );
                        let in_view = ui.is_rect_visible(probe);
                        let id = egui::Id::new(("product_card", card.id));
                        let progress = reveals.progress(id, in_view, card.reveal_delay);

                        reveal(ui, progress, |ui| {
                            render_card(ui, card, palette, cell_width, ctx.load_remote_images);
                        });
                    });
                    result.rendered.push(card.id);
                }
            });
        }
    });

    result
}

fn render_header(ui: &mut Ui, palette: &Palette, width: f32, search: &mut String) -> bool {
    let mut changed = false;

    let body = |ui: &mut Ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new("Our Grocery Products")
                    .size(30.0)
                    .strong()
                    .color(palette.text),
            );
            ui.add_space(16.0);
            ui.label(
                RichText::new(
                    "We source only the freshest and most reliable products for our \
                     customers. Quality is our top priority.",
                )
                .color(palette.text_muted),
            );
        });
    };

    if width >= 768.0 {
        ui.horizontal(|ui| {
            body(ui);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Max), |ui| {
                changed = render_search(ui, palette, 256.0, search);
            });
        });
    } else {
        body(ui);
        ui.add_space(24.0);
        changed = render_search(ui, palette, width, search);
    }

    changed
}

fn render_search(ui: &mut Ui, palette: &Palette, width: f32, search: &mut String) -> bool {
    let response = egui::Frame::new()
        .fill(palette.surface)
        .stroke(Stroke::new(1.0, palette.border))
        .corner_radius(CornerRadius::same(255))
        .inner_margin(Margin::symmetric(14, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(Icon::Search.rich(14.0, palette.text_faint));
                ui.add(
                    egui::TextEdit::singleline(search)
                        .hint_text("Search products...")
                        .frame(false)
                        .desired_width(width - 56.0),
                )
            })
            .inner
        })
        .inner;

    if response.changed() {
        tracing::trace!("Search text is now {:?}", search);
    }

    response.changed()
}

fn render_card(
    ui: &mut Ui,
    card: &ProductCard,
    palette: &Palette,
    width: f32,
    load_remote_images: bool,
) {
    egui::Frame::new()
        .fill(palette.surface)
        .stroke(Stroke::new(1.0, palette.border))
        .corner_radius(CornerRadius::same(24))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.spacing_mut().item_spacing.y = 0.0;

            let image_size = egui::vec2(width, width / IMAGE_ASPECT);
            let image = ui.add(
                RemoteImage::new(card.image, image_size)
                    .corner_radius(CornerRadius {
                        nw: 24,
                        ne: 24,
                        sw: 0,
                        se: 0,
                    })
                    .enabled(load_remote_images)
                    .placeholder(palette.band),
            );
            super::paint_badge(
                ui.painter(),
                image.rect.min + egui::vec2(16.0, 16.0),
                &card.category.to_uppercase(),
                10.0,
                Color32::from_white_alpha(230),
                crate::frontend::theme::EMERALD_700,
            );

            egui::Frame::new()
                .inner_margin(Margin::same(24))
                .show(ui, |ui| {
                    ui.set_width(width - 48.0);
                    render_card_body(ui, card, palette);
                });
        });
}

fn render_card_body(ui: &mut Ui, card: &ProductCard, palette: &Palette) {
    ui.horizontal_top(|ui| {
        ui.label(
            RichText::new(card.name)
                .size(20.0)
                .strong()
                .color(palette.text),
        );
        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
            ui.label(
                RichText::new(&card.price_label)
                    .size(18.0)
                    .strong()
                    .color(palette.accent),
            );
            ui.label(
                RichText::new(card.unit_label.to_uppercase())
                    .size(10.0)
                    .color(palette.text_faint),
            );
        });
    });
    ui.add_space(8.0);

    // Two lines at most, like the page design
    let mut job = egui::text::LayoutJob::single_section(
        card.description.to_owned(),
        egui::TextFormat {
            font_id: egui::FontId::proportional(13.0),
            color: palette.text_muted,
            ..Default::default()
        },
    );
    job.wrap = egui::text::TextWrapping {
        max_width: ui.available_width(),
        max_rows: 2,
        break_anywhere: false,
        overflow_character: Some('…'),
    };
    let galley = ui.painter().layout_job(job);
    ui.label(galley);
    ui.add_space(24.0);

    // Visual only: there is no order flow
    let add = egui::Button::new(
        RichText::new(format!("{}  Add to Order", Icon::Basket.glyph()))
            .size(14.0)
            .strong()
            .color(palette.text),
    )
    .fill(palette.band)
    .stroke(Stroke::new(1.0, palette.border))
    .corner_radius(CornerRadius::same(12));
    ui.add_sized([ui.available_width(), 44.0], add);
}
