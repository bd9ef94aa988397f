//! Page sections
//!
//! Each section is a render function taking a read-only context and returning
//! the [`AppAction`](crate::frontend::AppAction)s its controls produced. The app
//! stacks them top to bottom inside one scroll area; none of them is ever
//! hidden.

pub mod footer;
pub mod hero;
pub mod info;
pub mod nav;
pub mod payment;
pub mod products;

pub use footer::{render_footer, FooterContext};
pub use hero::{render_hero, HeroContext};
pub use info::{render_info, InfoContext};
pub use nav::{render_nav, NavContext};
pub use payment::{render_payment, PaymentContext};
pub use products::{render_products, ProductsContext, ProductsResult};

use egui::{Color32, Margin, Ui};

/// Widest the page content gets before it is centered
pub const MAX_CONTENT_WIDTH: f32 = 1280.0;

/// Side gutter for a window width
pub fn gutter(width: f32) -> f32 {
    if width < 640.0 {
        16.0
    } else if width < 1024.0 {
        24.0
    } else {
        32.0
    }
}

/// Content width and left offset for a band of `width`
pub fn content_span(width: f32) -> (f32, f32) {
    let gutter = gutter(width);
    let content = (width - 2.0 * gutter).clamp(0.0, MAX_CONTENT_WIDTH);
    let offset = ((width - content) / 2.0).max(0.0);
    (content, offset)
}

/// A full-width colored band with centered, width-limited content
pub fn band<R>(
    ui: &mut Ui,
    fill: Color32,
    vertical_padding: i8,
    add_contents: impl FnOnce(&mut Ui, f32) -> R,
) -> egui::InnerResponse<R> {
    let width = ui.available_width();
    let (content, offset) = content_span(width);
    let item_spacing = ui.ctx().style().spacing.item_spacing;

    egui::Frame::new()
        .fill(fill)
        .inner_margin(Margin::symmetric(0, vertical_padding))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.add_space(offset);
                ui.vertical(|ui| {
                    ui.set_width(content);
                    ui.spacing_mut().item_spacing = item_spacing;
                    add_contents(ui, content)
                })
                .inner
            })
            .inner
        })
}

/// Paint a rounded label at `pos` without taking layout space
pub fn paint_badge(
    painter: &egui::Painter,
    pos: egui::Pos2,
    text: &str,
    size: f32,
    fill: Color32,
    color: Color32,
) -> egui::Rect {
    let galley = painter.layout_no_wrap(
        text.to_owned(),
        egui::FontId::proportional(size),
        color,
    );
    let padding = egui::vec2(12.0, 5.0);
    let rect = egui::Rect::from_min_size(pos, galley.size() + 2.0 * padding);
    painter.rect_filled(rect, rect.height() / 2.0, fill);
    painter.galley(rect.min + padding, galley, color);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_span_is_centered_and_capped() {
        let (content, offset) = content_span(2000.0);
        assert_eq!(content, MAX_CONTENT_WIDTH);
        assert_eq!(offset, 360.0);

        let (content, offset) = content_span(400.0);
        assert_eq!(content, 368.0);
        assert_eq!(offset, 16.0);
    }

    #[test]
    fn test_gutter_steps() {
        assert_eq!(gutter(320.0), 16.0);
        assert_eq!(gutter(800.0), 24.0);
        assert_eq!(gutter(1440.0), 32.0);
    }
}
