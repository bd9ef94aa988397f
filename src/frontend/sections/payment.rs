//! UPI payment section: benefits, the merchant UPI id and the QR card.

use egui::{Color32, CornerRadius, Margin, RichText, Stroke, Ui};

use crate::frontend::animation::FrameReveal;
use crate::frontend::icons::Icon;
use crate::frontend::theme::{
    EMERALD_100, EMERALD_300, EMERALD_400, EMERALD_500, EMERALD_700, EMERALD_800, EMERALD_900,
    STONE_100, STONE_500,
};
use crate::frontend::widgets::{CheckItem, Chip, Pill, RemoteImage};
use crate::shop::{UpiPayment, OWNER_NAME, PAYMENT_BENEFITS, QR_SIZE, UPI_APPS, UPI_ID};

/// Width from which copy and QR card sit side by side
pub const SPLIT_BREAKPOINT: f32 = 1024.0;

/// Context needed to render the payment section.
pub struct PaymentContext<'a> {
    pub payment: &'a UpiPayment<'a>,
    pub load_remote_images: bool,
}

/// Render the payment section.
pub fn render_payment(ui: &mut Ui, ctx: &PaymentContext<'_>, reveals: &mut FrameReveal<'_>) {
    let response = super::band(ui, EMERALD_900, 80, |ui, width| {
        if width >= SPLIT_BREAKPOINT {
            let half = (width - 64.0) / 2.0;
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = 64.0;
                ui.vertical(|ui| {
                    ui.set_width(half);
                    render_copy(ui);
                });
                ui.vertical_centered(|ui| {
                    ui.set_width(half);
                    render_qr_card(ui, ctx, reveals);
                });
            });
        } else {
            render_copy(ui);
            ui.add_space(48.0);
            ui.vertical_centered(|ui| render_qr_card(ui, ctx, reveals));
        }
    });

    paint_rings(ui, response.response.rect);
}

/// Two faint decorative rings behind the content
fn paint_rings(ui: &Ui, rect: egui::Rect) {
    let painter = ui.painter().with_clip_rect(rect);
    let ring = Color32::WHITE.gamma_multiply(0.1);
    painter.circle_stroke(
        rect.right_top() + egui::vec2(-168.0, 168.0),
        128.0,
        Stroke::new(4.0, ring),
    );
    painter.circle_stroke(
        rect.left_bottom() + egui::vec2(232.0, -232.0),
        192.0,
        Stroke::new(2.0, ring),
    );
}

fn render_copy(ui: &mut Ui) {
    ui.add(
        Pill::new("Secure UPI Payment", EMERALD_800, EMERALD_300)
            .with_stroke(EMERALD_700)
            .with_icon(Icon::Card),
    );
    ui.add_space(24.0);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 12.0;
        ui.label(
            RichText::new("Quick & Easy")
                .size(44.0)
                .strong()
                .color(Color32::WHITE),
        );
        ui.label(
            RichText::new("Digital Payments")
                .size(44.0)
                .strong()
                .color(EMERALD_400),
        );
    });
    ui.add_space(24.0);

    ui.label(
        RichText::new(
            "We support all major UPI apps including Google Pay, PhonePe, and Paytm. \
             Simply scan the QR code to complete your payment instantly.",
        )
        .size(18.0)
        .color(EMERALD_100.gamma_multiply(0.8)),
    );
    ui.add_space(32.0);

    ui.spacing_mut().item_spacing.y = 16.0;
    for benefit in PAYMENT_BENEFITS {
        ui.add(CheckItem::new(benefit, EMERALD_400, EMERALD_100));
    }
    ui.add_space(24.0);

    egui::Frame::new()
        .fill(EMERALD_800.gamma_multiply(0.3))
        .stroke(Stroke::new(1.0, EMERALD_700))
        .corner_radius(CornerRadius::same(16))
        .inner_margin(Margin::same(24))
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 4.0;
            ui.label(RichText::new("UPI ID").size(13.0).strong().color(EMERALD_300));
            ui.label(
                RichText::new(UPI_ID)
                    .monospace()
                    .size(24.0)
                    .strong()
                    .color(Color32::WHITE),
            );
        });
}

fn render_qr_card(ui: &mut Ui, ctx: &PaymentContext<'_>, reveals: &mut FrameReveal<'_>) {
    let probe =
        egui::Rect::from_min_size(ui.cursor().min, egui::vec2(ui.available_width(), 1.0));
    let in_view = ui.is_rect_visible(probe);
    let progress = reveals.progress(egui::Id::new("payment_qr_card"), in_view, 0.0);

    // Scales from 90% to full size while fading in
    let scale = 0.9 + 0.1 * progress;
    let qr_side = QR_SIZE as f32 * scale;
    let qr_url = ctx.payment.qr_image_url(QR_SIZE);

    ui.scope(|ui| {
        ui.set_opacity(progress);

        let card = egui::Frame::new()
            .fill(Color32::WHITE)
            .corner_radius(CornerRadius::same(40))
            .inner_margin(Margin::same(32))
            .show(ui, |ui| {
                ui.set_width(QR_SIZE as f32);
                ui.vertical_centered(|ui| {
                    ui.add(
                        RemoteImage::new(&qr_url, egui::vec2(qr_side, qr_side))
                            .enabled(ctx.load_remote_images)
                            .placeholder(STONE_100),
                    )
                    .on_hover_text(ctx.payment.uri());
                    ui.add_space(24.0);

                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 16.0;
                        let row = UPI_APPS.len() as f32 * 56.0 - 16.0;
                        ui.add_space(((QR_SIZE as f32 - row) / 2.0 - 16.0).max(0.0));
                        for app in UPI_APPS {
                            ui.add(Chip::new(app, STONE_100, STONE_500));
                        }
                    });
                });
            });

        super::paint_badge(
            ui.painter(),
            card.response.rect.right_top() + egui::vec2(-100.0, -16.0),
            "Scan to Pay",
            14.0,
            EMERALD_500,
            Color32::WHITE,
        );
    });

    ui.add_space(32.0);
    ui.label(
        RichText::new(format!("Verified Merchant: {}", OWNER_NAME))
            .size(14.0)
            .color(EMERALD_300),
    );
}
