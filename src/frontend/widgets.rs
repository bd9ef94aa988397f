//! Custom widgets for the storefront UI
//!
//! This module provides the reusable building blocks the page sections are
//! made of.
//!
//! # Widgets
//!
//! - [`Pill`] - Rounded badge with a short label (categories, section tags)
//! - [`IconTile`] - Square tinted tile holding one icon
//! - [`CheckItem`] - Check mark followed by a line of text
//! - [`InfoCard`] - Bordered card with an icon tile, title and body
//! - [`RemoteImage`] - Externally hosted image with a placeholder fallback
//! - [`Chip`] - Small square label (payment apps, social links)

use egui::{Color32, CornerRadius, Margin, Response, RichText, Stroke, Ui, Widget};

use crate::frontend::icons::Icon;
use crate::frontend::theme::Palette;

/// A rounded badge with a short label
pub struct Pill {
    text: String,
    fill: Color32,
    text_color: Color32,
    stroke: Option<Color32>,
    icon: Option<Icon>,
}

/// Label size of every pill
const PILL_TEXT_SIZE: f32 = 11.0;

impl Pill {
    pub fn new(text: impl Into<String>, fill: Color32, text_color: Color32) -> Self {
        Self {
            text: text.into(),
            fill,
            text_color,
            stroke: None,
            icon: None,
        }
    }

    /// Draw a border around the pill
    pub fn with_stroke(mut self, color: Color32) -> Self {
        self.stroke = Some(color);
        self
    }

    /// Put an icon in front of the label
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

impl Widget for Pill {
    fn ui(self, ui: &mut Ui) -> Response {
        let mut frame = egui::Frame::new()
            .fill(self.fill)
            .corner_radius(CornerRadius::same(255))
            .inner_margin(Margin::symmetric(12, 4));
        if let Some(stroke) = self.stroke {
            frame = frame.stroke(Stroke::new(1.0, stroke));
        }

        frame
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 6.0;
                    if let Some(icon) = self.icon {
                        ui.label(icon.rich(PILL_TEXT_SIZE, self.text_color));
                    }
                    ui.label(
                        RichText::new(self.text.to_uppercase())
                            .size(PILL_TEXT_SIZE)
                            .strong()
                            .color(self.text_color),
                    );
                });
            })
            .response
    }
}

/// A square tinted tile holding one icon
pub struct IconTile {
    icon: Icon,
    fill: Color32,
    color: Color32,
    icon_size: f32,
    padding: i8,
}

impl IconTile {
    pub fn new(icon: Icon, fill: Color32, color: Color32) -> Self {
        Self {
            icon,
            fill,
            color,
            icon_size: 22.0,
            padding: 10,
        }
    }

    pub fn with_icon_size(mut self, size: f32) -> Self {
        self.icon_size = size;
        self
    }

    pub fn with_padding(mut self, padding: i8) -> Self {
        self.padding = padding;
        self
    }
}

impl Widget for IconTile {
    fn ui(self, ui: &mut Ui) -> Response {
        egui::Frame::new()
            .fill(self.fill)
            .corner_radius(CornerRadius::same(10))
            .inner_margin(Margin::same(self.padding))
            .show(ui, |ui| {
                ui.label(self.icon.rich(self.icon_size, self.color));
            })
            .response
    }
}

/// A check mark followed by a line of text
pub struct CheckItem {
    text: String,
    icon_color: Color32,
    text_color: Color32,
}

impl CheckItem {
    pub fn new(text: impl Into<String>, icon_color: Color32, text_color: Color32) -> Self {
        Self {
            text: text.into(),
            icon_color,
            text_color,
        }
    }
}

impl Widget for CheckItem {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 10.0;
            ui.label(Icon::Check.rich(16.0, self.icon_color));
            ui.label(RichText::new(self.text).size(15.0).color(self.text_color));
        })
        .response
    }
}

/// A bordered card with an icon tile, title and body line
pub struct InfoCard<'a> {
    icon: Icon,
    tint: Color32,
    tint_fill: Color32,
    title: &'a str,
    body: &'a str,
    palette: &'a Palette,
    width: f32,
}

impl<'a> InfoCard<'a> {
    pub fn new(icon: Icon, title: &'a str, body: &'a str, palette: &'a Palette) -> Self {
        Self {
            icon,
            tint: palette.accent,
            tint_fill: palette.accent_soft,
            title,
            body,
            palette,
            width: 320.0,
        }
    }

    /// Icon color and the tile fill behind it
    pub fn with_tint(mut self, tint: Color32, fill: Color32) -> Self {
        self.tint = tint;
        self.tint_fill = fill;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

impl Widget for InfoCard<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        egui::Frame::new()
            .fill(self.palette.surface)
            .stroke(Stroke::new(1.0, self.palette.border))
            .corner_radius(CornerRadius::same(16))
            .inner_margin(Margin::same(24))
            .show(ui, |ui| {
                ui.set_width(self.width - 48.0);
                ui.horizontal_top(|ui| {
                    ui.spacing_mut().item_spacing.x = 16.0;
                    ui.add(IconTile::new(self.icon, self.tint_fill, self.tint));
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(self.title)
                                .strong()
                                .size(16.0)
                                .color(self.palette.text),
                        );
                        ui.label(RichText::new(self.body).size(13.0).color(self.palette.text_muted));
                    });
                });
            })
            .response
    }
}

/// An externally hosted image
///
/// When remote loading is off the slot is painted as a flat placeholder. A URI
/// that fails to load shows egui's own error presentation; there is no retry.
pub struct RemoteImage<'a> {
    uri: &'a str,
    size: egui::Vec2,
    corner_radius: CornerRadius,
    enabled: bool,
    placeholder: Color32,
    opacity: f32,
}

impl<'a> RemoteImage<'a> {
    pub fn new(uri: &'a str, size: egui::Vec2) -> Self {
        Self {
            uri,
            size,
            corner_radius: CornerRadius::ZERO,
            enabled: true,
            placeholder: Color32::from_gray(230),
            opacity: 1.0,
        }
    }

    pub fn corner_radius(mut self, radius: impl Into<CornerRadius>) -> Self {
        self.corner_radius = radius.into();
        self
    }

    /// Whether to fetch the image at all
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn placeholder(mut self, color: Color32) -> Self {
        self.placeholder = color;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

impl Widget for RemoteImage<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        if self.enabled {
            let image = egui::Image::new(self.uri)
                .fit_to_exact_size(self.size)
                .maintain_aspect_ratio(false)
                .corner_radius(self.corner_radius)
                .tint(Color32::WHITE.gamma_multiply(self.opacity));
            ui.add(image)
        } else {
            let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::hover());
            if ui.is_rect_visible(rect) {
                ui.painter().rect_filled(
                    rect,
                    self.corner_radius,
                    self.placeholder.gamma_multiply(self.opacity),
                );
            }
            response
        }
    }
}

/// A small square label
pub struct Chip {
    text: String,
    fill: Color32,
    text_color: Color32,
    size: f32,
    round: bool,
}

impl Chip {
    pub fn new(text: impl Into<String>, fill: Color32, text_color: Color32) -> Self {
        Self {
            text: text.into(),
            fill,
            text_color,
            size: 40.0,
            round: false,
        }
    }

    /// Draw as a circle instead of a rounded square
    pub fn round(mut self) -> Self {
        self.round = true;
        self
    }
}

impl Widget for Chip {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(self.size, self.size), egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let fill = if response.hovered() && self.round {
                crate::frontend::theme::EMERALD_600
            } else {
                self.fill
            };
            let radius = if self.round { self.size / 2.0 } else { 8.0 };
            ui.painter().rect_filled(rect, radius, fill);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                &self.text,
                egui::FontId::proportional(10.0),
                self.text_color,
            );
        }

        response
    }
}
