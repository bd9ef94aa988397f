//! Colors and visuals
//!
//! The page uses an emerald accent over warm stone neutrals. [`Palette`]
//! resolves every named color for the current light/dark preference so the
//! sections never hardcode RGB values.

use egui::{Color32, CornerRadius, Stroke};

use crate::config::UiPreferences;

// Emerald
pub const EMERALD_50: Color32 = Color32::from_rgb(236, 253, 245);
pub const EMERALD_100: Color32 = Color32::from_rgb(209, 250, 229);
pub const EMERALD_300: Color32 = Color32::from_rgb(110, 231, 183);
pub const EMERALD_400: Color32 = Color32::from_rgb(52, 211, 153);
pub const EMERALD_500: Color32 = Color32::from_rgb(16, 185, 129);
pub const EMERALD_600: Color32 = Color32::from_rgb(5, 150, 105);
pub const EMERALD_700: Color32 = Color32::from_rgb(4, 120, 87);
pub const EMERALD_800: Color32 = Color32::from_rgb(6, 95, 70);
pub const EMERALD_900: Color32 = Color32::from_rgb(6, 78, 59);

// Stone
pub const STONE_50: Color32 = Color32::from_rgb(250, 250, 249);
pub const STONE_100: Color32 = Color32::from_rgb(245, 245, 244);
pub const STONE_200: Color32 = Color32::from_rgb(231, 229, 228);
pub const STONE_400: Color32 = Color32::from_rgb(168, 162, 158);
pub const STONE_500: Color32 = Color32::from_rgb(120, 113, 108);
pub const STONE_600: Color32 = Color32::from_rgb(87, 83, 78);
pub const STONE_800: Color32 = Color32::from_rgb(41, 37, 36);
pub const STONE_900: Color32 = Color32::from_rgb(28, 25, 23);

// Info card tints
pub const BLUE_50: Color32 = Color32::from_rgb(239, 246, 255);
pub const BLUE_600: Color32 = Color32::from_rgb(37, 99, 235);
pub const ORANGE_50: Color32 = Color32::from_rgb(255, 247, 237);
pub const ORANGE_600: Color32 = Color32::from_rgb(234, 88, 12);

/// Page background in light mode (#FDFCF8)
pub const CREAM: Color32 = Color32::from_rgb(253, 252, 248);

/// Named colors for one appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub page: Color32,
    pub band: Color32,
    pub surface: Color32,
    pub border: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    pub text_faint: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
    pub accent_text: Color32,
    pub nav_idle: Color32,
    pub brand: Color32,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            page: CREAM,
            band: STONE_50,
            surface: Color32::WHITE,
            border: STONE_200,
            text: STONE_900,
            text_muted: STONE_500,
            text_faint: STONE_400,
            accent: EMERALD_600,
            accent_soft: EMERALD_100,
            accent_text: EMERALD_700,
            nav_idle: STONE_500,
            brand: EMERALD_900,
        }
    }

    pub fn dark() -> Self {
        Self {
            page: STONE_900,
            band: Color32::from_rgb(34, 31, 29),
            surface: STONE_800,
            border: STONE_600,
            text: STONE_100,
            text_muted: STONE_400,
            text_faint: STONE_500,
            accent: EMERALD_500,
            accent_soft: EMERALD_900,
            accent_text: EMERALD_300,
            nav_idle: STONE_400,
            brand: EMERALD_300,
        }
    }

    pub fn for_preferences(prefs: &UiPreferences) -> Self {
        if prefs.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Install visuals and zoom for the given preferences
pub fn apply_theme(ctx: &egui::Context, prefs: &UiPreferences) -> Palette {
    let palette = Palette::for_preferences(prefs);

    let (theme, mut visuals) = if prefs.dark_mode {
        (egui::Theme::Dark, egui::Visuals::dark())
    } else {
        (egui::Theme::Light, egui::Visuals::light())
    };
    ctx.set_theme(theme);

    visuals.panel_fill = palette.page;
    visuals.window_fill = palette.surface;
    visuals.extreme_bg_color = palette.surface;
    visuals.hyperlink_color = palette.accent;
    visuals.selection.bg_fill = palette.accent;
    visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);
    visuals.window_shadow.offset = [0, 0];

    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.widgets.inactive.corner_radius = CornerRadius::same(12);
    visuals.widgets.hovered.corner_radius = CornerRadius::same(12);
    visuals.widgets.active.corner_radius = CornerRadius::same(12);
    visuals.widgets.active.bg_fill = palette.accent;

    ctx.set_visuals(visuals);
    ctx.set_zoom_factor(prefs.font_scale);

    palette
}
