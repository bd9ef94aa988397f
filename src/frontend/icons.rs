//! Icon glyphs
//!
//! The page uses a fixed set of icons. They are drawn as text with the emoji
//! and icon fonts bundled in egui's `default_fonts`.

/// Every icon the page uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Basket,
    Pin,
    User,
    Card,
    Phone,
    Clock,
    Check,
    Chevron,
    Search,
    Menu,
    Close,
}

impl Icon {
    pub const ALL: [Icon; 11] = [
        Icon::Basket,
        Icon::Pin,
        Icon::User,
        Icon::Card,
        Icon::Phone,
        Icon::Clock,
        Icon::Check,
        Icon::Chevron,
        Icon::Search,
        Icon::Menu,
        Icon::Close,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Basket => "🛒",
            Icon::Pin => "📍",
            Icon::User => "👤",
            Icon::Card => "💳",
            Icon::Phone => "📞",
            Icon::Clock => "🕘",
            Icon::Check => "✔",
            Icon::Chevron => "⏵",
            Icon::Search => "🔍",
            Icon::Menu => "☰",
            Icon::Close => "✖",
        }
    }

    /// Icon as sized, colored rich text
    pub fn rich(&self, size: f32, color: egui::Color32) -> egui::RichText {
        egui::RichText::new(self.glyph()).size(size).color(color)
    }
}
