//! Core types for the storefront
//!
//! This module defines the fundamental data structures shared by the catalog
//! and the frontend.
//!
//! # Main Types
//!
//! - [`Product`] - One record of the fixed catalog
//! - [`NavTab`] - The four navigation labels
//! - [`NavOrigin`] - Where a navigation click came from (desktop row or drawer)
//! - [`Section`] - Scroll anchors used by the footer quick links
//! - [`LayoutClass`] - Compact (mobile) vs wide (desktop) layout

use serde::Serialize;

/// A product in the shop catalog
///
/// All fields are `'static` because the catalog is a compiled-in literal
/// that lives for the whole process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Unique, stable identifier within the catalog
    pub id: u32,
    /// Display name
    pub name: &'static str,
    /// Price in whole rupees
    pub price: u32,
    /// Unit of sale (kg, litre, piece, ...)
    pub unit: &'static str,
    /// Short display description
    pub description: &'static str,
    /// Cosmetic grouping tag
    pub category: &'static str,
    /// Externally hosted image URI
    pub image: &'static str,
}

/// Navigation tabs shown in the header
///
/// The active tab is a highlight only; every section is always rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavTab {
    #[default]
    Home,
    Products,
    Payment,
    Contact,
}

impl NavTab {
    /// All tabs in display order
    pub const ALL: [NavTab; 4] = [
        NavTab::Home,
        NavTab::Products,
        NavTab::Payment,
        NavTab::Contact,
    ];

    /// Label shown in the nav bar and drawer
    pub fn label(&self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::Products => "Products",
            NavTab::Payment => "Payment",
            NavTab::Contact => "Contact",
        }
    }
}

impl std::fmt::Display for NavTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where a navigation click originated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOrigin {
    /// The always-visible desktop nav row (or an in-page button)
    Desktop,
    /// The collapsible mobile drawer
    Drawer,
}

/// Page sections that can be scrolled to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Products,
    Payment,
    Contact,
}

impl Section {
    /// The section whose top edge the page scrolls to.
    ///
    /// Home and Contact both point at the top of the page.
    pub fn anchor(&self) -> Section {
        match self {
            Section::Home | Section::Contact => Section::Home,
            other => *other,
        }
    }

    /// Footer link label
    pub fn link_label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Products => "Products",
            Section::Payment => "Payment Methods",
            Section::Contact => "Contact Us",
        }
    }
}

/// Width class of the window, mirrors the `md` breakpoint of the page design
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutClass {
    /// Narrow window: hamburger button and drawer
    Compact,
    /// Desktop window: inline nav row
    Wide,
}

impl LayoutClass {
    /// Width at which the inline nav row replaces the hamburger
    pub const WIDE_BREAKPOINT: f32 = 768.0;

    /// Classify a window width in logical points
    pub fn from_width(width: f32) -> Self {
        if width < Self::WIDE_BREAKPOINT {
            LayoutClass::Compact
        } else {
            LayoutClass::Wide
        }
    }
}

/// Number of product grid columns for a content width
pub fn grid_columns(width: f32) -> usize {
    if width < 640.0 {
        1
    } else if width < 1024.0 {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_tab_default_is_home() {
        assert_eq!(NavTab::default(), NavTab::Home);
    }

    #[test]
    fn test_nav_tab_labels_in_order() {
        let labels: Vec<_> = NavTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Home", "Products", "Payment", "Contact"]);
        assert_eq!(NavTab::Payment.to_string(), "Payment");
    }

    #[test]
    fn test_section_anchor() {
        assert_eq!(Section::Contact.anchor(), Section::Home);
        assert_eq!(Section::Home.anchor(), Section::Home);
        assert_eq!(Section::Products.anchor(), Section::Products);
        assert_eq!(Section::Payment.anchor(), Section::Payment);
    }

    #[test]
    fn test_layout_class_breakpoint() {
        assert_eq!(LayoutClass::from_width(320.0), LayoutClass::Compact);
        assert_eq!(LayoutClass::from_width(767.9), LayoutClass::Compact);
        assert_eq!(LayoutClass::from_width(768.0), LayoutClass::Wide);
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(400.0), 1);
        assert_eq!(grid_columns(640.0), 2);
        assert_eq!(grid_columns(1023.0), 2);
        assert_eq!(grid_columns(1280.0), 3);
    }
}
