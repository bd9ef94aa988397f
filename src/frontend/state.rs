//! View state and action types for the frontend
//!
//! Sections receive read-only context and return `AppAction`s instead of
//! mutating state directly. The app applies every action through
//! [`ViewState::apply`], so the two transition rules (drawer selection closes
//! the drawer, hamburger toggles it) live in one place and can be tested
//! without a rendering host.

use crate::types::{NavOrigin, NavTab, Section};

/// Ephemeral UI state owned by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    active_tab: NavTab,
    menu_open: bool,
}

impl ViewState {
    /// Initial state: Home highlighted, drawer closed
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently highlighted tab
    pub fn active_tab(&self) -> NavTab {
        self.active_tab
    }

    /// Whether the mobile drawer is open
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether `tab` is the highlighted one
    pub fn is_active(&self, tab: NavTab) -> bool {
        self.active_tab == tab
    }

    /// Highlight `tab`. Choosing from the drawer also closes it.
    pub fn select_tab(&mut self, tab: NavTab, origin: NavOrigin) {
        self.active_tab = tab;
        if origin == NavOrigin::Drawer {
            self.menu_open = false;
        }
    }

    /// Open or close the mobile drawer
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Apply one action. Returns the scroll target, if the action asks for one.
    pub fn apply(&mut self, action: &AppAction) -> Option<Section> {
        match *action {
            AppAction::SelectTab { tab, origin } => {
                tracing::debug!("Select tab {} from {:?}", tab, origin);
                self.select_tab(tab, origin);
                None
            }
            AppAction::ToggleMenu => {
                self.toggle_menu();
                tracing::debug!("Drawer open: {}", self.menu_open);
                None
            }
            AppAction::JumpTo(section) => {
                tracing::debug!("Jump to {:?}", section);
                Some(section.anchor())
            }
            // Preferences belong to the app, not the view
            AppAction::SetDarkMode(_) | AppAction::SetReduceMotion(_) => None,
        }
    }
}

/// Actions that any section can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// A nav label (or the hero button) was clicked
    SelectTab { tab: NavTab, origin: NavOrigin },
    /// The hamburger control was clicked
    ToggleMenu,
    /// A footer quick link was clicked
    JumpTo(Section),
    /// The footer dark mode toggle was flipped
    SetDarkMode(bool),
    /// The footer reduce motion toggle was flipped
    SetReduceMotion(bool),
}
