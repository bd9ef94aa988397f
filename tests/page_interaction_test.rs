//! Pointer and keyboard tests for the storefront page
//!
//! Widgets are located by the text they paint, then clicked with real
//! pointer events so the actions come from the controls themselves.

mod common;

use common::PageDriver;
use grocery_storefront::frontend::icons::Icon;
use grocery_storefront::frontend::AppAction;
use grocery_storefront::{LayoutClass, NavOrigin, NavTab, Section};

const COMPACT: (f32, f32) = (400.0, 800.0);
// Tall enough for the whole page to be on screen
const WIDE: (f32, f32) = (1280.0, 8000.0);

#[test]
fn test_hamburger_opens_drawer() {
    let mut page = PageDriver::new(COMPACT.0, COMPACT.1);
    assert_eq!(page.step().layout, Some(LayoutClass::Compact));

    let report = page.click_text(Icon::Menu.glyph());
    assert_eq!(report.actions, vec![AppAction::ToggleMenu]);
    assert!(page.app.view_state().is_menu_open());

    // The close glyph replaces the menu glyph
    page.settle(5);
    assert!(!page.find_all(Icon::Close.glyph()).is_empty());
    assert!(page.find_all(Icon::Menu.glyph()).is_empty());
}

#[test]
fn test_drawer_item_selects_tab_and_closes_drawer() {
    let mut page = PageDriver::new(COMPACT.0, COMPACT.1);
    page.click_text(Icon::Menu.glyph());
    page.settle(5);

    let report = page.click_text(NavTab::Contact.label());
    assert_eq!(
        report.actions,
        vec![AppAction::SelectTab {
            tab: NavTab::Contact,
            origin: NavOrigin::Drawer,
        }]
    );
    assert_eq!(page.app.view_state().active_tab(), NavTab::Contact);
    assert!(!page.app.view_state().is_menu_open());
    assert_eq!(report.rendered_cards, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_drawer_hidden_while_closed() {
    let page = PageDriver::new(COMPACT.0, COMPACT.1);
    assert!(page.find_all(NavTab::Contact.label()).is_empty());
}

#[test]
fn test_wide_tab_click_highlights_tab() {
    let mut page = PageDriver::new(WIDE.0, WIDE.1);

    let report = page.click_text(NavTab::Payment.label());
    assert_eq!(
        report.actions,
        vec![AppAction::SelectTab {
            tab: NavTab::Payment,
            origin: NavOrigin::Desktop,
        }]
    );
    assert!(page.app.view_state().is_active(NavTab::Payment));
    assert!(!page.app.view_state().is_menu_open());
}

#[test]
fn test_browse_products_button_selects_products() {
    let mut page = PageDriver::new(WIDE.0, WIDE.1);

    let pos = page.find_prefix("Browse Products").center();
    let report = page.click_at(pos);
    assert!(report.actions.contains(&AppAction::SelectTab {
        tab: NavTab::Products,
        origin: NavOrigin::Desktop,
    }));
    assert_eq!(page.app.view_state().active_tab(), NavTab::Products);
}

#[test]
fn test_typing_into_search_keeps_all_cards() {
    let mut page = PageDriver::new(WIDE.0, WIDE.1);
    let before = page.step();

    page.click_text("Search products...");
    page.step();

    let typed = page.type_text("r");
    assert!(typed.search_changed);
    let typed = page.type_text("ice");
    assert!(typed.search_changed);

    assert_eq!(page.app.search_query(), "rice");
    assert_eq!(typed.rendered_cards, before.rendered_cards);
    assert_eq!(page.step().rendered_cards, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_footer_quick_link_requests_scroll() {
    let mut page = PageDriver::new(WIDE.0, WIDE.1);

    let report = page.click_text(Section::Payment.link_label());
    assert_eq!(report.actions, vec![AppAction::JumpTo(Section::Payment)]);
    assert_eq!(page.app.pending_scroll(), Some(Section::Payment));
    // Quick links never move the highlight
    assert_eq!(page.app.view_state().active_tab(), NavTab::Home);

    page.step();
    assert_eq!(page.app.pending_scroll(), None);
}

#[test]
fn test_footer_toggles_change_preferences() {
    let mut page = PageDriver::new(WIDE.0, WIDE.1);
    assert!(!page.app.preferences().dark_mode);
    assert!(page.app.preferences().reduce_motion);

    let report = page.click_text("Dark mode");
    assert_eq!(report.actions, vec![AppAction::SetDarkMode(true)]);
    assert!(page.app.preferences().dark_mode);
    assert_eq!(page.ctx.theme(), egui::Theme::Dark);

    let report = page.click_text("Reduce motion");
    assert_eq!(report.actions, vec![AppAction::SetReduceMotion(false)]);
    assert!(!page.app.preferences().reduce_motion);
}
