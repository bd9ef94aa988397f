//! Headless rendering tests for the storefront page
//!
//! These run the full page through `egui::Context::run` without a window.

mod common;

use common::{headless_app, raw_input, run_frame};
use grocery_storefront::frontend::AppAction;
use grocery_storefront::{LayoutClass, NavOrigin, NavTab, Section};

#[test]
fn test_initial_frame_renders_catalog_in_order() {
    let (ctx, mut app) = headless_app();
    let report = run_frame(&ctx, &mut app, raw_input(1280.0, 4000.0));

    assert_eq!(report.rendered_cards, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert!(report.actions.is_empty());
    assert_eq!(app.view_state().active_tab(), NavTab::Home);
    assert!(!app.view_state().is_menu_open());
}

#[test]
fn test_layout_follows_window_width() {
    let (ctx, mut app) = headless_app();
    let wide = run_frame(&ctx, &mut app, raw_input(1280.0, 800.0));
    assert_eq!(wide.layout, Some(LayoutClass::Wide));

    let compact = run_frame(&ctx, &mut app, raw_input(400.0, 800.0));
    assert_eq!(compact.layout, Some(LayoutClass::Compact));
    assert_eq!(compact.rendered_cards.len(), 8);
}

#[test]
fn test_search_text_does_not_filter_cards() {
    let (ctx, mut app) = headless_app();
    let before = run_frame(&ctx, &mut app, raw_input(1280.0, 4000.0));

    app.set_search_query("rice");
    let after = run_frame(&ctx, &mut app, raw_input(1280.0, 4000.0));

    assert_eq!(app.search_query(), "rice");
    assert_eq!(before.rendered_cards, after.rendered_cards);
    assert_eq!(app.cards().len(), 8);
}

#[test]
fn test_drawer_flow_across_frames() {
    let (ctx, mut app) = headless_app();
    run_frame(&ctx, &mut app, raw_input(400.0, 800.0));

    app.dispatch(&ctx, &[AppAction::ToggleMenu]);
    run_frame(&ctx, &mut app, raw_input(400.0, 800.0));
    assert!(app.view_state().is_menu_open());

    app.dispatch(
        &ctx,
        &[AppAction::SelectTab {
            tab: NavTab::Contact,
            origin: NavOrigin::Drawer,
        }],
    );
    let report = run_frame(&ctx, &mut app, raw_input(400.0, 800.0));
    assert_eq!(app.view_state().active_tab(), NavTab::Contact);
    assert!(!app.view_state().is_menu_open());
    // Highlight never hides content
    assert_eq!(report.rendered_cards.len(), 8);
}

#[test]
fn test_jump_is_consumed_by_next_frame() {
    let (ctx, mut app) = headless_app();
    app.dispatch(&ctx, &[AppAction::JumpTo(Section::Products)]);
    assert_eq!(app.pending_scroll(), Some(Section::Products));

    run_frame(&ctx, &mut app, raw_input(1280.0, 800.0));
    assert_eq!(app.pending_scroll(), None);
}
