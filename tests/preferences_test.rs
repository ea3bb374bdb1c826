//! Language and theme preferences as seen from the running app.

mod common;

use std::time::Duration;

use agrodash::app::{AppMessage, Route, StartOptions};
use agrodash::i18n::{translate, Language};
use agrodash::state::{ThemeMode, THEME_RECHECK_INTERVAL};
use agrodash::traits::KeyValueStore;
use common::{advance, press, TestFarm};
use crossterm::event::KeyCode;

#[test]
fn test_translate_falls_back_to_key() {
    assert_eq!(translate(Language::Hi, "dashboard"), "डैशबोर्ड");
    assert_eq!(translate(Language::Mr, "no-such-key"), "no-such-key");
}

#[tokio::test]
async fn test_language_change_persists_across_restart() {
    let farm = TestFarm::registered();
    let mut app = farm.app(StartOptions {
        route: Route::Settings,
        offline: false,
    });
    assert_eq!(app.current_language(), Language::En);

    // Language is the first settings row
    press(&mut app, KeyCode::Right);
    assert_eq!(app.current_language(), Language::Hi);
    assert_eq!(app.t("dashboard"), "डैशबोर्ड");
    assert_eq!(farm.store.get("language").as_deref(), Some("hi"));

    let restarted = farm.app(StartOptions::default());
    assert_eq!(restarted.current_language(), Language::Hi);
}

#[tokio::test]
async fn test_language_cycles_backwards() {
    let farm = TestFarm::registered();
    let mut app = farm.app(StartOptions {
        route: Route::Settings,
        offline: false,
    });

    press(&mut app, KeyCode::Left);
    assert_eq!(app.current_language(), Language::Mr);
}

#[tokio::test]
async fn test_stored_unknown_language_falls_back_to_english() {
    let farm = TestFarm::registered();
    farm.store_value("language", "fr");
    let app = farm.app(StartOptions::default());
    assert_eq!(app.current_language(), Language::En);
}

#[tokio::test]
async fn test_auto_theme_follows_hour() {
    let farm = TestFarm::registered();
    farm.store_value("theme", "auto");

    farm.clock.set_hour(10);
    assert!(!farm.app(StartOptions::default()).appearance.is_dark());

    farm.clock.set_hour(19);
    assert!(farm.app(StartOptions::default()).appearance.is_dark());
}

#[tokio::test]
async fn test_theme_recheck_flips_after_clock_moves() {
    let farm = TestFarm::registered();
    farm.store_value("theme", "auto");
    farm.clock.set_hour(17);
    let mut app = farm.app(StartOptions::default());
    assert!(!app.appearance.is_dark());

    farm.clock.set_hour(18);
    app.needs_redraw = false;
    app.handle_message(AppMessage::ThemeRecheck);
    assert!(app.appearance.is_dark());
    assert!(app.needs_redraw);
}

#[tokio::test(start_paused = true)]
async fn test_periodic_recheck_runs_without_input() {
    let farm = TestFarm::registered();
    farm.store_value("theme", "auto");
    farm.clock.set_hour(5);
    let mut app = farm.app(StartOptions::default());
    assert!(app.appearance.is_dark());

    farm.clock.set_hour(6);
    advance(&mut app, THEME_RECHECK_INTERVAL + Duration::from_millis(10)).await;
    assert!(!app.appearance.is_dark());
}

#[tokio::test]
async fn test_fixed_theme_ignores_clock() {
    let farm = TestFarm::registered();
    farm.clock.set_hour(23);
    let mut app = farm.app(StartOptions::default());
    assert_eq!(app.appearance.mode(), ThemeMode::Light);
    assert!(!app.appearance.is_dark());

    app.set_theme(ThemeMode::Dark);
    farm.clock.set_hour(9);
    app.handle_message(AppMessage::ThemeRecheck);
    assert!(app.appearance.is_dark());
    assert_eq!(farm.store.get("theme").as_deref(), Some("dark"));
}
