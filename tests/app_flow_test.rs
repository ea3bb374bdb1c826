//! End-to-end flows driven by key presses and paused tokio time.

mod common;

use std::time::Duration;

use agrodash::app::{Route, ScreenState, StartOptions};
use agrodash::i18n::Language;
use agrodash::models::SyncStatus;
use agrodash::traits::KeyValueStore;
use agrodash::view_state::ScanPhase;
use common::{advance, press, type_text, TestFarm};
use crossterm::event::KeyCode;

fn pump_on(app: &agrodash::app::App) -> bool {
    match &app.screen {
        ScreenState::Dashboard(view) => view.readings.pump_on,
        _ => panic!("expected the dashboard"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_first_run_registration_reaches_dashboard() {
    let farm = TestFarm::new();
    let mut app = farm.app(StartOptions::default());
    assert!(!app.is_registered());

    // Global keys are inert during registration
    press(&mut app, KeyCode::Char('5'));
    assert!(app.registration.is_some());
    assert_eq!(
        app.registration.as_ref().unwrap().mobile.content(),
        "5",
        "digits go to the mobile field"
    );
    press(&mut app, KeyCode::Backspace);

    // Step one needs a mobile number
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.status.as_deref(), Some("Enter your mobile number"));

    type_text(&mut app, "9876543210");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_language(), Language::Hi);

    type_text(&mut app, "Asha");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Wadi");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "2.5");

    // Incomplete: no crop, source or consent yet
    press(&mut app, KeyCode::Enter);
    assert!(farm.store.get("farmerProfile").is_none());

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);

    let profile = farm.store.get("farmerProfile").expect("profile stored");
    assert!(profile.contains("Asha"));
    assert!(profile.contains("9876543210"));
    assert!(app.registration.is_some(), "success message shows first");

    advance(&mut app, Duration::from_millis(1900)).await;
    assert!(!app.is_registered());
    advance(&mut app, Duration::from_millis(200)).await;
    assert!(app.is_registered());
    assert_eq!(app.route(), Route::Dashboard);
    assert_eq!(farm.store.get("farmerRegistered").as_deref(), Some("true"));
}

#[tokio::test]
async fn test_digits_and_tab_navigate() {
    let farm = TestFarm::registered();
    let mut app = farm.app(StartOptions::default());

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.route(), Route::Soil);
    press(&mut app, KeyCode::Char('9'));
    assert_eq!(app.route(), Route::Settings);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.route(), Route::Dashboard);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.route(), Route::Settings);
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.route(), Route::Sync);
}

#[tokio::test]
async fn test_dashboard_card_enter_follows_link() {
    let farm = TestFarm::registered();
    let mut app = farm.app(StartOptions::default());

    // The first card is soil moisture
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route(), Route::Soil);
}

#[tokio::test]
async fn test_offline_irrigation_is_queued() {
    let farm = TestFarm::registered();
    let mut app = farm.app(StartOptions {
        route: Route::Dashboard,
        offline: true,
    });

    press(&mut app, KeyCode::Char('s'));
    assert!(pump_on(&app));
    assert_eq!(app.status.as_deref(), Some("Queued for sync"));

    let queue = app.connectivity.queue();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].kind, "irrigation");
    assert_eq!(queue[0].action, "start");
    assert_eq!(queue[0].status, SyncStatus::Pending);
    assert!(farm.store.get("offlineQueue").unwrap().contains("irrigation"));
}

#[tokio::test]
async fn test_online_irrigation_is_not_queued() {
    let farm = TestFarm::registered();
    let mut app = farm.app(StartOptions::default());

    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char('x'));
    assert!(!pump_on(&app));
    assert!(app.connectivity.queue().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_scan_completes_after_analysis_delay() {
    let farm = TestFarm::registered();
    let mut app = farm.app(StartOptions {
        route: Route::Scan,
        offline: true,
    });

    press(&mut app, KeyCode::Enter);
    let ScreenState::Scan(view) = &app.screen else {
        panic!("expected the scan screen");
    };
    assert!(view.is_scanning());

    advance(&mut app, Duration::from_millis(2400)).await;
    let ScreenState::Scan(view) = &app.screen else {
        panic!("expected the scan screen");
    };
    assert!(view.is_scanning());

    advance(&mut app, Duration::from_millis(200)).await;
    let ScreenState::Scan(view) = &app.screen else {
        panic!("expected the scan screen");
    };
    // A draw of 0.5 picks the middle outcome
    assert_eq!(view.result().unwrap().diagnosis, "Nitrogen Deficiency");

    press(&mut app, KeyCode::Char('w'));
    let queue = app.connectivity.queue();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].action, "save-scan");
    assert!(queue[0].data.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_leaving_scan_drops_its_completion() {
    let farm = TestFarm::registered();
    let mut app = farm.app(StartOptions {
        route: Route::Scan,
        offline: false,
    });

    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('6'));
    advance(&mut app, Duration::from_secs(3)).await;

    let ScreenState::Scan(view) = &app.screen else {
        panic!("expected the scan screen");
    };
    assert!(matches!(view.phase, ScanPhase::Idle));
}

#[tokio::test]
async fn test_upload_rejects_missing_file() {
    let farm = TestFarm::registered();
    let mut app = farm.app(StartOptions {
        route: Route::Scan,
        offline: false,
    });

    press(&mut app, KeyCode::Char('u'));
    assert!(app.has_open_dialog());
    type_text(&mut app, "/definitely/not/here.jpg");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.status.as_deref(), Some("No image at that path"));
    assert!(app.has_open_dialog());

    press(&mut app, KeyCode::Esc);
    assert!(!app.has_open_dialog());
}

#[tokio::test(start_paused = true)]
async fn test_upload_existing_file_starts_scan() {
    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("leaf.jpg");
    std::fs::write(&image, b"not really a jpeg").unwrap();

    let farm = TestFarm::registered();
    let mut app = farm.app(StartOptions {
        route: Route::Scan,
        offline: false,
    });

    press(&mut app, KeyCode::Char('u'));
    type_text(&mut app, image.to_str().unwrap());
    press(&mut app, KeyCode::Enter);

    let ScreenState::Scan(view) = &app.screen else {
        panic!("expected the scan screen");
    };
    assert!(view.is_scanning());
    assert_eq!(view.uploaded.as_deref(), Some(image.as_path()));
}

#[tokio::test(start_paused = true)]
async fn test_voice_command_speaks_and_starts_pump() {
    let farm = TestFarm::registered();
    // First draw picks "start irrigation"
    farm.random.push(0.0);
    let mut app = farm.app(StartOptions::default());

    press(&mut app, KeyCode::Char('v'));
    assert!(app.voice.is_open());

    advance(&mut app, Duration::from_millis(1600)).await;
    assert_eq!(farm.speech.last_text().as_deref(), Some("Starting irrigation now"));
    assert!(!pump_on(&app));

    advance(&mut app, Duration::from_secs(1)).await;
    assert!(pump_on(&app));
    assert!(app.voice.is_open());

    advance(&mut app, Duration::from_millis(2100)).await;
    assert!(!app.voice.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_voice_session_does_nothing() {
    let farm = TestFarm::registered();
    farm.random.push(0.0);
    let mut app = farm.app(StartOptions::default());

    press(&mut app, KeyCode::Char('v'));
    press(&mut app, KeyCode::Esc);
    advance(&mut app, Duration::from_secs(5)).await;

    assert!(farm.speech.spoken().is_empty());
    assert!(!pump_on(&app));
}

#[tokio::test(start_paused = true)]
async fn test_voice_navigation_command() {
    let farm = TestFarm::registered();
    // floor(0.25 * 5) = 1: "show soil condition"
    farm.random.push(0.25);
    let mut app = farm.app(StartOptions {
        route: Route::Profile,
        offline: false,
    });

    press(&mut app, KeyCode::Char('v'));
    advance(&mut app, Duration::from_millis(1600)).await;
    assert_eq!(app.route(), Route::Profile, "heard, not acted yet");
    advance(&mut app, Duration::from_millis(1100)).await;
    assert_eq!(app.route(), Route::Soil);
}

fn dashboard_moisture(app: &agrodash::app::App) -> f64 {
    match &app.screen {
        ScreenState::Dashboard(view) => view.readings.soil_moisture,
        _ => panic!("expected the dashboard"),
    }
}

fn soil_moisture(app: &agrodash::app::App) -> f64 {
    match &app.screen {
        ScreenState::Soil(view) => view.sim.current.moisture,
        _ => panic!("expected the soil monitor"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_telemetry_pauses_offline_and_follows_navigation() {
    let farm = TestFarm::registered();
    // Every draw pushes the walks upward
    farm.random.set_fallback(1.0);
    let mut app = farm.app(StartOptions::default());
    assert_eq!(dashboard_moisture(&app), 65.0);

    advance(&mut app, Duration::from_millis(4900)).await;
    assert_eq!(dashboard_moisture(&app), 65.0);
    advance(&mut app, Duration::from_millis(200)).await;
    assert_eq!(dashboard_moisture(&app), 67.5);

    press(&mut app, KeyCode::Char('o'));
    advance(&mut app, Duration::from_secs(20)).await;
    assert_eq!(dashboard_moisture(&app), 67.5, "walk is suspended offline");

    press(&mut app, KeyCode::Char('o'));
    advance(&mut app, Duration::from_millis(5100)).await;
    assert_eq!(dashboard_moisture(&app), 70.0);

    press(&mut app, KeyCode::Char('2'));
    let before = soil_moisture(&app);
    advance(&mut app, Duration::from_millis(4900)).await;
    assert_eq!(soil_moisture(&app), before, "new visit restarts the interval");
    advance(&mut app, Duration::from_millis(200)).await;
    assert!(soil_moisture(&app) > before);
}

#[tokio::test(start_paused = true)]
async fn test_status_message_expires() {
    let farm = TestFarm::registered();
    let mut app = farm.app(StartOptions::default());

    press(&mut app, KeyCode::Char('o'));
    assert!(app.status.is_some());
    advance(&mut app, Duration::from_millis(2900)).await;
    assert!(app.status.is_some());
    advance(&mut app, Duration::from_millis(200)).await;
    assert!(app.status.is_none());
}

#[tokio::test]
async fn test_open_dialog_captures_global_keys() {
    let farm = TestFarm::registered();
    let mut app = farm.app(StartOptions {
        route: Route::Profile,
        offline: false,
    });

    press(&mut app, KeyCode::Char('f'));
    assert!(app.has_open_dialog());
    type_text(&mut app, "q1o");
    assert!(!app.should_quit);
    assert_eq!(app.route(), Route::Profile);
    assert!(!app.connectivity.is_offline());
}

#[tokio::test]
async fn test_quit_key() {
    let farm = TestFarm::registered();
    let mut app = farm.app(StartOptions::default());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
