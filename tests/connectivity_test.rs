//! Offline queue behavior, through the holder and through the running app.

mod common;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use agrodash::adapters::mock::{InMemoryStore, ManualClock, ScriptedRandom};
use agrodash::app::{Route, StartOptions};
use agrodash::models::{NewQueueItem, SyncStatus};
use agrodash::state::{ConnectivityState, RECONNECT_FLUSH_DELAY};
use agrodash::traits::KeyValueStore;
use common::{advance, press, TestFarm};
use crossterm::event::KeyCode;

fn holder(store: &InMemoryStore, clock: &ManualClock, random: &ScriptedRandom) -> ConnectivityState {
    ConnectivityState::load(
        Arc::new(store.clone()),
        Arc::new(clock.clone()),
        Arc::new(random.clone()),
    )
}

#[test]
fn test_added_items_are_pending_and_ordered() {
    let store = InMemoryStore::new();
    let clock = ManualClock::at_hour(8);
    let random = ScriptedRandom::constant(0.5);
    let mut state = holder(&store, &clock, &random);
    state.set_offline(true);

    for action in ["start", "stop", "auto", "start"] {
        state.add_to_queue(NewQueueItem::new("irrigation", action));
        clock.advance(chrono::Duration::milliseconds(3));
    }

    let queue = state.queue();
    assert_eq!(queue.len(), 4);
    assert!(queue.iter().all(|item| item.status == SyncStatus::Pending));
    assert!(queue.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    let ids: HashSet<&str> = queue.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids.len(), 4);
}

#[test]
fn test_same_millisecond_adds_get_distinct_ids() {
    let store = InMemoryStore::new();
    let clock = ManualClock::at_hour(8);
    let random = ScriptedRandom::constant(0.5);
    let mut state = holder(&store, &clock, &random);
    state.set_offline(true);

    // Clock never moves: every id comes from the same millisecond
    for action in ["start", "stop", "auto", "start", "stop"] {
        state.add_to_queue(NewQueueItem::new("irrigation", action));
    }

    let ids: HashSet<&str> = state.queue().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids.len(), 5);
}

#[test]
fn test_retry_unknown_id_leaves_queue_unchanged() {
    let store = InMemoryStore::new();
    let clock = ManualClock::at_hour(8);
    let random = ScriptedRandom::constant(0.9);
    let mut state = holder(&store, &clock, &random);
    state.set_offline(true);
    state.add_to_queue(NewQueueItem::new("crop", "save-scan"));
    let before = state.queue().to_vec();

    state.retry_sync("no-such-id");
    assert_eq!(state.queue(), before.as_slice());
}

#[test]
fn test_retry_outcome_follows_draw() {
    let store = InMemoryStore::new();
    let clock = ManualClock::at_hour(8);
    let random = ScriptedRandom::sequence([0.1, 0.8]);
    let mut state = holder(&store, &clock, &random);
    state.set_offline(true);
    let id = state.add_to_queue(NewQueueItem::new("schedule", "set"));

    state.retry_sync(&id);
    assert_eq!(state.queue()[0].status, SyncStatus::Failed);
    state.retry_sync(&id);
    assert_eq!(state.queue()[0].status, SyncStatus::Synced);
}

#[test]
fn test_clear_queue_empties_and_persists() {
    let store = InMemoryStore::new();
    let clock = ManualClock::at_hour(8);
    let random = ScriptedRandom::constant(0.5);
    let mut state = holder(&store, &clock, &random);
    state.set_offline(true);
    state.add_to_queue(NewQueueItem::new("irrigation", "start"));
    state.clear_queue();

    assert!(state.queue().is_empty());
    assert_eq!(store.get("offlineQueue").as_deref(), Some("[]"));
}

#[test]
fn test_item_added_during_flush_waits_for_next_round() {
    let store = InMemoryStore::new();
    let clock = ManualClock::at_hour(8);
    let random = ScriptedRandom::constant(0.5);
    let mut state = holder(&store, &clock, &random);
    state.set_offline(true);
    let first = state.add_to_queue(NewQueueItem::new("irrigation", "start"));
    clock.advance(chrono::Duration::milliseconds(5));
    let second = state.add_to_queue(NewQueueItem::new("irrigation", "stop"));

    state.set_offline(false);
    let ticket = state.take_flush_request().unwrap();
    assert_eq!(ticket.ids, vec![first, second]);
    assert_eq!(ticket.delay, RECONNECT_FLUSH_DELAY);

    clock.advance(chrono::Duration::milliseconds(5));
    let late = state.add_to_queue(NewQueueItem::new("schedule", "set"));
    assert!(state.take_flush_request().is_none());

    assert_eq!(state.apply_flush(ticket.generation), 2);
    let late_item = state.queue().iter().find(|item| item.id == late).unwrap();
    assert_eq!(late_item.status, SyncStatus::Pending);

    let follow_up = state.take_flush_request().unwrap();
    assert_eq!(follow_up.ids, vec![late]);
    assert_eq!(state.apply_flush(ticket.generation), 0, "stale generation");
    assert_eq!(state.apply_flush(follow_up.generation), 1);
}

#[tokio::test(start_paused = true)]
async fn test_reconnect_flushes_offline_actions() {
    let farm = TestFarm::registered();
    let mut app = farm.app(StartOptions {
        route: Route::Dashboard,
        offline: true,
    });

    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.connectivity.counts().pending, 2);
    assert_eq!(app.status.as_deref(), Some("Queued for sync"));

    press(&mut app, KeyCode::Char('o'));
    assert!(!app.connectivity.is_offline());
    advance(&mut app, Duration::from_millis(1900)).await;
    assert_eq!(app.connectivity.counts().pending, 2);

    advance(&mut app, Duration::from_millis(200)).await;
    let counts = app.connectivity.counts();
    assert_eq!(counts.synced, 2);
    assert_eq!(counts.pending, 0);
}

#[tokio::test(start_paused = true)]
async fn test_going_offline_cancels_pending_flush() {
    let farm = TestFarm::registered();
    let mut app = farm.app(StartOptions {
        route: Route::Weather,
        offline: true,
    });

    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char('o'));
    advance(&mut app, Duration::from_millis(500)).await;

    press(&mut app, KeyCode::Char('o'));
    advance(&mut app, RECONNECT_FLUSH_DELAY).await;
    assert_eq!(app.connectivity.counts().pending, 1);

    press(&mut app, KeyCode::Char('o'));
    advance(&mut app, RECONNECT_FLUSH_DELAY + Duration::from_millis(100)).await;
    assert_eq!(app.connectivity.counts().synced, 1);
    assert_eq!(app.status.as_deref(), Some("Synced 1 queued action(s)"));
}

#[tokio::test(start_paused = true)]
async fn test_restored_pending_items_flush_on_startup() {
    let farm = TestFarm::registered();
    farm.store_value(
        "offlineQueue",
        r#"[{"id":"1700000000000","type":"irrigation","action":"start","timestamp":1700000000000,"status":"pending"},
            {"id":"1700000000001","type":"crop","action":"save-scan","timestamp":1700000000001,"status":"failed"}]"#,
    );
    let mut app = farm.app(StartOptions::default());
    assert_eq!(app.connectivity.queue().len(), 2);

    advance(&mut app, RECONNECT_FLUSH_DELAY + Duration::from_millis(100)).await;
    let statuses: Vec<SyncStatus> = app.connectivity.queue().iter().map(|i| i.status).collect();
    assert_eq!(statuses, vec![SyncStatus::Synced, SyncStatus::Failed]);
}

#[tokio::test(start_paused = true)]
async fn test_sync_screen_retries_failed_item() {
    let farm = TestFarm::registered();
    farm.store_value(
        "offlineQueue",
        r#"[{"id":"42","type":"schedule","action":"set","timestamp":1,"status":"failed"}]"#,
    );
    let mut app = farm.app(StartOptions {
        route: Route::Sync,
        offline: false,
    });

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.connectivity.queue()[0].status, SyncStatus::Synced);

    press(&mut app, KeyCode::Char('c'));
    assert!(app.connectivity.queue().is_empty());
}
