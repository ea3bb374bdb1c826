//! Connectivity state and the offline action queue.
//!
//! The holder owns the offline flag and the ordered queue of actions taken
//! while disconnected. Every change is written through to the key-value store
//! and announced on a `watch` channel.
//!
//! Coming back online does not sync anything directly. Instead the holder
//! prepares a [`FlushTicket`] naming the pending items at that instant; the
//! app drains it with [`ConnectivityState::take_flush_request`], waits
//! [`RECONNECT_FLUSH_DELAY`], and hands the ticket's generation back to
//! [`ConnectivityState::apply_flush`]. At most one ticket is outstanding.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::models::queue::{NewQueueItem, QueueCounts, QueueItem, SyncStatus};
use crate::traits::{load_json, save_json, Clock, KeyValueStore, RandomSource};

/// Store key of the persisted queue.
pub const OFFLINE_QUEUE_KEY: &str = "offlineQueue";

/// Delay between reconnecting and the bulk sync of pending items.
pub const RECONNECT_FLUSH_DELAY: Duration = Duration::from_secs(2);

/// A manual retry succeeds when the random draw exceeds this.
pub const RETRY_SUCCESS_THRESHOLD: f64 = 0.3;

/// A scheduled reconnect flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlushTicket {
    pub generation: u64,
    pub delay: Duration,
    /// Ids that were pending when the flush was scheduled
    pub ids: Vec<String>,
}

/// Owner of the offline flag and queue.
pub struct ConnectivityState {
    is_offline: bool,
    queue: Vec<QueueItem>,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
    /// Generation counter for flush tickets
    generation: u64,
    /// Generation of the outstanding flush and the ids it covers
    in_flight: Option<(u64, HashSet<String>)>,
    /// Ticket prepared but not yet picked up by the app
    ready: Option<FlushTicket>,
    /// Last issued id millisecond and same-millisecond counter
    last_id: Option<(i64, u32)>,
    last_timestamp: i64,
    revision: watch::Sender<u64>,
}

impl std::fmt::Debug for ConnectivityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectivityState")
            .field("is_offline", &self.is_offline)
            .field("queue", &self.queue)
            .field("generation", &self.generation)
            .field("in_flight", &self.in_flight)
            .finish()
    }
}

impl ConnectivityState {
    /// Create the holder, restoring the queue from the store.
    ///
    /// A missing or malformed stored queue starts empty. The holder starts
    /// online; if the restored queue has pending items a flush is prepared
    /// right away.
    pub fn load(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        let queue: Vec<QueueItem> = load_json(store.as_ref(), OFFLINE_QUEUE_KEY).unwrap_or_default();
        let last_timestamp = queue.iter().map(|item| item.timestamp).max().unwrap_or(i64::MIN);
        if !queue.is_empty() {
            info!(items = queue.len(), "Restored offline queue");
        }

        let (revision, _) = watch::channel(0);
        let mut state = Self {
            is_offline: false,
            queue,
            store,
            clock,
            random,
            generation: 0,
            in_flight: None,
            ready: None,
            last_id: None,
            last_timestamp,
            revision,
        };
        state.schedule_flush_if_needed();
        state
    }

    pub fn is_offline(&self) -> bool {
        self.is_offline
    }

    pub fn queue(&self) -> &[QueueItem] {
        &self.queue
    }

    pub fn counts(&self) -> QueueCounts {
        QueueCounts::from_items(&self.queue)
    }

    /// Receiver that observes a revision number bumped on every change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn toggle_offline(&mut self) {
        let offline = !self.is_offline;
        self.set_offline(offline);
    }

    pub fn set_offline(&mut self, offline: bool) {
        if self.is_offline == offline {
            return;
        }
        self.is_offline = offline;
        info!(offline, "Connectivity changed");

        if offline {
            // Going offline abandons any flush that has not fired yet
            if let Some((generation, _)) = self.in_flight.take() {
                debug!(generation, "Cancelled reconnect flush");
            }
            self.ready = None;
        }
        self.bump();
        self.schedule_flush_if_needed();
    }

    /// Append a pending action and return its id.
    pub fn add_to_queue(&mut self, item: NewQueueItem) -> String {
        let now = self.clock.now_millis();
        let timestamp = now.max(self.last_timestamp);
        self.last_timestamp = timestamp;
        let id = self.next_id(now);

        info!(id = %id, kind = %item.kind, action = %item.action, "Queued offline action");
        self.queue.push(QueueItem {
            id: id.clone(),
            kind: item.kind,
            action: item.action,
            timestamp,
            status: SyncStatus::Pending,
            data: item.data,
        });
        self.persist();
        self.bump();
        self.schedule_flush_if_needed();
        id
    }

    /// Time-based id; a same-millisecond collision gets a `-n` suffix.
    fn next_id(&mut self, now: i64) -> String {
        let counter = match self.last_id {
            Some((ms, n)) if ms == now => n + 1,
            _ => 0,
        };
        self.last_id = Some((now, counter));

        let base = if counter == 0 {
            now.to_string()
        } else {
            format!("{}-{}", now, counter)
        };
        if self.queue.iter().any(|item| item.id == base) {
            // Restored items may already use this millisecond
            let mut n = counter.max(1);
            loop {
                let candidate = format!("{}-{}", now, n);
                if !self.queue.iter().any(|item| item.id == candidate) {
                    self.last_id = Some((now, n));
                    return candidate;
                }
                n += 1;
            }
        }
        base
    }

    /// Re-attempt one item: synced with probability 0.7, else failed.
    /// Unknown ids are ignored.
    pub fn retry_sync(&mut self, id: &str) {
        let Some(item) = self.queue.iter_mut().find(|item| item.id == id) else {
            debug!(id, "Retry for unknown queue item ignored");
            return;
        };
        let draw = self.random.next_f64();
        item.status = if draw > RETRY_SUCCESS_THRESHOLD {
            SyncStatus::Synced
        } else {
            SyncStatus::Failed
        };
        info!(id, status = item.status.label(), "Retried queue item");

        self.persist();
        self.bump();
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.in_flight = None;
        self.ready = None;
        info!("Cleared offline queue");
        self.persist();
        self.bump();
    }

    /// Hand over the prepared flush, if any. Each ticket is returned once.
    pub fn take_flush_request(&mut self) -> Option<FlushTicket> {
        self.ready.take()
    }

    /// Complete the flush with the given generation.
    ///
    /// Items named by the ticket that are still pending become synced; later
    /// additions are left alone. A stale generation (superseded, cancelled by
    /// going offline, or already applied) is ignored. Returns the number of
    /// items synced.
    pub fn apply_flush(&mut self, generation: u64) -> usize {
        let ids = match self.in_flight.take() {
            Some((current, ids)) if current == generation => ids,
            other => {
                self.in_flight = other;
                debug!(generation, "Ignoring stale reconnect flush");
                return 0;
            }
        };

        let mut synced = 0;
        for item in self.queue.iter_mut() {
            if item.status == SyncStatus::Pending && ids.contains(&item.id) {
                item.status = SyncStatus::Synced;
                synced += 1;
            }
        }
        info!(generation, synced, "Reconnect flush applied");

        if synced > 0 {
            self.persist();
        }
        self.bump();
        self.schedule_flush_if_needed();
        synced
    }

    /// Prepare a ticket when online with pending items and no flush in flight.
    fn schedule_flush_if_needed(&mut self) {
        if self.is_offline || self.in_flight.is_some() {
            return;
        }
        let ids: Vec<String> = self
            .queue
            .iter()
            .filter(|item| item.is_pending())
            .map(|item| item.id.clone())
            .collect();
        if ids.is_empty() {
            return;
        }

        self.generation += 1;
        debug!(generation = self.generation, items = ids.len(), "Scheduling reconnect flush");
        self.in_flight = Some((self.generation, ids.iter().cloned().collect()));
        self.ready = Some(FlushTicket {
            generation: self.generation,
            delay: RECONNECT_FLUSH_DELAY,
            ids,
        });
    }

    fn persist(&self) {
        if let Err(e) = save_json(self.store.as_ref(), OFFLINE_QUEUE_KEY, &self.queue) {
            warn!(error = %e, "Failed to persist offline queue");
        }
    }

    fn bump(&self) {
        self.revision.send_modify(|r| *r += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryStore, ManualClock, ScriptedRandom};

    fn holder(store: &InMemoryStore, clock: &ManualClock, random: &ScriptedRandom) -> ConnectivityState {
        ConnectivityState::load(
            Arc::new(store.clone()),
            Arc::new(clock.clone()),
            Arc::new(random.clone()),
        )
    }

    #[test]
    fn test_add_while_offline_does_not_schedule() {
        let store = InMemoryStore::new();
        let clock = ManualClock::at_hour(9);
        let random = ScriptedRandom::constant(0.5);
        let mut state = holder(&store, &clock, &random);

        state.toggle_offline();
        state.add_to_queue(NewQueueItem::new("irrigation", "start"));
        assert_eq!(state.queue().len(), 1);
        assert!(state.take_flush_request().is_none());
    }

    #[test]
    fn test_same_millisecond_ids_are_unique() {
        let store = InMemoryStore::new();
        let clock = ManualClock::at_hour(9);
        let random = ScriptedRandom::constant(0.5);
        let mut state = holder(&store, &clock, &random);
        state.set_offline(true);

        let a = state.add_to_queue(NewQueueItem::new("irrigation", "start"));
        let b = state.add_to_queue(NewQueueItem::new("irrigation", "stop"));
        let c = state.add_to_queue(NewQueueItem::new("irrigation", "auto"));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(b, format!("{}-1", a));
    }

    #[test]
    fn test_reconnect_ticket_covers_pending_items() {
        let store = InMemoryStore::new();
        let clock = ManualClock::at_hour(9);
        let random = ScriptedRandom::constant(0.5);
        let mut state = holder(&store, &clock, &random);
        state.set_offline(true);
        let id = state.add_to_queue(NewQueueItem::new("crop", "save-scan"));

        state.toggle_offline();
        let ticket = state.take_flush_request().unwrap();
        assert_eq!(ticket.ids, vec![id]);
        assert_eq!(ticket.delay, RECONNECT_FLUSH_DELAY);
        assert!(state.take_flush_request().is_none());

        assert_eq!(state.apply_flush(ticket.generation), 1);
        assert_eq!(state.counts().synced, 1);
        // A ticket only applies once
        assert_eq!(state.apply_flush(ticket.generation), 0);
    }

    #[test]
    fn test_going_offline_cancels_flush() {
        let store = InMemoryStore::new();
        let clock = ManualClock::at_hour(9);
        let random = ScriptedRandom::constant(0.5);
        let mut state = holder(&store, &clock, &random);
        state.set_offline(true);
        state.add_to_queue(NewQueueItem::new("irrigation", "start"));

        state.set_offline(false);
        let stale = state.take_flush_request().unwrap();
        state.set_offline(true);
        assert_eq!(state.apply_flush(stale.generation), 0);
        assert_eq!(state.counts().pending, 1);

        state.set_offline(false);
        let fresh = state.take_flush_request().unwrap();
        assert!(fresh.generation > stale.generation);
    }

    #[test]
    fn test_retry_uses_random_draw() {
        let store = InMemoryStore::new();
        let clock = ManualClock::at_hour(9);
        let random = ScriptedRandom::sequence([0.31, 0.3]);
        let mut state = holder(&store, &clock, &random);
        state.set_offline(true);
        let a = state.add_to_queue(NewQueueItem::new("irrigation", "start"));
        let b = state.add_to_queue(NewQueueItem::new("irrigation", "stop"));

        state.retry_sync(&a);
        state.retry_sync(&b);
        assert_eq!(state.queue()[0].status, SyncStatus::Synced);
        assert_eq!(state.queue()[1].status, SyncStatus::Failed);
    }

    #[test]
    fn test_queue_persists_and_restores() {
        let store = InMemoryStore::new();
        let clock = ManualClock::at_hour(9);
        let random = ScriptedRandom::constant(0.5);
        {
            let mut state = holder(&store, &clock, &random);
            state.set_offline(true);
            state.add_to_queue(
                NewQueueItem::new("schedule", "set").with_data(serde_json::json!({"time": "06:00"})),
            );
        }
        let stored = store.get(OFFLINE_QUEUE_KEY).unwrap();
        assert!(stored.contains("\"type\":\"schedule\""));

        let mut restored = holder(&store, &clock, &random);
        assert_eq!(restored.queue().len(), 1);
        // Restored pending work is flushed on startup
        assert!(restored.take_flush_request().is_some());
    }

    #[test]
    fn test_malformed_store_starts_empty() {
        let store = InMemoryStore::new().with_value(OFFLINE_QUEUE_KEY, "{not json");
        let clock = ManualClock::at_hour(9);
        let random = ScriptedRandom::constant(0.5);
        let state = holder(&store, &clock, &random);
        assert!(state.queue().is_empty());
    }

    #[test]
    fn test_subscribe_sees_changes() {
        let store = InMemoryStore::new();
        let clock = ManualClock::at_hour(9);
        let random = ScriptedRandom::constant(0.5);
        let mut state = holder(&store, &clock, &random);
        let mut rx = state.subscribe();
        assert!(!rx.has_changed().unwrap());

        state.clear_queue();
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();
        state.toggle_offline();
        assert!(rx.has_changed().unwrap());
    }

    #[test]
    fn test_write_failure_keeps_state() {
        let store = InMemoryStore::new();
        store.set_fail_writes(true);
        let clock = ManualClock::at_hour(9);
        let random = ScriptedRandom::constant(0.5);
        let mut state = holder(&store, &clock, &random);
        state.set_offline(true);
        state.add_to_queue(NewQueueItem::new("irrigation", "start"));
        assert_eq!(state.queue().len(), 1);
        assert!(store.get(OFFLINE_QUEUE_KEY).is_none());
    }
}
