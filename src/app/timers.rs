//! Delayed and periodic messages.
//!
//! Timers are plain tokio tasks that sleep and then post an [`AppMessage`].
//! Outside a runtime (plain unit tests) nothing is spawned.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::AppMessage;

/// Post `message` once after `delay`.
pub(crate) fn spawn_after(
    tx: &mpsc::UnboundedSender<AppMessage>,
    delay: Duration,
    message: AppMessage,
) -> Option<JoinHandle<()>> {
    let handle = tokio::runtime::Handle::try_current().ok()?;
    let tx = tx.clone();
    Some(handle.spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(message);
    }))
}

/// Post a message every `period`, starting one period from now. The task
/// ends when the receiver is gone.
pub(crate) fn spawn_every(
    tx: &mpsc::UnboundedSender<AppMessage>,
    period: Duration,
    message: AppMessage,
) -> Option<JoinHandle<()>> {
    let handle = tokio::runtime::Handle::try_current().ok()?;
    let tx = tx.clone();
    Some(handle.spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if tx.send(message.clone()).is_err() {
                break;
            }
        }
    }))
}
