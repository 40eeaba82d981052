//! Fixed-cadence poll timer
//!
//! Emits [`Message::PollTick`] on the controller's channel at a fixed
//! interval. The timer itself is the only cancellable piece of the polling
//! machinery: stopping it aborts the tick task but leaves any in-flight fetch
//! untouched, so a late response is still applied after suspension.

use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;

use crate::ui::Message;

/// Cancellable handle around the recurring tick task
#[derive(Debug)]
pub struct PollTimer {
    cadence: Duration,
    tx: mpsc::UnboundedSender<Message>,
    handle: Option<JoinHandle<()>>,
}

impl PollTimer {
    /// Create a stopped timer
    pub fn new(cadence: Duration, tx: mpsc::UnboundedSender<Message>) -> Self {
        Self {
            cadence,
            tx,
            handle: None,
        }
    }

    /// Start ticking. With `immediate`, one tick fires right away; scheduled
    /// ticks then follow one cadence apart. Starting an already-running timer
    /// only performs the immediate tick.
    pub fn start(&mut self, immediate: bool) {
        if immediate {
            let _ = self.tx.send(Message::PollTick);
        }
        if self.handle.is_some() {
            return;
        }

        let tx = self.tx.clone();
        let cadence = self.cadence;
        self.handle = Some(tokio::spawn(async move {
            let mut timer = interval(cadence);
            // The first interval tick completes immediately; consume it so
            // scheduled ticks land a full cadence after start.
            timer.tick().await;
            loop {
                timer.tick().await;
                if tx.send(Message::PollTick).is_err() {
                    break;
                }
            }
        }));
        debug!("poll timer started ({}ms cadence)", self.cadence.as_millis());
    }

    /// Abort the tick task, if running. In-flight polls are not cancelled.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("poll timer stopped");
        }
    }

    /// Whether the recurring task is currently scheduled
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for PollTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
