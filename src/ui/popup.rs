use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use super::{display::Panel, panels::Panels};

struct PendingClose {
    generation: u64,
    handle: JoinHandle<()>,
}

#[derive(Default)]
struct PendingState {
    next_generation: u64,
    by_panel: HashMap<Panel, PendingClose>,
}

/// Auto-close timers for popup panels, at most one pending per panel
///
/// Showing a panel that already has a close pending cancels the old
/// timer, so the panel closes one delay after the last show.
#[derive(Clone)]
pub struct PopupTimers {
    delay: Duration,
    pending: Arc<Mutex<PendingState>>,
}

impl PopupTimers {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Arc::new(Mutex::new(PendingState::default())),
        }
    }

    /// Show `panel` and hide it after the delay, replacing any pending close for it
    #[instrument(skip(self, panels))]
    pub async fn show(&self, panel: Panel, panels: Panels) {
        // Show under the lock so a timer that already woke cannot close it afterwards
        let mut state = self.pending.lock().await;
        panels.set_active(panel, true).await;

        if let Some(previous) = state.by_panel.remove(&panel) {
            previous.handle.abort();
            debug!(panel = %panel, "Cancelled pending popup close");
        }

        let generation = state.next_generation;
        state.next_generation += 1;

        let pending = self.pending.clone();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            // Hold the lock across the close so a concurrent show cannot slip in between
            let mut state = pending.lock().await;
            match state.by_panel.get(&panel) {
                Some(current) if current.generation == generation => {
                    state.by_panel.remove(&panel);
                }
                _ => return,
            }

            debug!(panel = %panel, "Closing popup panel");
            panels.set_active(panel, false).await;
        });

        state
            .by_panel
            .insert(panel, PendingClose { generation, handle });
    }

    /// Cancel one panel's pending close; returns whether one was pending
    pub async fn cancel(&self, panel: Panel) -> bool {
        let mut state = self.pending.lock().await;
        match state.by_panel.remove(&panel) {
            Some(previous) => {
                previous.handle.abort();
                true
            }
            None => false,
        }
    }

    pub async fn cancel_all(&self) {
        let mut state = self.pending.lock().await;
        for (_, previous) in state.by_panel.drain() {
            previous.handle.abort();
        }
    }

    pub async fn is_pending(&self, panel: Panel) -> bool {
        let state = self.pending.lock().await;
        state.by_panel.contains_key(&panel)
    }
}
