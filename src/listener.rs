use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::event::{EventBus, EventHandler, Subscription, Topic};

/// The subscriptions a listener holds while it is active
///
/// Activation stores the exact tokens handed out by the bus so that
/// deactivation removes precisely those registrations and nothing else.
pub struct ListenerSubscriptions {
    topics: &'static [Topic],
    active: Mutex<Vec<Subscription>>,
}

impl ListenerSubscriptions {
    pub fn new(topics: &'static [Topic]) -> Self {
        Self {
            topics,
            active: Mutex::new(Vec::new()),
        }
    }

    /// Subscribe `handler` to every topic; a no-op if already active
    pub async fn activate(&self, bus: &EventBus, handler: Arc<dyn EventHandler>) {
        let mut active = self.active.lock().await;
        if !active.is_empty() {
            debug!(handler = handler.name(), "Listener already active");
            return;
        }

        for topic in self.topics {
            active.push(bus.subscribe(*topic, handler.clone()).await);
        }
    }

    /// Remove every subscription made by `activate`
    pub async fn deactivate(&self, bus: &EventBus) {
        let mut active = self.active.lock().await;
        for subscription in active.drain(..) {
            bus.unsubscribe(&subscription).await;
        }
    }

    pub async fn is_active(&self) -> bool {
        !self.active.lock().await.is_empty()
    }
}
