use futures::FutureExt;
use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::timeout;
use tracing::{debug, error, info};
use uuid::Uuid;

use super::{
    events::{GameEvent, Topic},
    handler::{EventError, EventHandler},
};

/// Token identifying one handler registration on one topic
///
/// Only the token returned by [`EventBus::subscribe`] can remove that
/// registration again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subscription {
    topic: Topic,
    id: Uuid,
}

impl Subscription {
    pub fn topic(&self) -> Topic {
        self.topic
    }
}

#[derive(Clone)]
struct Registration {
    id: Uuid,
    handler: Arc<dyn EventHandler>,
}

/// Event bus for distributing game events to their listeners
///
/// Handlers run one after another in registration order and `publish`
/// returns only once all of them are done. A failing, panicking or
/// hanging handler is logged and skipped; it never stops the rest.
#[derive(Clone)]
pub struct EventBus {
    /// Topic -> handlers in registration order
    channels: Arc<RwLock<HashMap<Topic, Vec<Registration>>>>,
    handler_timeout: Duration,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
            handler_timeout: Duration::from_secs(5),
        }
    }

    /// Set the timeout for individual handler execution
    pub fn with_handler_timeout(mut self, timeout: Duration) -> Self {
        self.handler_timeout = timeout;
        self
    }

    /// Register a handler for a topic
    pub async fn subscribe(&self, topic: Topic, handler: Arc<dyn EventHandler>) -> Subscription {
        let id = Uuid::new_v4();
        info!(
            topic = ?topic,
            handler = handler.name(),
            subscription_id = %id,
            "Registering event handler"
        );

        let mut channels = self.channels.write().await;
        channels
            .entry(topic)
            .or_default()
            .push(Registration { id, handler });

        Subscription { topic, id }
    }

    /// Remove the registration behind `subscription`
    ///
    /// Returns false when it was not registered (already removed, or from
    /// another bus).
    pub async fn unsubscribe(&self, subscription: &Subscription) -> bool {
        let mut channels = self.channels.write().await;
        let Some(registrations) = channels.get_mut(&subscription.topic) else {
            return false;
        };

        let before = registrations.len();
        registrations.retain(|registration| registration.id != subscription.id);
        let removed = registrations.len() != before;

        if registrations.is_empty() {
            channels.remove(&subscription.topic);
        }

        debug!(
            topic = ?subscription.topic,
            subscription_id = %subscription.id,
            removed = removed,
            "Unregistered event handler"
        );
        removed
    }

    /// Number of handlers currently registered for a topic
    pub async fn handler_count(&self, topic: Topic) -> usize {
        let channels = self.channels.read().await;
        channels.get(&topic).map_or(0, Vec::len)
    }

    /// Publish an event to every handler registered for its topic
    pub async fn publish(&self, event: GameEvent) {
        let topic = event.topic();

        // Snapshot so handlers may (un)subscribe or publish while we iterate
        let registrations = {
            let channels = self.channels.read().await;
            channels.get(&topic).cloned().unwrap_or_default()
        };

        if registrations.is_empty() {
            debug!(
                event_type = event.event_type(),
                "Event raised with no handlers"
            );
            return;
        }

        debug!(
            event_type = event.event_type(),
            event = ?event,
            "Dispatching event to {} handlers",
            registrations.len()
        );

        for registration in &registrations {
            // An earlier handler in this publish may have removed this one
            if !self.is_registered(topic, registration.id).await {
                continue;
            }

            if let Err(e) = self.dispatch(registration, &event).await {
                error!(
                    handler = registration.handler.name(),
                    event_type = event.event_type(),
                    error = %e,
                    "Event handler failed"
                );
            }
        }
    }

    async fn is_registered(&self, topic: Topic, id: Uuid) -> bool {
        let channels = self.channels.read().await;
        channels
            .get(&topic)
            .is_some_and(|registrations| registrations.iter().any(|r| r.id == id))
    }

    /// Run one handler, turning panics and timeouts into errors
    async fn dispatch(
        &self,
        registration: &Registration,
        event: &GameEvent,
    ) -> Result<(), EventError> {
        let handling = AssertUnwindSafe(registration.handler.handle(event)).catch_unwind();

        match timeout(self.handler_timeout, handling).await {
            Ok(Ok(result)) => result,
            Ok(Err(panic)) => Err(EventError::Panic(panic_message(&*panic))),
            Err(_elapsed) => Err(EventError::Timeout),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
