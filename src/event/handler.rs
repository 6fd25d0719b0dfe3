use async_trait::async_trait;
use thiserror::Error;

use super::events::GameEvent;

/// Errors that can occur when handling events
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Handler timed out")]
    Timeout,

    #[error("Handler failed: {0}")]
    Failed(String),

    #[error("Handler panicked: {0}")]
    Panic(String),
}

impl EventError {
    /// Create a failure error
    pub fn failed(msg: impl Into<String>) -> Self {
        EventError::Failed(msg.into())
    }
}

/// Trait for components that react to game events
///
/// Handlers are the passive side of the bus. The bus awaits each one in
/// turn, so a handler should finish its side effect quickly and push
/// anything long-running (such as a delayed panel close) onto its own task.
///
/// Examples:
/// - AudioEventSubscriber: plays a clip for the event
/// - UiEventSubscriber: updates panels and text fields
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Handle a game event
    ///
    /// Return Ok(()) on success or EventError on failure. Failures are
    /// logged by the bus and never reach the publisher.
    async fn handle(&self, event: &GameEvent) -> Result<(), EventError>;

    /// Get a human-readable name for this handler (for logging/debugging)
    fn name(&self) -> &'static str;
}

/// A no-op event handler for testing
pub struct NoOpEventHandler;

#[async_trait]
impl EventHandler for NoOpEventHandler {
    async fn handle(&self, _event: &GameEvent) -> Result<(), EventError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "NoOpEventHandler"
    }
}
