// Event-driven architecture components
//
// This module provides the hub that connects the game state to its
// listeners without either knowing about the other.

// Public API - what other modules can use
pub use bus::{EventBus, Subscription};
pub use events::{GameEvent, Topic};
pub use handler::{EventError, EventHandler, NoOpEventHandler};

// Internal modules
mod bus;
mod events;
mod handler;
