// Library crate for the observer game
// This file exposes the public API for the binary and integration tests

pub mod audio;
pub mod config;
pub mod console;
pub mod event;
pub mod game;
pub mod listener;
pub mod shared;
pub mod ui;

// Re-export commonly used types for easier access in tests
pub use audio::{AudioClip, AudioEventSubscriber, AudioOutput, LoggingAudioOutput, SoundLibrary};
pub use config::{ConfigError, GameConfig};
pub use event::{EventBus, EventError, EventHandler, GameEvent, Subscription, Topic};
pub use game::{GamePhase, GameState};
pub use shared::{AppError, AppState};
pub use ui::{Display, InMemoryDisplay, Panel, TextField, UiEventSubscriber};
