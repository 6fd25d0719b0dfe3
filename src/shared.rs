use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::audio::{AudioEventSubscriber, AudioOutput};
use crate::config::{ConfigError, GameConfig};
use crate::event::EventBus;
use crate::game::GameState;
use crate::ui::{Display, UiEventSubscriber};

/// Shared application state containing all dependencies
pub struct AppState {
    pub event_bus: EventBus,
    pub game: GameState,
    pub audio: Arc<AudioEventSubscriber>,
    pub ui: Arc<UiEventSubscriber>,
}

impl AppState {
    /// Wire the game to its listeners and bring both listeners up
    pub async fn new(
        config: GameConfig,
        audio_output: Arc<dyn AudioOutput>,
        display: Arc<dyn Display>,
    ) -> Self {
        let event_bus = EventBus::new();
        let game = GameState::new(&config, event_bus.clone());
        let audio = AudioEventSubscriber::new(config.sounds, audio_output);
        let ui = UiEventSubscriber::new(display, config.popup_close_delay);

        audio.activate(&event_bus).await;
        ui.activate(&event_bus).await;
        ui.present().await;

        info!("Game listeners active");

        Self {
            event_bus,
            game,
            audio,
            ui,
        }
    }

    /// Detach every listener from the bus
    pub async fn shutdown(&self) {
        self.audio.deactivate(&self.event_bus).await;
        self.ui.deactivate(&self.event_bus).await;
        info!("Game listeners detached");
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LoggingAudioOutput;
    use crate::event::Topic;
    use crate::ui::{InMemoryDisplay, Panel};
    use strum::IntoEnumIterator;

    #[tokio::test]
    async fn test_new_activates_listeners() {
        let display = InMemoryDisplay::new();
        let state = AppState::new(
            GameConfig::default(),
            Arc::new(LoggingAudioOutput::new()),
            Arc::new(display.clone()),
        )
        .await;

        assert!(state.audio.is_active().await);
        assert!(state.ui.is_active().await);
        assert!(display.is_visible(Panel::Home).await);
        assert_eq!(state.event_bus.handler_count(Topic::Scored).await, 2);
        assert_eq!(state.event_bus.handler_count(Topic::GameReset).await, 1);
    }

    #[tokio::test]
    async fn test_shutdown_detaches_everything() {
        let state = AppState::new(
            GameConfig::default(),
            Arc::new(LoggingAudioOutput::new()),
            Arc::new(InMemoryDisplay::new()),
        )
        .await;

        state.shutdown().await;

        for topic in Topic::iter() {
            assert_eq!(state.event_bus.handler_count(topic).await, 0);
        }
    }
}
