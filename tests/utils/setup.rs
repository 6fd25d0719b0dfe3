use std::sync::Arc;
use std::time::Duration;
use strum::IntoEnumIterator;

use observer_game::{
    AudioEventSubscriber, EventBus, GameConfig, GameState, SoundLibrary, Topic,
    UiEventSubscriber,
};

use super::mocks::{EventRecorder, MockAudioOutput, MockDisplay};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub event_bus: EventBus,
    pub game: GameState,
    pub audio: Arc<AudioEventSubscriber>,
    pub ui: Arc<UiEventSubscriber>,
    pub display: MockDisplay,
    pub audio_output: MockAudioOutput,
    pub recorder: Arc<EventRecorder>,
}

pub struct TestSetupBuilder {
    config: GameConfig,
}

#[allow(dead_code)]
impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }

    pub fn with_starting_score(mut self, score: i32) -> Self {
        self.config.starting_score = score;
        self
    }

    pub fn with_starting_lives(mut self, lives: i32) -> Self {
        self.config.starting_lives = lives;
        self
    }

    pub fn with_popup_delay(mut self, delay: Duration) -> Self {
        self.config.popup_close_delay = delay;
        self
    }

    pub fn with_sounds(mut self, sounds: SoundLibrary) -> Self {
        self.config.sounds = sounds;
        self
    }

    /// Recorder is subscribed first so it sees events before the listeners
    pub async fn build(self) -> TestSetup {
        let event_bus = EventBus::new();
        let display = MockDisplay::new();
        let audio_output = MockAudioOutput::new();
        let recorder = EventRecorder::new();

        for topic in Topic::iter() {
            event_bus.subscribe(topic, recorder.clone()).await;
        }

        let game = GameState::new(&self.config, event_bus.clone());
        let audio = AudioEventSubscriber::new(self.config.sounds, Arc::new(audio_output.clone()));
        let ui = UiEventSubscriber::new(Arc::new(display.clone()), self.config.popup_close_delay);

        audio.activate(&event_bus).await;
        ui.activate(&event_bus).await;

        TestSetup {
            event_bus,
            game,
            audio,
            ui,
            display,
            audio_output,
            recorder,
        }
    }
}
