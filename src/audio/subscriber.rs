use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::{
    library::{
        SoundLibrary, GAME_END_SOUND, GAME_START_SOUND, LIFE_LOST_SOUND, SCORED_SOUND,
        TRANSITION_SOUND,
    },
    output::AudioOutput,
};
use crate::{
    event::{EventBus, EventError, EventHandler, GameEvent, Topic},
    listener::ListenerSubscriptions,
};

const AUDIO_TOPICS: &[Topic] = &[
    Topic::GameStarted,
    Topic::Scored,
    Topic::ColliderHit,
    Topic::GameEnded,
    Topic::HomeTriggered,
];

/// Plays a one-shot clip for each game transition
pub struct AudioEventSubscriber {
    sounds: SoundLibrary,
    output: Arc<dyn AudioOutput>,
    subscriptions: ListenerSubscriptions,
}

impl AudioEventSubscriber {
    pub fn new(sounds: SoundLibrary, output: Arc<dyn AudioOutput>) -> Arc<Self> {
        Arc::new(Self {
            sounds,
            output,
            subscriptions: ListenerSubscriptions::new(AUDIO_TOPICS),
        })
    }

    pub async fn activate(self: &Arc<Self>, bus: &EventBus) {
        self.subscriptions.activate(bus, self.clone()).await;
    }

    pub async fn deactivate(&self, bus: &EventBus) {
        self.subscriptions.deactivate(bus).await;
    }

    pub async fn is_active(&self) -> bool {
        self.subscriptions.is_active().await
    }

    /// Play the named clip, or warn if the library has no such clip
    #[instrument(skip(self))]
    pub async fn play_sound(&self, sound_name: &str) {
        match self.sounds.find(sound_name) {
            Some(clip) => self.output.play_one_shot(clip).await,
            None => warn!("Sound '{}' not found in the list!", sound_name),
        }
    }

    fn sound_for(event: &GameEvent) -> Option<&'static str> {
        match event {
            GameEvent::GameStarted => Some(GAME_START_SOUND),
            GameEvent::Scored { .. } => Some(SCORED_SOUND),
            GameEvent::ColliderHit { .. } => Some(LIFE_LOST_SOUND),
            GameEvent::GameEnded => Some(GAME_END_SOUND),
            GameEvent::HomeTriggered => Some(TRANSITION_SOUND),
            GameEvent::GameReset { .. } => None,
        }
    }
}

#[async_trait]
impl EventHandler for AudioEventSubscriber {
    async fn handle(&self, event: &GameEvent) -> Result<(), EventError> {
        match Self::sound_for(event) {
            Some(sound_name) => self.play_sound(sound_name).await,
            None => debug!(event_type = event.event_type(), "No sound for event"),
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "AudioEventSubscriber"
    }
}
