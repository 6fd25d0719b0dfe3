use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::library::AudioClip;

/// The single channel clips are played on
#[async_trait]
pub trait AudioOutput: Send + Sync {
    /// Fire-and-forget playback of one clip
    async fn play_one_shot(&self, clip: &AudioClip);
}

/// Output for hosts without a sound device: every play goes to the log
#[derive(Clone)]
pub struct LoggingAudioOutput {
    played: Arc<RwLock<Vec<String>>>,
}

impl LoggingAudioOutput {
    pub fn new() -> Self {
        Self {
            played: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Names of the clips played so far, oldest first
    pub async fn played(&self) -> Vec<String> {
        self.played.read().await.clone()
    }
}

impl Default for LoggingAudioOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioOutput for LoggingAudioOutput {
    async fn play_one_shot(&self, clip: &AudioClip) {
        info!(clip = %clip.name, path = ?clip.path, "Playing sound");
        self.played.write().await.push(clip.name.clone());
    }
}
