use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use observer_game::{AudioClip, AudioOutput, Display, EventError, EventHandler, GameEvent, Panel, TextField};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Records every call the UI makes, in order
#[derive(Clone)]
pub struct MockDisplay {
    panel_changes: Arc<RwLock<Vec<(Panel, bool)>>>,
    texts: Arc<RwLock<HashMap<TextField, String>>>,
}

#[allow(dead_code)]
impl MockDisplay {
    pub fn new() -> Self {
        Self {
            panel_changes: Arc::new(RwLock::new(Vec::new())),
            texts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn panel_changes(&self) -> Vec<(Panel, bool)> {
        self.panel_changes.read().await.clone()
    }

    pub async fn changes_for(&self, panel: Panel) -> Vec<bool> {
        self.panel_changes
            .read()
            .await
            .iter()
            .filter(|(p, _)| *p == panel)
            .map(|(_, visible)| *visible)
            .collect()
    }

    pub async fn is_visible(&self, panel: Panel) -> bool {
        self.changes_for(panel).await.last().copied().unwrap_or(false)
    }

    pub async fn text(&self, field: TextField) -> Option<String> {
        self.texts.read().await.get(&field).cloned()
    }
}

#[async_trait]
impl Display for MockDisplay {
    async fn set_panel_visible(&self, panel: Panel, visible: bool) {
        self.panel_changes.write().await.push((panel, visible));
    }

    async fn set_text(&self, field: TextField, text: String) {
        self.texts.write().await.insert(field, text);
    }
}

#[derive(Clone)]
pub struct MockAudioOutput {
    played: Arc<RwLock<Vec<String>>>,
}

#[allow(dead_code)]
impl MockAudioOutput {
    pub fn new() -> Self {
        Self {
            played: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn played(&self) -> Vec<String> {
        self.played.read().await.clone()
    }
}

#[async_trait]
impl AudioOutput for MockAudioOutput {
    async fn play_one_shot(&self, clip: &AudioClip) {
        self.played.write().await.push(clip.name.clone());
    }
}

/// Handler that keeps every event it receives
#[derive(Default)]
pub struct EventRecorder {
    events: RwLock<Vec<GameEvent>>,
}

#[allow(dead_code)]
impl EventRecorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn events(&self) -> Vec<GameEvent> {
        self.events.read().await.clone()
    }

    pub async fn take(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.write().await)
    }
}

#[async_trait]
impl EventHandler for EventRecorder {
    async fn handle(&self, event: &GameEvent) -> Result<(), EventError> {
        self.events.write().await.push(event.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "EventRecorder"
    }
}
