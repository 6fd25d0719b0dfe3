use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Panel {
    Home,
    /// Popup shown briefly after scoring
    Score,
    /// Popup shown briefly after losing a life
    LifeLost,
    End,
}

impl Panel {
    /// Popups close themselves after a delay
    pub fn is_popup(&self) -> bool {
        matches!(self, Panel::Score | Panel::LifeLost)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Panel::Home => "home",
                Panel::Score => "score",
                Panel::LifeLost => "life_lost",
                Panel::End => "end",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum TextField {
    ScoreGame,
    ScorePopup,
    ScoreGameEnd,
    LivesGame,
    LivesPopup,
}

/// Whatever draws panels and text on screen
#[async_trait]
pub trait Display: Send + Sync {
    async fn set_panel_visible(&self, panel: Panel, visible: bool);

    async fn set_text(&self, field: TextField, text: String);
}

#[derive(Debug, Default)]
struct DisplayState {
    panels: HashMap<Panel, bool>,
    texts: HashMap<TextField, String>,
}

/// Display that keeps the screen contents in memory
#[derive(Clone, Default)]
pub struct InMemoryDisplay {
    state: Arc<RwLock<DisplayState>>,
}

impl InMemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_visible(&self, panel: Panel) -> bool {
        let state = self.state.read().await;
        state.panels.get(&panel).copied().unwrap_or(false)
    }

    pub async fn text(&self, field: TextField) -> Option<String> {
        let state = self.state.read().await;
        state.texts.get(&field).cloned()
    }

    /// One-line rendering of visible panels and the in-game counters
    pub async fn summary(&self) -> String {
        let state = self.state.read().await;
        let visible: Vec<String> = Panel::iter()
            .filter(|panel| state.panels.get(panel).copied().unwrap_or(false))
            .map(|panel| panel.to_string())
            .collect();
        let field = |field: TextField| state.texts.get(&field).cloned().unwrap_or_default();

        format!(
            "panels=[{}] score={} lives={}",
            visible.join(","),
            field(TextField::ScoreGame),
            field(TextField::LivesGame)
        )
    }
}

#[async_trait]
impl Display for InMemoryDisplay {
    async fn set_panel_visible(&self, panel: Panel, visible: bool) {
        debug!(panel = %panel, visible = visible, "Panel visibility changed");
        let mut state = self.state.write().await;
        state.panels.insert(panel, visible);
    }

    async fn set_text(&self, field: TextField, text: String) {
        let mut state = self.state.write().await;
        state.texts.insert(field, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_panels() {
        let popups: Vec<Panel> = Panel::iter().filter(Panel::is_popup).collect();
        assert_eq!(popups, vec![Panel::Score, Panel::LifeLost]);
    }

    #[tokio::test]
    async fn test_summary_lists_visible_panels() {
        let display = InMemoryDisplay::new();
        display.set_panel_visible(Panel::Home, true).await;
        display.set_panel_visible(Panel::End, true).await;
        display.set_panel_visible(Panel::End, false).await;
        display.set_text(TextField::ScoreGame, "4".to_string()).await;
        display.set_text(TextField::LivesGame, "2".to_string()).await;

        assert_eq!(display.summary().await, "panels=[home] score=4 lives=2");
        assert!(!display.is_visible(Panel::Score).await);
        assert_eq!(display.text(TextField::ScorePopup).await, None);
    }
}
