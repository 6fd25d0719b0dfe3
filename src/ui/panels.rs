use std::collections::HashMap;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tokio::sync::RwLock;
use tracing::debug;

use super::display::{Display, Panel};

/// Visibility flags for every panel, pushed to the display on change
#[derive(Clone)]
pub struct Panels {
    display: Arc<dyn Display>,
    visible: Arc<RwLock<HashMap<Panel, bool>>>,
}

impl Panels {
    /// Home starts visible, everything else hidden
    pub fn new(display: Arc<dyn Display>) -> Self {
        let visible: HashMap<Panel, bool> = Panel::iter()
            .map(|panel| (panel, panel == Panel::Home))
            .collect();

        Self {
            display,
            visible: Arc::new(RwLock::new(visible)),
        }
    }

    pub async fn is_active(&self, panel: Panel) -> bool {
        let visible = self.visible.read().await;
        visible.get(&panel).copied().unwrap_or(false)
    }

    /// Show or hide a panel; returns false if it was already in that state
    pub async fn set_active(&self, panel: Panel, active: bool) -> bool {
        let mut visible = self.visible.write().await;
        if visible.get(&panel).copied().unwrap_or(false) == active {
            return false;
        }

        visible.insert(panel, active);
        self.display.set_panel_visible(panel, active).await;
        true
    }

    /// Push every flag to the display, used once when the screen comes up
    pub async fn present(&self) {
        let visible = self.visible.read().await;
        for panel in Panel::iter() {
            let active = visible.get(&panel).copied().unwrap_or(false);
            self.display.set_panel_visible(panel, active).await;
        }
        debug!("Presented initial panel state");
    }
}
