use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

use super::{
    display::{Display, Panel, TextField},
    panels::Panels,
    popup::PopupTimers,
};
use crate::{
    event::{EventBus, EventError, EventHandler, GameEvent, Topic},
    listener::ListenerSubscriptions,
};

const UI_TOPICS: &[Topic] = &[
    Topic::GameStarted,
    Topic::Scored,
    Topic::ColliderHit,
    Topic::GameEnded,
    Topic::HomeTriggered,
    Topic::GameReset,
];

/// Keeps the screen in step with the game
///
/// Handles game events by:
/// 1. Rewriting the score and lives text fields
/// 2. Switching between the home, in-game and end panels
/// 3. Flashing the score / life-lost popups, which close on their own
pub struct UiEventSubscriber {
    display: Arc<dyn Display>,
    panels: Panels,
    popups: PopupTimers,
    subscriptions: ListenerSubscriptions,
}

impl UiEventSubscriber {
    pub fn new(display: Arc<dyn Display>, popup_close_delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            panels: Panels::new(display.clone()),
            display,
            popups: PopupTimers::new(popup_close_delay),
            subscriptions: ListenerSubscriptions::new(UI_TOPICS),
        })
    }

    pub async fn activate(self: &Arc<Self>, bus: &EventBus) {
        self.subscriptions.activate(bus, self.clone()).await;
    }

    /// Detach from the bus and drop any pending popup closes
    pub async fn deactivate(&self, bus: &EventBus) {
        self.subscriptions.deactivate(bus).await;
        self.popups.cancel_all().await;
    }

    pub async fn is_active(&self) -> bool {
        self.subscriptions.is_active().await
    }

    /// Draw the starting panel layout
    pub async fn present(&self) {
        self.panels.present().await;
    }

    pub async fn is_panel_active(&self, panel: Panel) -> bool {
        self.panels.is_active(panel).await
    }

    /// Show or hide a panel; nothing happens if it is already in that state
    pub async fn set_active(&self, panel: Panel, active: bool) {
        self.panels.set_active(panel, active).await;
    }

    /// Show a panel and (re)start its auto-close timer
    #[instrument(skip(self))]
    pub async fn show_popup(&self, panel: Panel) {
        self.popups.show(panel, self.panels.clone()).await;
    }

    async fn update_score_texts(&self, score: i32) {
        self.display
            .set_text(TextField::ScoreGame, format!("{}", score))
            .await;
        self.display
            .set_text(TextField::ScorePopup, format!("{}", score))
            .await;
        self.display
            .set_text(TextField::ScoreGameEnd, format!("You scored {}", score))
            .await;
    }

    async fn update_lives_texts(&self, lives: i32) {
        self.display
            .set_text(TextField::LivesGame, format!("{}", lives))
            .await;
        self.display
            .set_text(TextField::LivesPopup, format!("Remaining lives: {}", lives))
            .await;
    }
}

#[async_trait]
impl EventHandler for UiEventSubscriber {
    async fn handle(&self, event: &GameEvent) -> Result<(), EventError> {
        debug!(event = ?event, "Updating UI for event");

        match event {
            GameEvent::HomeTriggered => {
                self.set_active(Panel::End, false).await;
                self.set_active(Panel::Home, true).await;
            }
            GameEvent::GameStarted => {
                self.set_active(Panel::Home, false).await;
            }
            GameEvent::Scored { score } => {
                self.update_score_texts(*score).await;
                self.show_popup(Panel::Score).await;
            }
            GameEvent::ColliderHit { lives } => {
                self.update_lives_texts(*lives).await;
                self.show_popup(Panel::LifeLost).await;
            }
            GameEvent::GameEnded => {
                self.set_active(Panel::End, true).await;
            }
            GameEvent::GameReset { score, lives } => {
                self.update_score_texts(*score).await;
                self.update_lives_texts(*lives).await;
            }
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "UiEventSubscriber"
    }
}
