use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument};

use crate::config::GameConfig;
use crate::event::{EventBus, GameEvent};

/// Where the player is in the home → playing → ended loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Home,
    Playing,
    Ended,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                GamePhase::Home => "home",
                GamePhase::Playing => "playing",
                GamePhase::Ended => "ended",
            }
        )
    }
}

/// Owns the score and lives counters and announces every change on the bus
///
/// Listeners never read this directly; everything they know comes from
/// event payloads.
pub struct GameState {
    starting_score: i32,
    starting_lives: i32,
    score: i32,
    lives: i32,
    phase: GamePhase,
    event_bus: EventBus,
}

impl GameState {
    pub fn new(config: &GameConfig, event_bus: EventBus) -> Self {
        Self {
            starting_score: config.starting_score,
            starting_lives: config.starting_lives,
            score: config.starting_score,
            lives: config.starting_lives,
            phase: GamePhase::Home,
            event_bus,
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Reset the counters and begin a new round
    #[instrument(skip(self))]
    pub async fn start_game(&mut self) {
        self.reset().await;
        self.phase = GamePhase::Playing;
        info!(score = self.score, lives = self.lives, "Game started");
        self.event_bus.publish(GameEvent::GameStarted).await;
    }

    pub async fn increment_score(&mut self) {
        self.score = self.score.saturating_add(1);
        debug!(score = self.score, "Score incremented");
        self.event_bus
            .publish(GameEvent::Scored { score: self.score })
            .await;
    }

    /// Take one life; running out ends the game
    pub async fn reduce_lives(&mut self) {
        self.lives = self.lives.saturating_sub(1);

        if self.lives <= 0 {
            self.lives = 0;
            self.phase = GamePhase::Ended;
            info!(score = self.score, "Game ended");
            self.event_bus.publish(GameEvent::GameEnded).await;
        } else {
            debug!(lives = self.lives, "Life lost");
            self.event_bus
                .publish(GameEvent::ColliderHit { lives: self.lives })
                .await;
        }
    }

    /// Reset the counters and return to the home screen
    #[instrument(skip(self))]
    pub async fn go_home(&mut self) {
        self.reset().await;
        self.phase = GamePhase::Home;
        info!("Returned home");
        self.event_bus.publish(GameEvent::HomeTriggered).await;
    }

    async fn reset(&mut self) {
        self.score = self.starting_score;
        self.lives = self.starting_lives;
        self.event_bus
            .publish(GameEvent::GameReset {
                score: self.score,
                lives: self.lives,
            })
            .await;
    }
}
