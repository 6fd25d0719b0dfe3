use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// The fixed set of channels a handler can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Topic {
    GameStarted,
    Scored,
    ColliderHit,
    GameEnded,
    GameReset,
    HomeTriggered,
}

/// Events that can occur during a game session
///
/// Events represent facts about things that have already happened.
/// They are published by the game state and consumed by listeners
/// without either side knowing about the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A round has started (home screen → playing)
    GameStarted,

    /// The player scored; carries the updated score
    Scored { score: i32 },

    /// The player hit an obstacle but still has lives left
    ColliderHit { lives: i32 },

    /// The player ran out of lives
    GameEnded,

    /// Counters were restored to their starting values
    GameReset { score: i32, lives: i32 },

    /// The player went back to the home screen
    HomeTriggered,
}

impl GameEvent {
    /// Get the topic this event is published on
    pub fn topic(&self) -> Topic {
        match self {
            GameEvent::GameStarted => Topic::GameStarted,
            GameEvent::Scored { .. } => Topic::Scored,
            GameEvent::ColliderHit { .. } => Topic::ColliderHit,
            GameEvent::GameEnded => Topic::GameEnded,
            GameEvent::GameReset { .. } => Topic::GameReset,
            GameEvent::HomeTriggered => Topic::HomeTriggered,
        }
    }

    /// Get a human-readable description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            GameEvent::GameStarted => "game_started",
            GameEvent::Scored { .. } => "scored",
            GameEvent::ColliderHit { .. } => "collider_hit",
            GameEvent::GameEnded => "game_ended",
            GameEvent::GameReset { .. } => "game_reset",
            GameEvent::HomeTriggered => "home_triggered",
        }
    }
}
