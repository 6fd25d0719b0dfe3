// Public API
pub use state::{GamePhase, GameState};

// Internal modules
mod state;
