//! The arcade games: deterministic engines with no terminal dependencies.

pub mod blackjack;
pub mod flappy;

pub use blackjack::{BlackjackGame, BlackjackInput, BlackjackView, GameOutcome, RoundPhase};
pub use flappy::{FlappyGame, FlappyInput, FlappyPhase, FlappyView};
