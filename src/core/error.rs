//! Precondition errors reported by the game engines.
//!
//! Discrete commands (hit, stand, settle, jump) return these when invoked in
//! a state that does not accept them. Clock-driven calls never error; they
//! are no-ops outside the running state.

use thiserror::Error;

use crate::games::blackjack::{Card, RoundPhase};

/// Rejected Blackjack commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlackjackError {
    #[error("no round has been dealt yet")]
    RoundNotStarted,

    #[error("player has already bust and may only stand")]
    PlayerBust,

    #[error("{command} is not allowed during {phase:?}")]
    WrongPhase {
        command: &'static str,
        phase: RoundPhase,
    },

    #[error("the deck ran out of cards")]
    DeckExhausted,

    #[error("the deck holds {0} more than once")]
    DuplicateCard(Card),
}

/// Rejected Flappy Bird commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlappyError {
    #[error("the game has not been started")]
    NotStarted,

    #[error("the game is over; restart to play again")]
    GameOver,
}
