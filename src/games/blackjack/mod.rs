//! Blackjack against a house dealer.
//!
//! One player, one dealer, one fresh 52-card deck per round. The player
//! hits or stands; on stand the dealer draws to 17 and the round is settled.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
