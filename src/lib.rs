//! Arcade - Blackjack and Flappy Bird engines
//!
//! The engines are plain state machines driven by discrete commands and a
//! fixed-rate clock. The terminal front end in `main.rs` only maps keys to
//! commands and draws snapshots.

pub mod core;
pub mod games;

pub use crate::core::{ArcadeConfig, BlackjackConfig, FlappyConfig};
pub use crate::core::{BlackjackError, FlappyError};
pub use games::{BlackjackGame, FlappyGame};
