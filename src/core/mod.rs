//! Shared infrastructure: timing, configuration, errors, and logging.

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod logger;

pub use clock::FixedTimer;
pub use config::{ArcadeConfig, BlackjackConfig, FlappyConfig};
pub use constants::*;
pub use error::{BlackjackError, FlappyError};
