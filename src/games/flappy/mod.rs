//! Flappy Bird side-scroller.
//!
//! Gravity pulls the bird down every tick and a jump sets its velocity
//! upward. Pipe pairs spawn on a timer at the right edge and scroll left.
//! Touching a pipe or falling below the board ends the game.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
