// Shell timing
pub const FRAME_POLL_MS: u64 = 16;
/// Largest time slice fed to a timer in one advance.
pub const MAX_FRAME_DT_MS: u64 = 100;

// Flappy timers
pub const FLAPPY_STEP_INTERVAL_MS: u64 = 1000 / 60;
pub const FLAPPY_SPAWN_INTERVAL_MS: u64 = 1500;

// Flappy board, in board pixels
pub const BOARD_WIDTH: i32 = 360;
pub const BOARD_HEIGHT: i32 = 640;
pub const BIRD_WIDTH: i32 = 34;
pub const BIRD_HEIGHT: i32 = 24;
pub const BIRD_START_Y: i32 = BOARD_WIDTH / 2;
pub const PIPE_WIDTH: i32 = 64;
pub const PIPE_HEIGHT: i32 = 512;

// Flappy physics
pub const GRAVITY: i32 = 1;
pub const JUMP_VELOCITY: i32 = -9;
pub const SCROLL_VELOCITY: i32 = -4;
pub const SCORE_PER_PIPE: f64 = 0.5;

// Blackjack
pub const DECK_SIZE: usize = 52;
pub const BLACKJACK: u8 = 21;
pub const DEALER_STANDS_ON: u8 = 17;

// Log buffer
pub const LOG_BUFFER_CAPACITY: usize = 100;
