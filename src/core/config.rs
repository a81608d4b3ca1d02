//! Tunable parameters for both games, loadable from a JSON file.
//!
//! Every field has a default matching the classic playfield, and missing
//! fields fall back to those defaults, so a config file only needs the keys
//! it wants to change:
//!
//! ```json
//! { "flappy": { "gravity": 2 }, "blackjack": { "auto_stand_on_bust": true } }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::constants::*;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub blackjack: BlackjackConfig,
    pub flappy: FlappyConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlackjackConfig {
    /// Dealer keeps drawing while the adjusted sum is below this.
    pub dealer_stands_on: u8,
    /// When set, a bust on hit immediately passes play to the dealer instead
    /// of waiting for an explicit stand.
    pub auto_stand_on_bust: bool,
}

impl Default for BlackjackConfig {
    fn default() -> Self {
        Self {
            dealer_stands_on: DEALER_STANDS_ON,
            auto_stand_on_bust: false,
        }
    }
}

/// Flappy Bird playfield geometry and physics, in board pixels and ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlappyConfig {
    pub board_width: i32,
    pub board_height: i32,

    pub bird_x: i32,
    pub bird_start_y: i32,
    pub bird_width: i32,
    pub bird_height: i32,

    pub pipe_width: i32,
    pub pipe_height: i32,
    /// Vertical opening between the top and bottom pipe of a pair.
    pub gap_height: i32,
    /// Highest possible top edge of the opening.
    pub gap_band_top: i32,
    /// Range below `gap_band_top` the opening's top edge may be drawn from.
    pub gap_band_span: i32,

    /// Horizontal pipe movement per tick (negative scrolls left).
    pub scroll_velocity: i32,
    /// Added to vertical velocity every tick (positive is downward).
    pub gravity: i32,
    /// Vertical velocity set by a jump.
    pub jump_velocity: i32,
    /// Awarded per pipe passed; a pair holds two pipes.
    pub score_per_pipe: f64,

    pub step_interval_ms: u64,
    pub spawn_interval_ms: u64,
    /// Drop pairs that have scrolled fully off the left edge.
    pub prune_offscreen: bool,
}

impl Default for FlappyConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            bird_x: BOARD_WIDTH / 8,
            bird_start_y: BIRD_START_Y,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            gap_height: BOARD_HEIGHT / 4,
            gap_band_top: PIPE_HEIGHT - PIPE_HEIGHT / 4 - PIPE_HEIGHT / 2,
            gap_band_span: PIPE_HEIGHT / 2,
            scroll_velocity: SCROLL_VELOCITY,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            score_per_pipe: SCORE_PER_PIPE,
            step_interval_ms: FLAPPY_STEP_INTERVAL_MS,
            spawn_interval_ms: FLAPPY_SPAWN_INTERVAL_MS,
            prune_offscreen: true,
        }
    }
}

impl FlappyConfig {
    /// Check that the geometry describes a playable board.
    pub fn validate(&self) -> Result<(), String> {
        if self.board_width <= 0 || self.board_height <= 0 {
            return Err("board dimensions must be positive".to_string());
        }
        if self.bird_width <= 0 || self.bird_height <= 0 {
            return Err("bird dimensions must be positive".to_string());
        }
        if self.pipe_width <= 0 || self.pipe_height <= 0 {
            return Err("pipe dimensions must be positive".to_string());
        }
        if self.gap_height <= 0 {
            return Err("gap height must be positive".to_string());
        }
        if self.gap_band_span < 0 {
            return Err("gap band span cannot be negative".to_string());
        }
        if !(0..=self.board_height).contains(&self.gravity) {
            return Err(format!(
                "gravity must be between 0 and {}",
                self.board_height
            ));
        }
        if self.jump_velocity.unsigned_abs() > self.board_height.unsigned_abs() {
            return Err(format!(
                "jump velocity must be within +/-{}",
                self.board_height
            ));
        }
        if !(-self.board_width..=0).contains(&self.scroll_velocity) {
            return Err(format!(
                "scroll velocity must be between -{} and 0",
                self.board_width
            ));
        }
        if self.score_per_pipe < 0.0 || !self.score_per_pipe.is_finite() {
            return Err("score per pipe must be a non-negative number".to_string());
        }
        Ok(())
    }
}

impl BlackjackConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.dealer_stands_on == 0 || self.dealer_stands_on > BLACKJACK {
            return Err(format!(
                "dealer_stands_on must be between 1 and {}",
                BLACKJACK
            ));
        }
        Ok(())
    }
}

impl ArcadeConfig {
    /// Default config location: `<platform config dir>/arcade/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "arcade").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let config: ArcadeConfig = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> io::Result<Self> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Load from the default location, or use defaults if there is none.
    pub fn load_default() -> io::Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> io::Result<()> {
        self.blackjack
            .validate()
            .and_then(|_| self.flappy.validate())
            .map_err(|msg| io::Error::new(io::ErrorKind::InvalidData, msg))
    }
}
