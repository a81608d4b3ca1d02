//! Flappy Bird data structures.

use serde::{Deserialize, Serialize};

use crate::core::clock::FixedTimer;
use crate::core::config::FlappyConfig;

/// Axis-aligned rectangle in board pixels. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Strict overlap; rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bird {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Pixels per tick, positive is downward.
    pub velocity_y: i32,
}

impl Bird {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A top and bottom pipe sharing one column, with an opening between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub x: i32,
    /// Top edge of the opening; the top pipe ends here.
    pub gap_y: i32,
    pub gap_height: i32,
    pub width: i32,
    pub pipe_height: i32,
    pub passed: bool,
}

impl ObstaclePair {
    /// Pipes in a pair; each is scored separately.
    pub const PIPES: u32 = 2;

    pub fn top(&self) -> Rect {
        Rect::new(self.x, self.gap_y - self.pipe_height, self.width, self.pipe_height)
    }

    pub fn bottom(&self) -> Rect {
        Rect::new(self.x, self.gap_y + self.gap_height, self.width, self.pipe_height)
    }

    pub fn trailing_edge(&self) -> i32 {
        self.x + self.width
    }

    pub fn collides_with(&self, rect: &Rect) -> bool {
        self.top().overlaps(rect) || self.bottom().overlaps(rect)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlappyPhase {
    /// Title screen; nothing moves.
    Idle,
    Running,
    /// Frozen until restarted.
    GameOver,
}

/// What a single physics tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub pairs_passed: u32,
    pub game_over: bool,
}

/// Snapshot handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlappyView {
    pub phase: FlappyPhase,
    pub bird: Bird,
    pub obstacles: Vec<ObstaclePair>,
    pub score: f64,
    pub display_score: u32,
    pub game_over: bool,
    pub board_width: i32,
    pub board_height: i32,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub config: FlappyConfig,
    pub phase: FlappyPhase,
    pub bird: Bird,
    /// Oldest pair first; new pairs are appended at the tail.
    pub obstacles: Vec<ObstaclePair>,
    pub score: f64,
    pub tick_count: u64,
    pub pairs_spawned: u64,
    pub step_timer: FixedTimer,
    pub spawn_timer: FixedTimer,
}

impl FlappyGame {
    pub fn new(config: FlappyConfig) -> Self {
        let bird = Bird {
            x: config.bird_x,
            y: config.bird_start_y,
            width: config.bird_width,
            height: config.bird_height,
            velocity_y: 0,
        };
        let step_timer = FixedTimer::new(config.step_interval_ms);
        let spawn_timer = FixedTimer::new(config.spawn_interval_ms);
        Self {
            config,
            phase: FlappyPhase::Idle,
            bird,
            obstacles: Vec::new(),
            score: 0.0,
            tick_count: 0,
            pairs_spawned: 0,
            step_timer,
            spawn_timer,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == FlappyPhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == FlappyPhase::GameOver
    }

    /// Whole points, as shown on screen.
    pub fn display_score(&self) -> u32 {
        self.score.floor() as u32
    }

    pub fn view(&self) -> FlappyView {
        FlappyView {
            phase: self.phase,
            bird: self.bird,
            obstacles: self.obstacles.clone(),
            score: self.score,
            display_score: self.display_score(),
            game_over: self.is_game_over(),
            board_width: self.config.board_width,
            board_height: self.config.board_height,
        }
    }
}
