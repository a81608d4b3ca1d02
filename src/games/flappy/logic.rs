//! Game logic for Flappy Bird: start, jump, spawning, and the physics tick.
//!
//! `step` and `spawn_obstacle_pair` are what the step and spawn timers call.
//! They are no-ops unless the game is running. `jump` is a player command
//! and reports why it was refused.

use log::{debug, info};
use rand::Rng;

use super::types::*;
use crate::core::error::FlappyError;

/// Discrete player commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Space. Starts the game from the title screen, otherwise flaps.
    Jump,
    Restart,
}

impl FlappyGame {
    /// Reset everything and start running. Also used to retry after a crash.
    pub fn start(&mut self) {
        self.bird.y = self.config.bird_start_y;
        self.bird.velocity_y = 0;
        self.obstacles.clear();
        self.score = 0.0;
        self.tick_count = 0;
        self.pairs_spawned = 0;
        self.phase = FlappyPhase::Running;
        self.step_timer.arm();
        self.spawn_timer.arm();
        debug!("flappy started");
    }

    pub fn restart(&mut self) {
        self.start();
    }

    /// Set the bird's vertical velocity to the jump velocity.
    pub fn jump(&mut self) -> Result<(), FlappyError> {
        match self.phase {
            FlappyPhase::Idle => Err(FlappyError::NotStarted),
            FlappyPhase::GameOver => Err(FlappyError::GameOver),
            FlappyPhase::Running => {
                self.bird.velocity_y = self.config.jump_velocity;
                Ok(())
            }
        }
    }

    /// Append a pair at the right edge with a random opening height.
    ///
    /// The opening's top edge is drawn uniformly from the configured band.
    pub fn spawn_obstacle_pair<R: Rng>(&mut self, rng: &mut R) -> bool {
        if !self.is_running() {
            return false;
        }
        let offset = rng.gen_range(0..=self.config.gap_band_span);
        self.spawn_obstacle_pair_at(self.config.gap_band_top + offset)
    }

    /// Append a pair at the right edge whose opening starts at `gap_y`.
    pub fn spawn_obstacle_pair_at(&mut self, gap_y: i32) -> bool {
        if !self.is_running() {
            return false;
        }
        self.obstacles.push(ObstaclePair {
            x: self.config.board_width,
            gap_y,
            gap_height: self.config.gap_height,
            width: self.config.pipe_width,
            pipe_height: self.config.pipe_height,
            passed: false,
        });
        self.pairs_spawned += 1;
        debug!("pair {} spawned, gap at {}", self.pairs_spawned, gap_y);
        true
    }

    /// Advance the simulation by one tick.
    pub fn step(&mut self) -> StepReport {
        let mut report = StepReport::default();
        if !self.is_running() {
            return report;
        }
        self.tick_count += 1;

        self.bird.velocity_y = self.bird.velocity_y.saturating_add(self.config.gravity);
        self.bird.y = self.bird.y.saturating_add(self.bird.velocity_y).max(0);

        let bird = self.bird.rect();
        let pair_score = self.config.score_per_pipe * ObstaclePair::PIPES as f64;
        let mut crashed = false;

        for pair in &mut self.obstacles {
            pair.x = pair.x.saturating_add(self.config.scroll_velocity);

            if !pair.passed && bird.x > pair.trailing_edge() {
                pair.passed = true;
                self.score += pair_score;
                report.pairs_passed += 1;
            }

            if pair.collides_with(&bird) {
                crashed = true;
            }
        }

        if report.pairs_passed > 0 {
            debug!("score {}", self.score);
        }

        if self.bird.y > self.config.board_height {
            crashed = true;
        }

        if self.config.prune_offscreen {
            // Only passed pairs can be fully off the left edge.
            self.obstacles
                .retain(|pair| !(pair.passed && pair.trailing_edge() < 0));
        }

        if crashed {
            self.end_game();
            report.game_over = true;
        }
        report
    }

    fn end_game(&mut self) {
        self.phase = FlappyPhase::GameOver;
        self.step_timer.halt();
        self.spawn_timer.halt();
        info!(
            "flappy over after {} ticks, score {}",
            self.tick_count,
            self.display_score()
        );
    }

    /// Feed elapsed wall time to the spawn and step timers and run whatever
    /// came due. Returns true if anything changed.
    pub fn advance<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> bool {
        if !self.is_running() {
            return false;
        }

        let spawns = self.spawn_timer.advance(dt_ms);
        for _ in 0..spawns {
            self.spawn_obstacle_pair(rng);
        }

        let steps = self.step_timer.advance(dt_ms);
        for _ in 0..steps {
            if self.step().game_over {
                break;
            }
        }

        spawns > 0 || steps > 0
    }
}

/// Apply a player command.
pub fn process_input(game: &mut FlappyGame, input: FlappyInput) -> Result<(), FlappyError> {
    match input {
        FlappyInput::Jump if game.phase == FlappyPhase::Idle => {
            game.start();
            Ok(())
        }
        FlappyInput::Jump => game.jump(),
        FlappyInput::Restart => {
            game.restart();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FlappyConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn running() -> FlappyGame {
        let mut game = FlappyGame::new(FlappyConfig::default());
        game.start();
        game
    }

    #[test]
    fn test_step_is_noop_when_idle() {
        let mut game = FlappyGame::new(FlappyConfig::default());
        let before = game.bird;
        assert_eq!(game.step(), StepReport::default());
        assert_eq!(game.bird, before);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut game = running();
        game.step();
        assert_eq!(game.bird.velocity_y, 1);
        assert_eq!(game.bird.y, 181);
        game.step();
        assert_eq!(game.bird.velocity_y, 2);
        assert_eq!(game.bird.y, 183);
    }

    #[test]
    fn test_jump_sets_velocity() {
        let mut game = running();
        game.bird.velocity_y = 7;
        game.jump().unwrap();
        assert_eq!(game.bird.velocity_y, -9);
        game.step();
        assert_eq!(game.bird.y, 180 - 8);
    }

    #[test]
    fn test_ceiling_clamps_without_ending_game() {
        let mut game = running();
        game.bird.y = 3;
        game.bird.velocity_y = -20;
        game.step();
        assert_eq!(game.bird.y, 0);
        assert!(game.is_running());
    }

    #[test]
    fn test_falling_below_board_ends_game() {
        let mut game = running();
        game.bird.y = 640;
        let report = game.step();
        assert!(report.game_over);
        assert!(game.is_game_over());
        assert!(!game.step_timer.is_armed());
        assert!(!game.spawn_timer.is_armed());
    }

    #[test]
    fn test_jump_rejected_outside_running() {
        let mut game = FlappyGame::new(FlappyConfig::default());
        assert_eq!(game.jump(), Err(FlappyError::NotStarted));
        game.start();
        game.bird.y = 1000;
        game.step();
        assert_eq!(game.jump(), Err(FlappyError::GameOver));
    }

    #[test]
    fn test_spawn_is_noop_when_not_running() {
        let mut game = FlappyGame::new(FlappyConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(!game.spawn_obstacle_pair(&mut rng));
        assert!(game.obstacles.is_empty());
    }

    #[test]
    fn test_random_gap_stays_in_band() {
        let mut game = running();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            game.spawn_obstacle_pair(&mut rng);
        }
        for pair in &game.obstacles {
            assert!(pair.gap_y >= 128 && pair.gap_y <= 384);
            assert_eq!(pair.x, 360);
        }
        assert_eq!(game.pairs_spawned, 200);
    }

    #[test]
    fn test_pipes_scroll_left() {
        let mut game = running();
        game.spawn_obstacle_pair_at(200);
        game.step();
        assert_eq!(game.obstacles[0].x, 356);
    }

    #[test]
    fn test_offscreen_pairs_are_pruned() {
        let mut game = running();
        game.spawn_obstacle_pair_at(200);
        game.obstacles[0].x = -70;
        game.obstacles[0].passed = true;
        game.step();
        assert!(game.obstacles.is_empty());
    }

    #[test]
    fn test_pruning_can_be_disabled() {
        let mut game = FlappyGame::new(FlappyConfig {
            prune_offscreen: false,
            ..FlappyConfig::default()
        });
        game.start();
        game.spawn_obstacle_pair_at(200);
        game.obstacles[0].x = -70;
        game.obstacles[0].passed = true;
        game.step();
        assert_eq!(game.obstacles.len(), 1);
    }

    #[test]
    fn test_advance_runs_due_steps() {
        let mut game = running();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert!(!game.advance(10, &mut rng));
        assert!(game.advance(22, &mut rng));
        assert_eq!(game.tick_count, 2);
    }

    #[test]
    fn test_advance_spawns_on_interval() {
        let mut game = running();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        // Keep the bird hovering so it survives 1.5s.
        for _ in 0..150 {
            game.bird.y = 300;
            game.bird.velocity_y = 0;
            game.advance(10, &mut rng);
        }
        assert_eq!(game.pairs_spawned, 1);
    }

    #[test]
    fn test_step_saturates_instead_of_overflowing() {
        let mut game = FlappyGame::new(FlappyConfig {
            prune_offscreen: false,
            ..FlappyConfig::default()
        });
        game.start();
        game.spawn_obstacle_pair_at(200);
        game.obstacles[0].x = i32::MIN + 1;
        game.obstacles[0].passed = true;
        game.bird.velocity_y = i32::MIN;
        game.step();
        assert_eq!(game.obstacles[0].x, i32::MIN);
        assert_eq!(game.bird.y, 0);
    }

    #[test]
    fn test_process_input_jump_starts_from_title() {
        let mut game = FlappyGame::new(FlappyConfig::default());
        process_input(&mut game, FlappyInput::Jump).unwrap();
        assert!(game.is_running());
        assert_eq!(game.bird.velocity_y, 0);
        process_input(&mut game, FlappyInput::Jump).unwrap();
        assert_eq!(game.bird.velocity_y, -9);
    }
}
