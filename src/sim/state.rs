//! Game state and core simulation types
//!
//! One explicit state value owns everything the engine mutates, so the whole
//! simulation can be driven headless in tests.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Fixed playfield dimensions, constant for a running session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// A paddle, addressed by its top edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-edge offset from the top of the arena
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Vertical center of the paddle
    pub fn center(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Keep the paddle fully inside the arena
    pub fn clamp_to(&mut self, arena: &Arena) {
        self.y = self.y.clamp(0.0, arena.height - self.height);
    }
}

/// The ball, addressed by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in units per tick
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    /// Vertical center of the ball
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }
}

/// Points scored this session; never reset by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

/// Horizontal direction of a serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServeDirection {
    /// Ball travels left, toward the player paddle
    TowardPlayer,
    /// Ball travels right, toward the opponent paddle
    TowardOpponent,
}

impl ServeDirection {
    pub fn sign(self) -> f32 {
        match self {
            ServeDirection::TowardPlayer => -1.0,
            ServeDirection::TowardOpponent => 1.0,
        }
    }
}

/// Geometry fixed at session start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub arena: Arena,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_size: BALL_SIZE,
        }
    }
}

/// Read-only per-frame view handed to the presentation adapter
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot {
    pub arena: Arena,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_y: f32,
    pub opponent_y: f32,
    pub ball_pos: Vec2,
    pub ball_size: f32,
    pub player_score: u32,
    pub opponent_score: u32,
}

/// Complete game state (deterministic under a fixed seed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub arena: Arena,
    /// Left paddle, positioned by pointer/touch input
    pub player: Paddle,
    /// Right paddle, positioned by the reactive controller
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state: paddles and ball centered, ball served in a
    /// uniformly random horizontal direction.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let arena = config.arena;
        let paddle_y = (arena.height - config.paddle_height) / 2.0;
        let paddle = Paddle {
            y: paddle_y,
            width: config.paddle_width,
            height: config.paddle_height,
        };

        let mut rng = Pcg32::seed_from_u64(seed);
        let direction = if rng.random_bool(0.5) {
            ServeDirection::TowardOpponent
        } else {
            ServeDirection::TowardPlayer
        };

        let mut state = Self {
            seed,
            arena,
            player: paddle,
            opponent: paddle,
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                size: config.ball_size,
            },
            score: Score::default(),
            time_ticks: 0,
            rng,
        };
        state.serve(direction);
        state
    }

    /// Position the player paddle from an input sample giving the desired
    /// paddle center. Out-of-range targets clamp; they are not an error.
    pub fn set_player_target(&mut self, target_center: f32) {
        self.player.y = target_center - self.player.height / 2.0;
        let arena = self.arena;
        self.player.clamp_to(&arena);
    }

    /// Re-center the ball and give it a fresh velocity toward `direction`.
    ///
    /// Called from the scoring branch of [`tick`](super::tick::tick), and
    /// public so the presentation layer (or a test) can force a serve.
    pub fn serve(&mut self, direction: ServeDirection) {
        self.ball.pos = Vec2::new(
            (self.arena.width - self.ball.size) / 2.0,
            (self.arena.height - self.ball.size) / 2.0,
        );
        self.ball.vel = Vec2::new(
            SERVE_SPEED_X * direction.sign(),
            self.rng.random_range(-SERVE_MAX_SPEED_Y..=SERVE_MAX_SPEED_Y),
        );
    }

    /// Snapshot for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            arena: self.arena,
            paddle_width: self.player.width,
            paddle_height: self.player.height,
            player_y: self.player.y,
            opponent_y: self.opponent.y,
            ball_pos: self.ball.pos,
            ball_size: self.ball.size,
            player_score: self.score.player,
            opponent_score: self.score.opponent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_centers_everything() {
        let state = GameState::new(GameConfig::default(), 7);

        assert_eq!(state.player.y, (500.0 - 80.0) / 2.0);
        assert_eq!(state.opponent.y, (500.0 - 80.0) / 2.0);
        assert_eq!(state.ball.pos, Vec2::new(392.0, 242.0));
        assert_eq!(state.ball.vel.x.abs(), SERVE_SPEED_X);
        assert!(state.ball.vel.y.abs() <= SERVE_MAX_SPEED_Y);
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_serve_direction_sets_horizontal_speed() {
        let mut state = GameState::new(GameConfig::default(), 42);

        state.serve(ServeDirection::TowardPlayer);
        assert_eq!(state.ball.vel.x, -SERVE_SPEED_X);
        assert_eq!(state.ball.pos, Vec2::new(392.0, 242.0));

        state.serve(ServeDirection::TowardOpponent);
        assert_eq!(state.ball.vel.x, SERVE_SPEED_X);
        assert!(state.ball.vel.y.abs() <= SERVE_MAX_SPEED_Y);
    }

    #[test]
    fn test_same_seed_same_serves() {
        let a = GameState::new(GameConfig::default(), 123);
        let b = GameState::new(GameConfig::default(), 123);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_player_target_clamps_to_arena() {
        let mut state = GameState::new(GameConfig::default(), 0);

        state.set_player_target(-10_000.0);
        assert_eq!(state.player.y, 0.0);

        state.set_player_target(10_000.0);
        assert_eq!(state.player.y, 500.0 - 80.0);

        // In-range targets position the paddle center exactly
        state.set_player_target(250.0);
        assert_eq!(state.player.center(), 250.0);
    }
}
