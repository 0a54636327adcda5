//! Rally Pong - a classic two-paddle ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, scoring, opponent AI)
//! - `renderer`: 2D canvas presentation adapter (wasm only)

pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod renderer;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (logical units; the canvas backing store matches)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 16.0;
    /// Horizontal serve speed (units per tick)
    pub const SERVE_SPEED_X: f32 = 6.0;
    /// Vertical serve speed is drawn uniformly from [-SERVE_MAX_SPEED_Y, SERVE_MAX_SPEED_Y]
    pub const SERVE_MAX_SPEED_Y: f32 = 4.0;

    /// Post-collision vertical speed per unit of normalized impact offset
    pub const SPIN_FACTOR: f32 = 5.0;

    /// Opponent paddle tracking step (units per tick)
    pub const OPPONENT_STEP: f32 = 5.0;
    /// Tolerance band around the ball center within which the opponent holds
    pub const OPPONENT_DEAD_ZONE: f32 = 10.0;
}
