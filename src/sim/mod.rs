//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one frame's worth of motion)
//! - Seeded RNG only (serve angle and initial direction)
//! - No rendering or platform dependencies

pub mod controller;
pub mod state;
pub mod tick;

pub use controller::track_step;
pub use state::{Arena, Ball, GameConfig, GameState, Paddle, Score, ServeDirection, Snapshot};
pub use tick::{TickInput, tick};
