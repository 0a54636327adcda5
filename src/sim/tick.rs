//! Fixed timestep simulation tick
//!
//! One call advances the world by exactly one frame's worth of motion; there
//! is no variable delta time. Each tick runs the full sequence
//! integrate -> reflect -> paddle collisions -> scoring -> opponent tracking
//! unconditionally.

use crate::consts::*;

use super::controller::track_step;
use super::state::{Ball, GameState, Paddle, ServeDirection};

/// Input sample for a single tick
///
/// Input handlers overwrite `target_y` as events arrive; the tick observes
/// whatever was written last (last-writer-wins).
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Desired player paddle center, in arena coordinates
    pub target_y: Option<f32>,
}

/// Advance the game state by one fixed step.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if let Some(target) = input.target_y {
        state.set_player_target(target);
    }
    state.time_ticks += 1;

    let arena = state.arena;

    // Ball movement
    state.ball.pos += state.ball.vel;

    // Top and bottom wall reflection
    if state.ball.pos.y <= 0.0 || state.ball.pos.y + state.ball.size >= arena.height {
        state.ball.vel.y = -state.ball.vel.y;
        state.ball.pos.y = state.ball.pos.y.clamp(0.0, arena.height - state.ball.size);
    }

    // Player paddle collision: force the ball rightward, spin by contact
    // offset, and snap out of the paddle so one hit triggers once.
    let player = state.player;
    if state.ball.pos.x <= player.width && vertical_overlap(&state.ball, &player) {
        state.ball.vel.x = state.ball.vel.x.abs();
        state.ball.vel.y = SPIN_FACTOR * impact(&state.ball, &player);
        state.ball.pos.x = player.width;
    }

    // Opponent paddle collision, mirrored
    let opponent = state.opponent;
    if state.ball.pos.x + state.ball.size >= arena.width - opponent.width
        && vertical_overlap(&state.ball, &opponent)
    {
        state.ball.vel.x = -state.ball.vel.x.abs();
        state.ball.vel.y = SPIN_FACTOR * impact(&state.ball, &opponent);
        state.ball.pos.x = arena.width - opponent.width - state.ball.size;
    }

    // Scoring. Both sides are checked independently; they cannot both hold
    // in the same tick at normal speeds.
    if state.ball.pos.x < 0.0 {
        state.score.opponent += 1;
        state.serve(ServeDirection::TowardPlayer);
    }
    if state.ball.pos.x + state.ball.size > arena.width {
        state.score.player += 1;
        state.serve(ServeDirection::TowardOpponent);
    }

    // Opponent tracking
    state.opponent.y += track_step(
        state.opponent.center(),
        state.ball.center_y(),
        OPPONENT_DEAD_ZONE,
        OPPONENT_STEP,
    );
    state.opponent.clamp_to(&arena);
}

fn vertical_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.size >= paddle.y && ball.pos.y <= paddle.y + paddle.height
}

/// Normalized offset of the contact point from paddle center, roughly [-1, 1]
fn impact(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.center_y() - paddle.center()) / (paddle.height / 2.0)
}
