//! Reactive opponent paddle controller
//!
//! A pure proportional tracker with a dead-zone and fixed step. It needs no
//! memory between ticks, so it is a function rather than a stateful object.

/// Displacement to apply to the opponent paddle this tick.
///
/// Moves `step` units toward the ball when the paddle center is more than
/// `dead_zone` away from the ball center, otherwise holds. The dead-zone
/// prevents jitter when the paddle is already lined up.
pub fn track_step(paddle_center: f32, ball_center: f32, dead_zone: f32, step: f32) -> f32 {
    if paddle_center < ball_center - dead_zone {
        step
    } else if paddle_center > ball_center + dead_zone {
        -step
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_ball_below() {
        assert_eq!(track_step(100.0, 200.0, 10.0, 5.0), 5.0);
    }

    #[test]
    fn test_tracks_ball_above() {
        assert_eq!(track_step(300.0, 200.0, 10.0, 5.0), -5.0);
    }

    #[test]
    fn test_holds_inside_dead_zone() {
        assert_eq!(track_step(200.0, 200.0, 10.0, 5.0), 0.0);
        assert_eq!(track_step(195.0, 200.0, 10.0, 5.0), 0.0);
        assert_eq!(track_step(210.0, 200.0, 10.0, 5.0), 0.0);
    }

    #[test]
    fn test_dead_zone_boundary_holds() {
        // Exactly at the edge of the band is still a hold (strict comparison)
        assert_eq!(track_step(190.0, 200.0, 10.0, 5.0), 0.0);
        assert_eq!(track_step(189.9, 200.0, 10.0, 5.0), 5.0);
    }
}
