//! Quad Reflex - a four-quadrant color-match reflex game
//!
//! Core modules:
//! - `sim`: Deterministic game engine (hand sweep, quadrant classification, win/loss)
//! - `renderer`: WebGPU rendering pipeline

pub mod renderer;
pub mod sim;

pub use sim::{GameEvent, GamePhase, GameState, Quadrant};

/// Game configuration constants
pub mod consts {
    /// Number of colored sectors in the ring
    pub const QUADRANT_COUNT: u8 = 4;
    /// Angular width of one sector (degrees)
    pub const QUADRANT_DEGREES: f32 = 90.0;
    /// One full rotation (degrees)
    pub const FULL_TURN_DEGREES: f32 = 360.0;

    /// Hand sweep speed at session start (degrees per tick)
    pub const INITIAL_SPEED: f32 = 1.5;
    /// Speed gained per successful round (degrees per tick)
    pub const SPEED_INCREMENT: f32 = 0.1;

    /// Ring dimensions (game units)
    pub const RING_OUTER_RADIUS: f32 = 220.0;
    pub const RING_INNER_RADIUS: f32 = 150.0;

    /// Hand dimensions - the hand sweeps over the hub, tip reaching into the ring
    pub const HAND_LENGTH: f32 = 180.0;
    pub const HAND_WIDTH: f32 = 10.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(consts::FULL_TURN_DEGREES);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= consts::FULL_TURN_DEGREES {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(450.0), 90.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-360.0), 0.0);
    }

    #[test]
    fn test_normalize_degrees_tiny_negative() {
        let n = normalize_degrees(-1.0e-7);
        assert!((0.0..consts::FULL_TURN_DEGREES).contains(&n));
    }
}
