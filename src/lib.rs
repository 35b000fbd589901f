//! Pinball - a single-ball table simulation
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (physics, collisions, table state)
//! - `tuning`: Data-driven table constants and variant presets

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError, Variant};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta accepted by the fixed-step clock (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions (y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 900.0;

    /// Gap left between the ball and a shape after contact resolution
    pub const SEPARATION: f32 = 1.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Move `current` toward `target` by at most `max_delta`, never past it
#[inline]
pub fn approach(current: f32, target: f32, max_delta: f32) -> f32 {
    let max_delta = max_delta.abs();
    let delta = (target - current).clamp(-max_delta, max_delta);
    current + delta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_clamps_at_target() {
        assert_eq!(approach(0.0, 1.0, 0.25), 0.25);
        assert_eq!(approach(0.9, 1.0, 0.25), 1.0);
        assert_eq!(approach(1.0, -1.0, 0.5), 0.5);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(2.0, std::f32::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 2.0).abs() < 1e-6);
    }
}
