//! Fixed-step clock
//!
//! Turns variable frame deltas into a whole number of simulation ticks.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame's elapsed time and return how many ticks to run
    ///
    /// Long frames are clamped and at most [`MAX_SUBSTEPS`] ticks are
    /// released per frame to prevent a spiral of death.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than carrying it into the next frame
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_sixtieth() {
        let mut clock = FixedStep::new();
        let total: u32 = (0..60).map(|_| clock.advance(SIM_DT * 1.0001)).sum();
        assert_eq!(total, 60);
    }

    #[test]
    fn test_accumulates_short_frames() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(SIM_DT * 0.6), 0);
        assert_eq!(clock.advance(SIM_DT * 0.6), 1);
        assert_eq!(clock.advance(SIM_DT * 0.6), 0);
        assert_eq!(clock.advance(SIM_DT * 0.6), 1);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut clock = FixedStep::new();
        // 0.2 s counts as 0.1 s: six ticks, not twelve
        assert_eq!(clock.advance(0.2), 6);
        assert_eq!(clock.advance(5.0), 6);
        assert!(clock.advance(5.0) <= MAX_SUBSTEPS);
        assert!(clock.advance(0.0) <= 1);
        assert!(clock.advance(-1.0) == 0);
    }
}
