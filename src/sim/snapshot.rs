//! Read-only view of the table for the presentation layer

use glam::Vec2;
use serde::Serialize;

use super::flipper::FlipperSide;
use super::rng::RandomSource;
use super::state::{GamePhase, Table};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlipperView {
    pub side: FlipperSide,
    pub pivot: Vec2,
    pub end: Vec2,
    /// Radians
    pub angle: f32,
    pub length: f32,
    pub width: f32,
    pub activated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BumperView {
    pub center: Vec2,
    pub radius: f32,
    pub hit_animation: u32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSnapshot {
    pub tick: u64,
    pub ball: BallView,
    pub flippers: [FlipperView; 2],
    pub bumpers: Vec<BumperView>,
    pub score: u64,
    pub lives: u32,
    pub phase: GamePhase,
}

impl<R: RandomSource> Table<R> {
    /// Capture the current state between ticks
    pub fn snapshot(&self) -> TableSnapshot {
        let flippers = self.flippers.each_ref().map(|f| FlipperView {
            side: f.side,
            pivot: f.pivot,
            end: f.end(),
            angle: f.angle,
            length: f.length,
            width: f.width,
            activated: f.activated,
        });

        TableSnapshot {
            tick: self.time_ticks,
            ball: BallView {
                pos: self.ball.pos,
                vel: self.ball.vel,
                radius: self.ball.radius(),
            },
            flippers,
            bumpers: self
                .bumpers
                .iter()
                .map(|b| BumperView {
                    center: b.center,
                    radius: b.radius,
                    hit_animation: b.hit_animation,
                })
                .collect(),
            score: self.score,
            lives: self.lives,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sim::{FixedSource, Table};
    use crate::tuning::Tuning;

    #[test]
    fn test_snapshot_mirrors_table() {
        let mut table = Table::with_rng(Tuning::classic(), FixedSource(0.5));
        table.bumpers[2].hit_animation = 4;
        table.score = 200;

        let snap = table.snapshot();
        assert_eq!(snap.ball.pos, table.ball.pos);
        assert_eq!(snap.ball.radius, 8.0);
        assert_eq!(snap.flippers[0].end, table.left_flipper().end());
        assert_eq!(snap.flippers[1].pivot, table.right_flipper().pivot);
        assert_eq!(snap.bumpers.len(), 5);
        assert_eq!(snap.bumpers[2].hit_animation, 4);
        assert_eq!(snap.score, 200);
        assert_eq!(snap.lives, 3);
    }

    #[test]
    fn test_snapshot_serializes() {
        let table = Table::new(Tuning::arcade(), 5);
        let json = serde_json::to_value(table.snapshot()).unwrap();
        assert_eq!(json["phase"], "Playing");
        assert_eq!(json["flippers"][1]["side"], "Right");
        assert_eq!(json["bumpers"].as_array().map(Vec::len), Some(5));
    }
}
