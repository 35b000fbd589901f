//! Idle/demo mode input
//!
//! Plays the table without a human: holds a flipper whenever the ball is
//! dropping into its reach, and launches a ball that is sitting still near
//! the top.

use super::flipper::Flipper;
use super::rng::RandomSource;
use super::state::{GamePhase, Table};
use super::tick::TickInput;

/// Extra margin around a flipper's swept area that still counts as in reach
const REACH_MARGIN: f32 = 12.0;

/// Ball speed below which the autopilot considers it resting
const RESTING_SPEED: f32 = 1.0;

/// Whether the ball is inside the area a flipper sweeps and not climbing away
fn in_reach(flipper: &Flipper, ball_pos: glam::Vec2, ball_vel: glam::Vec2, radius: f32) -> bool {
    let reach = flipper.length + radius + flipper.width / 2.0 + REACH_MARGIN;
    let offset = ball_pos - flipper.pivot;
    let rising = ball_vel.y < -RESTING_SPEED;

    offset.length() <= reach && offset.y <= radius + REACH_MARGIN && !rising
}

/// Choose input for the next tick
pub fn autopilot_input<R: RandomSource>(table: &Table<R>) -> TickInput {
    if table.phase != GamePhase::Playing {
        return TickInput::default();
    }

    let ball = &table.ball;
    let radius = ball.radius();

    TickInput {
        left: in_reach(table.left_flipper(), ball.pos, ball.vel, radius),
        right: in_reach(table.right_flipper(), ball.pos, ball.vel, radius),
        launch: ball.pos.y < table.tuning.launch_zone_y && ball.vel.length() < RESTING_SPEED,
        ..Default::default()
    }
}
