//! Fixed timestep simulation tick
//!
//! Core loop that advances the table by one step in a fixed order:
//! commands, ball, flipper angles, flipper contacts (left then right),
//! bumpers, drain.

use super::rng::RandomSource;
use super::state::{GamePhase, Table, TableEvent};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left flipper button held
    pub left: bool,
    /// Right flipper button held
    pub right: bool,
    /// Launch the ball (one-shot)
    pub launch: bool,
    /// Restart after game over (one-shot)
    pub restart: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
}

/// Advance the table by one timestep
pub fn tick<R: RandomSource>(table: &mut Table<R>, input: &TickInput, dt: f32) {
    table.events.clear();

    if input.restart {
        table.restart();
    }
    if input.pause {
        table.toggle_pause();
    }

    // Don't tick if paused or game over
    match table.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    if input.launch {
        table.launch();
    }

    table.time_ticks += 1;

    // Flipper buttons are level-triggered
    table.flippers[0].activated = input.left;
    table.flippers[1].activated = input.right;

    let width = table.tuning.width;
    let separation = table.tuning.separation;

    table.ball.integrate(dt);
    table.ball.reflect_off_vertical_walls(width);
    table.ball.reflect_off_top();

    for flipper in &mut table.flippers {
        flipper.update(dt);
    }

    // Both flippers may resolve in the same tick; left always goes first
    for flipper in &table.flippers {
        if flipper.check_collision(&mut table.ball, separation) {
            table.events.push(TableEvent::FlipperContact { side: flipper.side });
        }
    }

    let kick = table.tuning.bumper_kick;
    let flash_ticks = table.tuning.hit_animation_ticks;
    for (index, bumper) in table.bumpers.iter_mut().enumerate() {
        bumper.tick();
        if bumper.check_collision(&mut table.ball, kick, separation, flash_ticks) {
            table.score = table.score.saturating_add(bumper.points);
            log::debug!("Bumper {} hit, score {}", index, table.score);
            table.events.push(TableEvent::BumperHit {
                index,
                points: bumper.points,
            });
        }
    }

    if table.ball.is_below(table.tuning.height) {
        table.lose_ball();
    }
}
