//! Table state and session commands
//!
//! The table owns the ball, both flippers and the bumpers. The presentation
//! layer only ever reads it through [`Table::snapshot`](super::TableSnapshot).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bumper::Bumper;
use super::flipper::{Flipper, FlipperSide};
use super::rng::{PcgSource, RandomSource};
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    Playing,
    /// Simulation frozen until unpaused
    Paused,
    /// Session ended; only a restart leaves this phase
    GameOver,
}

/// What happens when the ball drains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LifePolicy {
    /// Respawn until `count` balls have drained
    Lives { count: u32 },
    /// The first drain ends the session
    SuddenDeath,
}

impl LifePolicy {
    pub fn starting_lives(&self) -> u32 {
        match self {
            LifePolicy::Lives { count } => *count,
            LifePolicy::SuddenDeath => 1,
        }
    }
}

/// Things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableEvent {
    FlipperContact { side: FlipperSide },
    BumperHit { index: usize, points: u64 },
    Launched,
    BallLost { lives_left: u32 },
    GameOver { score: u64 },
    Restarted,
}

/// The pinball table session
#[derive(Debug, Clone)]
pub struct Table<R = PcgSource> {
    pub tuning: Tuning,
    pub ball: Ball,
    /// Left flipper first, then right
    pub flippers: [Flipper; 2],
    /// Checked in this order every tick
    pub bumpers: Vec<Bumper>,
    pub score: u64,
    pub lives: u32,
    pub phase: GamePhase,
    /// Simulated ticks since the session began
    pub time_ticks: u64,
    pub(crate) events: Vec<TableEvent>,
    rng: R,
}

impl Table<PcgSource> {
    /// Create a table with the default seeded random source
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, PcgSource::new(seed))
    }
}

impl<R: RandomSource> Table<R> {
    /// Create a table drawing launch jitter from `rng`
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        let flippers = [
            Flipper::new(FlipperSide::Left, &tuning),
            Flipper::new(FlipperSide::Right, &tuning),
        ];
        let bumpers = tuning.bumpers.iter().map(Bumper::from).collect();
        let ball = Ball::new(
            tuning.spawn_pos,
            tuning.ball_radius,
            tuning.gravity,
            tuning.wall_damping,
        );

        let mut table = Self {
            lives: tuning.life_policy.starting_lives(),
            tuning,
            ball,
            flippers,
            bumpers,
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
            rng,
        };
        table.spawn_ball();
        table
    }

    #[inline]
    pub fn left_flipper(&self) -> &Flipper {
        &self.flippers[0]
    }

    #[inline]
    pub fn right_flipper(&self) -> &Flipper {
        &self.flippers[1]
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &[TableEvent] {
        &self.events
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Replace the ball with a fresh one at the spawn point
    pub fn spawn_ball(&mut self) {
        let (min_vx, max_vx) = self.tuning.spawn_vx;
        let vx = self.rng.next_float(min_vx, max_vx);
        self.ball = Ball::new(
            self.tuning.spawn_pos,
            self.tuning.ball_radius,
            self.tuning.gravity,
            self.tuning.wall_damping,
        )
        .with_velocity(Vec2::new(vx, self.tuning.spawn_vy));
    }

    /// Start a new session. Only allowed once the game is over.
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }

        self.score = 0;
        self.lives = self.tuning.life_policy.starting_lives();
        self.phase = GamePhase::Playing;
        for bumper in &mut self.bumpers {
            bumper.reset();
        }
        for flipper in &mut self.flippers {
            flipper.reset();
        }
        self.spawn_ball();

        log::info!("Session restarted");
        self.events.push(TableEvent::Restarted);
        true
    }

    /// Kick the ball into play while it is still near the top of the table
    pub fn launch(&mut self) -> bool {
        if self.phase != GamePhase::Playing || self.ball.pos.y >= self.tuning.launch_zone_y {
            return false;
        }

        let (min_vx, max_vx) = self.tuning.launch_vx;
        self.ball.vel = Vec2::new(self.rng.next_float(min_vx, max_vx), self.tuning.launch_vy);

        log::debug!("Ball launched with velocity {:?}", self.ball.vel);
        self.events.push(TableEvent::Launched);
        true
    }

    /// Playing <-> Paused; ignored after game over
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            GamePhase::GameOver => GamePhase::GameOver,
        };
    }

    /// Handle a drained ball according to the life policy
    pub(crate) fn lose_ball(&mut self) {
        match self.tuning.life_policy {
            LifePolicy::Lives { .. } => {
                self.lives = self.lives.saturating_sub(1);
                if self.lives > 0 {
                    log::info!("Ball lost, {} left", self.lives);
                    self.events.push(TableEvent::BallLost {
                        lives_left: self.lives,
                    });
                    self.spawn_ball();
                    return;
                }
            }
            LifePolicy::SuddenDeath => self.lives = 0,
        }

        log::info!("Game over with score {}", self.score);
        self.phase = GamePhase::GameOver;
        self.events.push(TableEvent::GameOver { score: self.score });
    }
}
