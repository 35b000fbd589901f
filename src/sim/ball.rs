//! The ball: gravity integration and wall bounces

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SIM_DT;

/// The single ball on the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed for the ball's lifetime
    radius: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Fraction of velocity kept after a wall bounce
    pub wall_damping: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, gravity: f32, wall_damping: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            gravity,
            wall_damping,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Apply gravity then translate
    ///
    /// Constants are per tick, so `dt` is measured in units of [`SIM_DT`].
    pub fn integrate(&mut self, dt: f32) {
        let ticks = dt / SIM_DT;
        self.vel.y += self.gravity * ticks;
        self.pos += self.vel * ticks;
    }

    /// Bounce off the left and right walls of a playfield `width` wide
    pub fn reflect_off_vertical_walls(&mut self, width: f32) {
        if self.pos.x - self.radius <= 0.0 || self.pos.x + self.radius >= width {
            self.vel.x = -self.vel.x * self.wall_damping;
            self.pos.x = self.pos.x.clamp(self.radius, width - self.radius);
        }
    }

    /// Bounce off the top wall
    pub fn reflect_off_top(&mut self) {
        if self.pos.y - self.radius <= 0.0 {
            self.vel.y = -self.vel.y * self.wall_damping;
            self.pos.y = self.radius;
        }
    }

    /// Whether the ball has left through the bottom of the playfield
    #[inline]
    pub fn is_below(&self, height: f32) -> bool {
        self.pos.y > height
    }
}
