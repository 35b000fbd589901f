//! Bumpers: static circles that kick the ball away and score

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::{ball_circle_collision, reflect_velocity};
use crate::tuning::BumperSpec;

/// A round bumper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bumper {
    pub center: Vec2,
    pub radius: f32,
    /// Score awarded per hit
    pub points: u64,
    /// Ticks of hit flash remaining
    pub hit_animation: u32,
    /// Set while the ball stays in contact across ticks
    #[serde(skip)]
    in_contact: bool,
}

impl Bumper {
    pub fn new(center: Vec2, radius: f32, points: u64) -> Self {
        Self {
            center,
            radius,
            points,
            hit_animation: 0,
            in_contact: false,
        }
    }

    /// Count down the hit flash
    pub fn tick(&mut self) {
        self.hit_animation = self.hit_animation.saturating_sub(1);
    }

    /// Clear the flash and contact state
    pub fn reset(&mut self) {
        self.hit_animation = 0;
        self.in_contact = false;
    }

    /// Resolve a contact between the ball and this bumper
    ///
    /// The ball is reflected, kicked outward by `kick` and placed exactly
    /// `separation` beyond the bumper's surface. Returns true only when a new
    /// contact starts, so a ball held against the bumper scores once.
    pub fn check_collision(
        &mut self,
        ball: &mut Ball,
        kick: f32,
        separation: f32,
        flash_ticks: u32,
    ) -> bool {
        let contact = ball_circle_collision(ball.pos, ball.radius(), self.center, self.radius);
        if !contact.hit {
            self.in_contact = false;
            return false;
        }

        let normal = contact.normal;
        ball.vel = reflect_velocity(ball.vel, normal) + normal * kick;
        ball.pos = self.center + normal * (ball.radius() + self.radius + separation);

        let fresh = !self.in_contact;
        self.in_contact = true;
        if fresh {
            self.hit_animation = flash_ticks;
        }
        fresh
    }
}

impl From<&BumperSpec> for Bumper {
    fn from(spec: &BumperSpec) -> Self {
        Bumper::new(spec.center, spec.radius, spec.points)
    }
}
