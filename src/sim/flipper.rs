//! Flippers: a rotating thick segment with a two-state target
//!
//! Coordinates have y growing downward. A flipper's segment runs from its
//! pivot to `pivot + length * (cos θ, sin θ)`. The left flipper rests pointing
//! down toward the drain and swings up when activated; the right flipper is
//! its mirror image (`θ → π - θ`).

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::{ball_segment_collision, reflect_velocity};
use crate::consts::SIM_DT;
use crate::tuning::Tuning;
use crate::{approach, polar_to_cartesian};

/// Which side of the table a flipper sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipperSide {
    Left,
    Right,
}

impl FlipperSide {
    /// Map a left-flipper angle to this side
    #[inline]
    pub fn mirror(&self, angle: f32) -> f32 {
        match self {
            FlipperSide::Left => angle,
            FlipperSide::Right => PI - angle,
        }
    }
}

/// How the angle moves toward its target each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlipperUpdatePolicy {
    /// Fixed angular step, clamped at the target
    Stepped { step_deg: f32 },
    /// Move a fraction of the remaining distance, snapping once close
    Smoothed { factor: f32, snap_deg: f32 },
}

/// Direction of the extra impulse an active flipper gives the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KickDirection {
    /// Along the contact normal
    AlongNormal,
    /// Perpendicular to the flipper, on its upper face
    Perpendicular,
}

/// A flipper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flipper {
    pub side: FlipperSide,
    pub pivot: Vec2,
    /// Current angle (radians)
    pub angle: f32,
    pub rest_angle: f32,
    pub active_angle: f32,
    pub length: f32,
    /// Stroke width; the segment is thickened by half of it on each side
    pub width: f32,
    /// Level-triggered input state
    pub activated: bool,
    pub policy: FlipperUpdatePolicy,
    /// Extra impulse magnitude while activated
    pub kick: f32,
    pub kick_direction: KickDirection,
}

impl Flipper {
    pub fn new(side: FlipperSide, tuning: &Tuning) -> Self {
        let pivot = match side {
            FlipperSide::Left => tuning.left_pivot,
            FlipperSide::Right => tuning.right_pivot,
        };
        let rest_angle = side.mirror(tuning.flipper_rest_deg.to_radians());
        let active_angle = side.mirror(tuning.flipper_active_deg.to_radians());

        Self {
            side,
            pivot,
            angle: rest_angle,
            rest_angle,
            active_angle,
            length: tuning.flipper_length,
            width: tuning.flipper_width,
            activated: false,
            policy: tuning.flipper_policy,
            kick: tuning.flipper_kick,
            kick_direction: tuning.kick_direction,
        }
    }

    /// Angle the flipper is currently heading for
    #[inline]
    pub fn target_angle(&self) -> f32 {
        if self.activated {
            self.active_angle
        } else {
            self.rest_angle
        }
    }

    /// Allowed angle range (min, max)
    #[inline]
    pub fn bounds(&self) -> (f32, f32) {
        (
            self.rest_angle.min(self.active_angle),
            self.rest_angle.max(self.active_angle),
        )
    }

    /// Tip of the flipper segment
    #[inline]
    pub fn end(&self) -> Vec2 {
        self.pivot + polar_to_cartesian(self.length, self.angle)
    }

    /// Advance the angle toward the target for `dt` seconds
    pub fn update(&mut self, dt: f32) {
        let ticks = dt / SIM_DT;
        let target = self.target_angle();

        self.angle = match self.policy {
            FlipperUpdatePolicy::Stepped { step_deg } => {
                approach(self.angle, target, step_deg.to_radians() * ticks)
            }
            FlipperUpdatePolicy::Smoothed { factor, snap_deg } => {
                let diff = target - self.angle;
                if diff.abs() <= snap_deg.to_radians() {
                    target
                } else {
                    let blend = 1.0 - (1.0 - factor).powf(ticks);
                    self.angle + diff * blend
                }
            }
        };

        let (lo, hi) = self.bounds();
        self.angle = self.angle.clamp(lo, hi);
    }

    /// Return to rest immediately
    pub fn reset(&mut self) {
        self.activated = false;
        self.angle = self.rest_angle;
    }

    /// Unit vector of the kick for a contact with the given normal
    fn kick_vector(&self, normal: Vec2) -> Vec2 {
        match self.kick_direction {
            KickDirection::AlongNormal => normal,
            KickDirection::Perpendicular => {
                let dir = polar_to_cartesian(1.0, self.angle);
                let perp = Vec2::new(dir.y, -dir.x);
                // Upper face: negative y
                if perp.y > 0.0 { -perp } else { perp }
            }
        }
    }

    /// Resolve a contact between the ball and this flipper
    ///
    /// Returns true if the ball touched the flipper this tick.
    pub fn check_collision(&self, ball: &mut Ball, separation: f32) -> bool {
        let half_width = self.width / 2.0;
        let contact =
            ball_segment_collision(ball.pos, ball.radius(), self.pivot, self.end(), half_width);
        if !contact.hit {
            return false;
        }

        let normal = contact.normal;
        ball.vel = reflect_velocity(ball.vel, normal);
        if self.activated {
            ball.vel += self.kick_vector(normal) * self.kick;
        }
        ball.pos = contact.point + normal * (ball.radius() + half_width + separation);

        true
    }
}
