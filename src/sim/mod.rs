//! Pinball simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform code:
//! - Fixed timestep only
//! - Injected randomness only
//! - Fixed update order (left flipper before right, bumpers in table order)

pub mod autopilot;
pub mod ball;
pub mod bumper;
pub mod clock;
pub mod collision;
pub mod flipper;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use ball::Ball;
pub use bumper::Bumper;
pub use clock::FixedStep;
pub use collision::{
    CollisionResult, ball_circle_collision, ball_segment_collision, closest_point_on_segment,
    point_segment_distance, reflect_velocity,
};
pub use flipper::{Flipper, FlipperSide, FlipperUpdatePolicy, KickDirection};
pub use rng::{FixedSource, PcgSource, RandomSource};
pub use snapshot::{BallView, BumperView, FlipperView, TableSnapshot};
pub use state::{GamePhase, LifePolicy, Table, TableEvent};
pub use tick::{TickInput, tick};
