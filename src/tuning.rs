//! Table tuning and variant presets
//!
//! Every physical constant of the table lives here so a table can be loaded
//! from JSON. Two presets ship with the crate: `Classic` (stepped flippers,
//! three lives) and `Arcade` (smoothed flippers, one ball, launch kick).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{FlipperUpdatePolicy, KickDirection, LifePolicy};

/// Named tuning presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    #[default]
    Classic,
    Arcade,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Arcade => "Arcade",
        }
    }

    pub fn tuning(&self) -> Tuning {
        match self {
            Variant::Classic => Tuning::classic(),
            Variant::Arcade => Tuning::arcade(),
        }
    }
}

impl FromStr for Variant {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "arcade" => Ok(Variant::Arcade),
            _ => Err(TuningError::UnknownVariant(s.to_string())),
        }
    }
}

/// Errors raised while loading or validating a tuning
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
    UnknownVariant(String),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "failed to read tuning: {e}"),
            TuningError::Parse(e) => write!(f, "failed to parse tuning: {e}"),
            TuningError::Invalid(msg) => write!(f, "invalid tuning: {msg}"),
            TuningError::UnknownVariant(name) => {
                write!(f, "unknown variant '{name}' (expected classic or arcade)")
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// A bumper placement on the table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BumperSpec {
    pub center: Vec2,
    pub radius: f32,
    pub points: u64,
}

impl BumperSpec {
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius: 30.0,
            points: 100,
        }
    }
}

/// Complete table tuning
///
/// Velocities and accelerations are per tick at [`TICK_RATE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub width: f32,
    pub height: f32,
    /// Gap left between ball and shape after a contact is resolved
    pub separation: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub gravity: f32,
    /// Velocity kept after a wall bounce (0-1)
    pub wall_damping: f32,
    pub spawn_pos: Vec2,
    /// Horizontal velocity range for a freshly spawned ball
    pub spawn_vx: (f32, f32),
    pub spawn_vy: f32,

    // === Launch command ===
    /// The ball can only be launched while above this line
    pub launch_zone_y: f32,
    pub launch_vx: (f32, f32),
    pub launch_vy: f32,

    // === Flippers ===
    pub left_pivot: Vec2,
    pub right_pivot: Vec2,
    pub flipper_length: f32,
    pub flipper_width: f32,
    /// Left flipper angles in degrees; the right flipper is mirrored
    pub flipper_rest_deg: f32,
    pub flipper_active_deg: f32,
    pub flipper_policy: FlipperUpdatePolicy,
    pub flipper_kick: f32,
    pub kick_direction: KickDirection,

    // === Bumpers ===
    pub bumpers: Vec<BumperSpec>,
    pub bumper_kick: f32,
    pub hit_animation_ticks: u32,

    // === Session ===
    pub life_policy: LifePolicy,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::classic()
    }
}

fn default_bumpers() -> Vec<BumperSpec> {
    vec![
        BumperSpec::new(200.0, 300.0),
        BumperSpec::new(400.0, 250.0),
        BumperSpec::new(600.0, 300.0),
        BumperSpec::new(300.0, 450.0),
        BumperSpec::new(500.0, 450.0),
    ]
}

impl Tuning {
    /// Stepped flippers, kick along the contact normal, three lives
    ///
    /// Flipper angles use the shared convention of both presets (rest +30°,
    /// active -30°, y down) rather than the 0°/45° pair this layout first
    /// shipped with.
    pub fn classic() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            separation: SEPARATION,

            ball_radius: 8.0,
            gravity: 0.3,
            wall_damping: 0.8,
            spawn_pos: Vec2::new(PLAYFIELD_WIDTH / 2.0, 100.0),
            spawn_vx: (-3.0, 3.0),
            spawn_vy: 0.0,

            launch_zone_y: 150.0,
            launch_vx: (-3.0, 3.0),
            launch_vy: 8.0,

            left_pivot: Vec2::new(PLAYFIELD_WIDTH / 2.0 - 120.0, PLAYFIELD_HEIGHT - 100.0),
            right_pivot: Vec2::new(PLAYFIELD_WIDTH / 2.0 + 120.0, PLAYFIELD_HEIGHT - 100.0),
            flipper_length: 80.0,
            flipper_width: 10.0,
            flipper_rest_deg: 30.0,
            flipper_active_deg: -30.0,
            flipper_policy: FlipperUpdatePolicy::Stepped { step_deg: 15.0 },
            flipper_kick: 15.0,
            kick_direction: KickDirection::AlongNormal,

            bumpers: default_bumpers(),
            bumper_kick: 8.0,
            hit_animation_ticks: 10,

            life_policy: LifePolicy::Lives { count: 3 },
        }
    }

    /// Smoothed flippers, perpendicular launch kick, a single ball
    ///
    /// Keeps the Classic flipper angles; the old -30°/-60° pair is not used.
    pub fn arcade() -> Self {
        Self {
            gravity: 0.5,
            spawn_vx: (-2.0, 2.0),
            spawn_vy: 5.0,

            left_pivot: Vec2::new(250.0, PLAYFIELD_HEIGHT - 120.0),
            right_pivot: Vec2::new(550.0, PLAYFIELD_HEIGHT - 120.0),
            flipper_width: 8.0,
            flipper_policy: FlipperUpdatePolicy::Smoothed {
                factor: 0.3,
                snap_deg: 2.0,
            },
            kick_direction: KickDirection::Perpendicular,

            bumper_kick: 5.0,

            life_policy: LifePolicy::SuddenDeath,
            ..Self::classic()
        }
    }

    /// Parse and validate a JSON tuning; missing fields fall back to Classic
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check the constraints the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(msg: impl Into<String>) -> Result<(), TuningError> {
            Err(TuningError::Invalid(msg.into()))
        }

        if !(self.width > 0.0 && self.height > 0.0) {
            return invalid("playfield dimensions must be positive");
        }
        if !(self.ball_radius > 0.0) || 2.0 * self.ball_radius >= self.width {
            return invalid("ball radius must be positive and fit the playfield");
        }
        if !(self.wall_damping > 0.0 && self.wall_damping < 1.0) {
            return invalid("wall damping must be in (0, 1)");
        }
        if !(self.gravity >= 0.0) {
            return invalid("gravity must not be negative");
        }
        if !(self.separation >= 0.0) {
            return invalid("separation must not be negative");
        }
        for (min, max) in [self.spawn_vx, self.launch_vx] {
            if !(min <= max) || !(max - min).is_finite() {
                return invalid("velocity ranges must be finite with min <= max");
            }
        }
        let spawn = self.spawn_pos;
        if !(self.ball_radius..=self.width - self.ball_radius).contains(&spawn.x)
            || !(self.ball_radius..self.height).contains(&spawn.y)
        {
            return invalid("spawn position must lie inside the playfield");
        }
        if !(self.flipper_length > 0.0 && self.flipper_width >= 0.0) {
            return invalid("flipper length must be positive and width not negative");
        }
        if self.flipper_rest_deg == self.flipper_active_deg {
            return invalid("flipper rest and active angles must differ");
        }
        match self.flipper_policy {
            FlipperUpdatePolicy::Stepped { step_deg } if !(step_deg > 0.0) => {
                return invalid("flipper step must be positive");
            }
            FlipperUpdatePolicy::Smoothed { factor, snap_deg }
                if !(factor > 0.0 && factor <= 1.0) || !(snap_deg > 0.0) =>
            {
                return invalid("flipper smoothing needs factor in (0, 1] and a positive snap");
            }
            _ => {}
        }
        if self.bumpers.iter().any(|b| !(b.radius > 0.0)) {
            return invalid("bumper radius must be positive");
        }
        if let LifePolicy::Lives { count: 0 } = self.life_policy {
            return invalid("lives policy needs at least one life");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        assert!(Tuning::classic().validate().is_ok());
        assert!(Tuning::arcade().validate().is_ok());
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("Classic".parse::<Variant>().unwrap(), Variant::Classic);
        assert_eq!("ARCADE".parse::<Variant>().unwrap(), Variant::Arcade);
        assert!(matches!(
            "wizard".parse::<Variant>(),
            Err(TuningError::UnknownVariant(_))
        ));
    }

    #[test]
    fn test_json_round_trip_of_preset() {
        let arcade = Tuning::arcade();
        let json = serde_json::to_string(&arcade).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), arcade);
    }

    #[test]
    fn test_partial_json_falls_back_to_classic() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.bumpers.len(), 5);
        assert_eq!(tuning.life_policy, LifePolicy::Lives { count: 3 });
    }

    #[test]
    fn test_validate_rejects_bad_damping() {
        for damping in [0.0, 1.0, 1.5, -0.2] {
            let tuning = Tuning {
                wall_damping: damping,
                ..Tuning::classic()
            };
            assert!(matches!(tuning.validate(), Err(TuningError::Invalid(_))));
        }
    }

    #[test]
    fn test_validate_rejects_bad_smoothing() {
        let tuning = Tuning {
            flipper_policy: FlipperUpdatePolicy::Smoothed {
                factor: 1.5,
                snap_deg: 2.0,
            },
            ..Tuning::classic()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_radius() {
        let tuning = Tuning {
            ball_radius: 0.0,
            ..Tuning::classic()
        };
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::classic();
        tuning.bumpers[2].radius = -1.0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unbounded_velocity_range() {
        let result = Tuning::from_json(r#"{ "spawn_vx": [-3e38, 3e38] }"#);
        assert!(matches!(result, Err(TuningError::Invalid(_))));

        let tuning = Tuning {
            launch_vx: (f32::NEG_INFINITY, 1.0),
            ..Tuning::classic()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_spawn_outside_playfield() {
        for pos in [
            Vec2::new(400.0, 950.0),
            Vec2::new(400.0, -20.0),
            Vec2::new(2.0, 100.0),
            Vec2::new(810.0, 100.0),
        ] {
            let tuning = Tuning {
                spawn_pos: pos,
                ..Tuning::classic()
            };
            assert!(matches!(tuning.validate(), Err(TuningError::Invalid(_))));
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            Tuning::load("/definitely/not/here.json"),
            Err(TuningError::Io(_))
        ));
    }
}
