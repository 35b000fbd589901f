//! Pinball entry point
//!
//! Headless presentation loop: drives the table with the autopilot at a
//! steady 60 frames per second and prints the final snapshot as JSON.
//!
//! Usage: pinball [--variant classic|arcade] [--seed N] [--frames N] [--tuning FILE]

use std::process::ExitCode;

use pinball::consts::*;
use pinball::sim::{FixedStep, Table, TableEvent, TickInput, autopilot_input, tick};
use pinball::{Tuning, TuningError, Variant};

/// Command line options
#[derive(Debug)]
struct Options {
    variant: Variant,
    seed: u64,
    frames: u32,
    tuning_path: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            variant: Variant::Classic,
            seed: 0x5eed,
            frames: 60 * 60,
            tuning_path: None,
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        let mut value = |name: &str| args.next().ok_or_else(|| format!("{name} needs a value"));
        match arg.as_str() {
            "--variant" => {
                options.variant = value("--variant")?
                    .parse::<Variant>()
                    .map_err(|e: TuningError| e.to_string())?;
            }
            "--seed" => {
                options.seed = value("--seed")?
                    .parse::<u64>()
                    .map_err(|e| format!("bad seed: {e}"))?;
            }
            "--frames" => {
                options.frames = value("--frames")?
                    .parse::<u32>()
                    .map_err(|e| format!("bad frame count: {e}"))?;
            }
            "--tuning" => options.tuning_path = Some(value("--tuning")?),
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok(options)
}

/// Game instance holding the table and frame pacing
struct Game {
    table: Table,
    clock: FixedStep,
    input: TickInput,
}

impl Game {
    fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            table: Table::new(tuning, seed),
            clock: FixedStep::new(),
            input: TickInput::default(),
        }
    }

    /// Run simulation ticks for one frame
    fn update(&mut self, frame_dt: f32) {
        let substeps = self.clock.advance(frame_dt);
        for _ in 0..substeps {
            self.input = autopilot_input(&self.table);
            tick(&mut self.table, &self.input, SIM_DT);
            self.report_events();
        }
    }

    fn report_events(&self) {
        for event in self.table.events() {
            match event {
                TableEvent::BumperHit { index, points } => {
                    log::debug!("tick {}: bumper {index} +{points}", self.table.time_ticks);
                }
                TableEvent::FlipperContact { side } => {
                    log::trace!("tick {}: {side:?} flipper contact", self.table.time_ticks);
                }
                other => log::info!("tick {}: {other:?}", self.table.time_ticks),
            }
        }
    }
}

fn run(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let tuning = match &options.tuning_path {
        Some(path) => Tuning::load(path)?,
        None => options.variant.tuning(),
    };
    tuning.validate()?;

    log::info!(
        "Pinball ({}) starting, seed {}, {} frames",
        options.variant.as_str(),
        options.seed,
        options.frames
    );

    let mut game = Game::new(tuning, options.seed);
    for _ in 0..options.frames {
        game.update(SIM_DT);
        if game.table.is_game_over() {
            break;
        }
    }

    let snapshot = game.table.snapshot();
    log::info!(
        "Finished after {} ticks: score {}, lives {}, {:?}",
        snapshot.tick,
        snapshot.score,
        snapshot.lives,
        snapshot.phase
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            eprintln!(
                "usage: pinball [--variant classic|arcade] [--seed N] [--frames N] [--tuning FILE]"
            );
            return ExitCode::from(2);
        }
    };

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_defaults() {
        let options = parse_args(args(&[])).unwrap();
        assert_eq!(options.variant, Variant::Classic);
        assert!(options.tuning_path.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let options = parse_args(args(&[
            "--variant", "arcade", "--seed", "7", "--frames", "120", "--tuning", "t.json",
        ]))
        .unwrap();
        assert_eq!(options.variant, Variant::Arcade);
        assert_eq!(options.seed, 7);
        assert_eq!(options.frames, 120);
        assert_eq!(options.tuning_path.as_deref(), Some("t.json"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_args(args(&["--seed"])).is_err());
        assert!(parse_args(args(&["--variant", "wizard"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_game_runs_ticks_per_frame() {
        let mut game = Game::new(Tuning::classic(), 1);
        for _ in 0..10 {
            game.update(SIM_DT);
        }
        assert!(game.table.time_ticks >= 9);
    }
}
