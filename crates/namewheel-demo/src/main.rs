#![forbid(unsafe_code)]

//! Terminal demo for the namewheel engine.
//!
//! Plays the collaborator roles the engine leaves external: a driving loop on
//! a real monotonic clock, a line-based renderer, and a winner prompt reduced
//! to a flag. Useful for watching a schedule behave across several spins.

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use thiserror::Error;

use namewheel_core::{PickerSession, RevealStrategy, SessionEvent};

const SAMPLE_NAMES: &[&str] = &["Ali", "Beatriz", "Charles", "Fatima", "Gabriel", "Hanna"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Flickering highlight that locks onto the scheduled winner.
    Highlight,
    /// Spinning wheel decaying under friction; winner read off the angle.
    Wheel,
}

impl From<StrategyArg> for RevealStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Highlight => RevealStrategy::Highlight,
            StrategyArg::Wheel => RevealStrategy::Wheel,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "namewheel-demo", about = "Spin the namewheel in a terminal")]
struct Args {
    /// Reveal animation to use.
    #[arg(long, value_enum, default_value_t = StrategyArg::Highlight)]
    strategy: StrategyArg,

    /// Newline-separated names file; defaults to a built-in sample list.
    #[arg(long)]
    names: Option<PathBuf>,

    /// JSON spin schedule (`spin{N}Names` keys).
    #[arg(long)]
    schedule: Option<PathBuf>,

    /// Seed for deterministic runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of consecutive spins to run.
    #[arg(long, default_value_t = 1)]
    spins: u32,

    /// Remove each winner from the list after its reveal.
    #[arg(long)]
    remove_winner: bool,
}

#[derive(Debug, Error)]
enum DemoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("names file contains no usable names")]
    NoNames,
    #[error(transparent)]
    Schedule(#[from] namewheel_core::ScheduleError),
    #[error(transparent)]
    Pick(#[from] namewheel_core::PickError),
}

fn read_file(path: &PathBuf) -> Result<String, DemoError> {
    fs::read_to_string(path).map_err(|source| DemoError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn build_session(args: &Args) -> Result<PickerSession, DemoError> {
    let strategy = args.strategy.into();
    let mut session = match args.seed {
        Some(seed) => PickerSession::with_seed(strategy, seed),
        None => PickerSession::new(strategy),
    };

    let names: Vec<String> = match &args.names {
        Some(path) => namewheel_core::EntryList::parse_lines(&read_file(path)?),
        None => SAMPLE_NAMES.iter().map(|&s| s.to_owned()).collect(),
    };
    if names.is_empty() {
        return Err(DemoError::NoNames);
    }
    session.replace_entries(names);

    if let Some(path) = &args.schedule {
        session.load_schedule_json(&read_file(path)?)?;
    }
    Ok(session)
}

/// Drive one reveal to completion against the wall clock, printing frames.
fn run_spin(session: &mut PickerSession) -> Result<String, DemoError> {
    session.start_pick()?;
    let mut last_frame = Instant::now();
    loop {
        if let Some(delay) = session.next_delay() {
            thread::sleep(delay);
        }
        let now = Instant::now();
        let event = session.tick(now - last_frame);
        last_frame = now;

        render_frame(session);
        match event {
            Some(SessionEvent::Revealed { winner }) => return Ok(winner),
            None if !session.is_animating() => return Ok(String::from("(no winner)")),
            None => {}
        }
    }
}

fn render_frame(session: &PickerSession) {
    if let Some(index) = session.current_highlight() {
        let name = session.entries().get(index).unwrap_or("?");
        let hex = session
            .colors()
            .get(index)
            .map(|c| c.hex())
            .unwrap_or_default();
        println!("  [{index:>2}] {name} {hex}");
    } else if let Some(angle) = session.current_angle() {
        println!("  angle {angle:>8.3} rad");
    }
}

fn run(args: &Args) -> Result<(), DemoError> {
    tracing::debug!(?args, "building session");
    let mut session = build_session(args)?;
    println!(
        "{} entries, strategy {:?}",
        session.entry_count(),
        session.strategy()
    );

    for _ in 0..args.spins {
        if session.entries().is_empty() {
            break;
        }
        let winner = run_spin(&mut session)?;
        println!("spin {}: winner {}", session.spin_count(), winner);
        if args.remove_winner {
            session.remove_winner(&winner);
            println!(
                "  removed; {} left, {} results",
                session.entry_count(),
                session.results_count()
            );
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
