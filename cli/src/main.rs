//! Prime or not a Prime - binary entry point.
//!
//! ```text
//! main() -> init_tracing() -> load_settings() -> Session::run() -> ExitCode
//!                                                     |
//!                                                     v
//!                                   quit: 0 | closed/broken terminal: 1
//! ```
//!
//! stdout carries the game transcript, so logs only ever go to a file.

use anyhow::{Context, Result};
use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::Path,
    process::ExitCode,
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use primegame_config::{PrimeGameConfig, log_file_candidates};
use primegame_core::{GameState, Session, SessionOptions};
use primegame_types::{GameSettings, Stats};

/// Route tracing into the first log file that opens. The transcript owns
/// stdout, so with no writable file the subscriber only filters.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let mut skipped = Vec::new();
    let opened = log_file_candidates()
        .into_iter()
        .find_map(|path| match open_append(&path) {
            Ok(file) => Some((path, file)),
            Err(err) => {
                skipped.push(format!("{}: {err}", path.display()));
                None
            }
        });

    let Some((log_path, file)) = opened else {
        tracing_subscriber::registry().with(env_filter).init();
        return;
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .with(env_filter)
        .init();

    tracing::info!(path = %log_path.display(), "Logging initialized");
    for entry in skipped {
        tracing::warn!("Skipped log file {entry}");
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn load_settings() -> (GameSettings, SessionOptions) {
    match PrimeGameConfig::load() {
        Ok(Some(config)) => (
            config.game_settings(),
            SessionOptions {
                show_factors: config.show_factors(),
            },
        ),
        Ok(None) => (GameSettings::default(), SessionOptions::default()),
        Err(err) => {
            eprintln!("{err}");
            eprintln!("Continuing with default settings.");
            (GameSettings::default(), SessionOptions::default())
        }
    }
}

fn run() -> Result<Stats> {
    let (settings, options) = load_settings();
    let state = GameState::new(settings);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), state, options)
        .run()
        .context("game session failed")
}

fn report_failure(out: &mut impl Write, err: &anyhow::Error) {
    let _ = writeln!(out, "Whoops! Looks like something went wrong!");
    let _ = writeln!(out, "{err:#}");
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(stats) => {
            tracing::info!(%stats, "Exiting");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err:#}");
            report_failure(&mut io::stderr(), &err);
            ExitCode::FAILURE
        }
    }
}
