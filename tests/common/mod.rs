//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use std::process::{Command, Output, Stdio};

use primegame_core::{GameState, Session, SessionError, SessionOptions};
use primegame_types::{GameSettings, Stats};

/// A number source that replays `values`, then yields 0 forever.
pub fn scripted(values: &[u64]) -> impl FnMut(u64) -> u64 + use<> {
    let mut values = values.to_vec().into_iter();
    move |_max| values.next().unwrap_or(0)
}

/// Fresh default game whose draws come from `values`.
pub fn scripted_game(values: &[u64]) -> GameState<impl FnMut(u64) -> u64 + use<>> {
    GameState::with_source(GameSettings::default(), scripted(values))
}

/// Run a full session over in-memory input and return the result and transcript.
pub fn play(numbers: &[u64], input: &str) -> (Result<Stats, SessionError>, String) {
    play_with(numbers, input, SessionOptions::default())
}

pub fn play_with(
    numbers: &[u64],
    input: &str,
    options: SessionOptions,
) -> (Result<Stats, SessionError>, String) {
    let mut out = Vec::new();
    let result = Session::new(
        Cursor::new(input.to_string()),
        &mut out,
        scripted_game(numbers),
        options,
    )
    .run();
    (result, String::from_utf8(out).expect("transcript is UTF-8"))
}

/// Run the `primegame` binary with `home` as its home directory and `stdin` piped in.
pub fn run_binary(home: &Path, stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_primegame"))
        .env("HOME", home)
        .env("PRIMEGAME_CONFIG", home.join(".primegame").join("config.toml"))
        .env_remove("RUST_LOG")
        .current_dir(home)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn primegame");

    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        // The game may exit before reading everything; a broken pipe is fine.
        let _ = pipe.write_all(stdin.as_bytes());
    }

    child.wait_with_output().expect("wait for primegame")
}

/// Write `content` as the config file under `home`.
pub fn write_config(home: &Path, content: &str) {
    let dir = home.join(".primegame");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(dir.join("config.toml"), content).expect("write config");
}
