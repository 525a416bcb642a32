// SPDX-License-Identifier: MIT
//
// tonekit: generate Material-style swatches, color harmonies, and full
// color schemes from a single base color.
//
// This is the binary that wires the library crates to a command line:
//
//   tonekit-color  → packed ARGB colors, hex parsing, HSL, luminance
//   tonekit-scheme → swatches, harmonies, contrast, scheme generation
//
// Each invocation flows through:
//
//   argv → clap → cli::run → library call → stdout (text / JSON / Rust)
//
// Diagnostics go to stderr through tracing; set TONEKIT_LOG (e.g.
// `TONEKIT_LOG=tonekit_scheme=debug`) to see how roles were derived.

mod cli;
mod emit;
mod error;

use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

const LOG_ENV: &str = "TONEKIT_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = cli::run(cli, &mut out) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("tonekit: {e}");
        process::exit(e.exit_code());
    }
}
