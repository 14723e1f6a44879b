//! Fake Terminal Diff
//!
//! Compares two fake terminal snapshots saved as JSON and prints the
//! differences.
//!
//! # Usage
//!
//! ```bash
//! faketerm-diff --want expected.json --got actual.json
//! ```
//!
//! Exits with 0 when the terminals are equal, 1 when they differ and 2 when
//! a snapshot cannot be loaded.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use faketerm::{diff, FakeTerminal};

#[derive(Parser, Debug)]
#[command(name = "faketerm-diff")]
#[command(version)]
#[command(about = "Show differences between two fake terminal snapshots", long_about = None)]
struct CliArgs {
    /// Snapshot of the expected terminal
    #[arg(short, long, value_name = "FILE")]
    want: PathBuf,

    /// Snapshot of the actual terminal
    #[arg(short, long, value_name = "FILE")]
    got: PathBuf,

    /// Only report through the exit status
    #[arg(short, long)]
    quiet: bool,
}

fn load(path: &Path) -> Option<FakeTerminal> {
    match FakeTerminal::load(path) {
        Ok(term) => Some(term),
        Err(e) => {
            log::error!("Failed to load {}: {}", path.display(), e);
            eprintln!("Failed to load {}: {}", path.display(), e);
            None
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();

    let (Some(want), Some(got)) = (load(&args.want), load(&args.got)) else {
        return ExitCode::from(2);
    };

    let report = diff(&want, &got);
    if report.is_empty() {
        log::debug!("{} and {} are equal", args.want.display(), args.got.display());
        return ExitCode::SUCCESS;
    }

    if !args.quiet {
        print!("{}", report);
    }
    ExitCode::from(1)
}
