//! Binary entry point for the interactive payroll CLI.
//!
//! Runs a [`Session`] over the process's stdin and stdout. Diagnostics go
//! to stderr via `tracing` so they never interleave with the menu text;
//! `RUST_LOG` overrides the default `warn` filter.

use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use payroll_engine::cli::Session;

/// Initialises the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; the fallback keeps everything below `warn`
/// quiet so an interactive session stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("payroll_engine=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
