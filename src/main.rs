mod error;

use std::io::{self, Write};
use std::process;

use card::{Mode, PROFILE, RenderOptions};
use colored::Colorize;
use error::{Result, ResultExt};
use is_terminal::IsTerminal;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log filter used when RUST_LOG is not set
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_tracing() {
    // stdout carries the card, diagnostics go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time(),
        )
        .init();
}

fn run() -> Result<()> {
    let mode = Mode::from_args(std::env::args_os().skip(1));

    let stdout = io::stdout();
    let options = RenderOptions {
        hyperlinks: stdout.is_terminal(),
    };
    debug!(%mode, hyperlinks = options.hyperlinks, "resolved output mode");

    let output = card::render(&PROFILE, mode, options)?;

    let mut handle = stdout.lock();
    handle
        .write_all(output.as_bytes())
        .and_then(|()| handle.flush())
        .with_context(|| "Failed to write to standard output")?;

    Ok(())
}

fn main() {
    init_tracing();

    if let Err(err) = run() {
        if err.is_broken_pipe() {
            return;
        }
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
