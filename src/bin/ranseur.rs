//! Ranseur CLI binary.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use ranseur::cli::args::RanseurArgs;
use ranseur::cli::commands::execute_command;
use ranseur::error::RanseurError;

/// Log level for a `-q`/`-v` verbosity count; `RUST_LOG` still overrides it.
fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logger(verbosity: u8) {
    Builder::new()
        .filter_level(log_level(verbosity))
        .parse_default_env()
        .format(|buf, record| {
            let target = record.target().strip_prefix("ranseur::").unwrap_or(record.target());
            writeln!(buf, "{:<5} {target}: {}", record.level(), record.args())
        })
        .init();
}

fn main() -> ExitCode {
    let args = RanseurArgs::parse();
    init_logger(args.verbosity());

    match execute_command(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ranseur: {e}");
            // Usage errors exit with 2, as clap does.
            match e {
                RanseurError::InvalidInput(_) | RanseurError::Config(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
