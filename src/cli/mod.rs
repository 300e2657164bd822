mod handlers;
pub mod parse;

use std::{fs::OpenOptions, io, path::Path, sync::Mutex};

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::EnvFilter;

use crate::core::{
    constants::{DEFAULT_LOG_FILTER, LOG_ENV},
    error::WatchError,
};

/// Install the global `tracing` subscriber.
///
/// Logs go to `log_file` when given (the watch screen owns stdout, and
/// stderr shares the same terminal), otherwise to stderr.
pub fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // a second init (tests, embedding) keeps the first subscriber
    let _ = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };
    Ok(())
}

pub fn run() -> Result<(), WatchError> {
    let cli = parse::Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    match cli.cmd {
        parse::Command::Watch(a) => handlers::watch(&a),
        parse::Command::Duration(a) => handlers::duration(&a),
        parse::Command::Time(a) => handlers::time(&a),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
