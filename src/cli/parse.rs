use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::constants::DEFAULT_PERIOD_SECS;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "termwatch",
    version,
    about = "Full-screen command watching and duration formatting"
)]
pub struct Cli {
    /// Append logs here instead of stderr (filter via `TERMWATCH_LOG`)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Re-run a shell command and redraw its output full-screen
    Watch(WatchArgs),
    /// Format seconds as MM:SS / HH:MM:SS[.mmm]
    Duration(DurationArgs),
    /// Run a shell command and print how long it took
    Time(TimeArgs),
    /// Print example invocations
    Examples,
}

/// `termwatch watch …`
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Seconds between refreshes (fractions allowed)
    #[arg(short = 'n', long, default_value_t = DEFAULT_PERIOD_SECS, allow_negative_numbers = true)]
    pub interval: f64,

    /// Exit after this many frames
    #[arg(short, long)]
    pub count: Option<u64>,

    /// Command to run; words are joined with spaces and passed to the shell
    #[arg(required = true, trailing_var_arg = true)]
    pub command: Vec<String>,
}

/// `termwatch duration …`
#[derive(Args, Debug)]
pub struct DurationArgs {
    /// Seconds to format; `-` reads one value per line from stdin.
    /// Whole numbers print without milliseconds, decimals with them
    #[arg(value_name = "SECONDS", required = true, allow_negative_numbers = true)]
    pub seconds: Vec<String>,
}

/// `termwatch time …`
#[derive(Args, Debug)]
pub struct TimeArgs {
    /// Command to run
    #[arg(required = true, trailing_var_arg = true)]
    pub command: Vec<String>,
}
