use std::io::{self, BufRead, Write};

use tracing::info;

use crate::{
    core::{
        command::{CommandSampler, shell},
        config::WatchConfig,
        duration::Seconds,
        error::WatchError,
        timing::timed_format,
    },
    term::{Interrupt, Tty},
    watch::{StopReason, Watch},
};

use super::parse::{DurationArgs, TimeArgs, WatchArgs};

pub fn watch(a: &WatchArgs) -> Result<(), WatchError> {
    let cfg = WatchConfig::builder()
        .period_secs(a.interval)
        .max_frames_opt(a.count)
        .build()?;
    let sampler = CommandSampler::from_words(&a.command);
    info!(cmd = sampler.command(), "watch");

    let interrupt = Interrupt::install()?;
    let summary = Watch::new(cfg, sampler).run(&mut Tty::new(), &interrupt)?;
    if summary.reason == StopReason::Interrupted {
        info!(frames = summary.frames, "interrupted");
    }
    Ok(())
}

/// Format every argument, or every stdin line for `-`.
pub fn duration(a: &DurationArgs) -> Result<(), WatchError> {
    let mut out = io::stdout().lock();
    for arg in &a.seconds {
        if arg == "-" {
            for line in io::stdin().lock().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                writeln!(out, "{}", line.parse::<Seconds>()?)?;
            }
        } else {
            writeln!(out, "{}", arg.parse::<Seconds>()?)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Run the command, then print its wall-clock time even if it failed.
pub fn time(a: &TimeArgs) -> Result<(), WatchError> {
    let cmd = a.command.join(" ");
    let (label, status) = timed_format(|| shell(&cmd));
    println!("{label}");
    status.map(|_| ())
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "termwatch";
    println!(
        "
Example invocations
-------------------
• Watch a command      : {bin} watch date
• Faster refresh       : {bin} watch -n 0.5 'ls -la /tmp'
• Stop after 10 frames : {bin} watch -n 1 -c 10 uptime
• Format durations     : {bin} duration 100 10000 12345.6789 -1
• Durations from stdin : seq 0 600 3600 | {bin} duration -
• Time a command       : {bin} time sleep 1.5
• Log to a file        : TERMWATCH_LOG=debug {bin} --log-file tw.log watch date
"
    );
}
