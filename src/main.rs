use std::process::ExitCode;

fn main() -> ExitCode {
    match termwatch::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("termwatch: {e}");
            ExitCode::FAILURE
        }
    }
}
