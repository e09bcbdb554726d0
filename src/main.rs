use std::process::ExitCode;

fn main() -> ExitCode {
    match spend_forecast::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        // The JSON error document is already on stdout and the error is logged.
        Err(err) => ExitCode::from(err.exit_code()),
    }
}
