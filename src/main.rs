// src/main.rs

use std::process::ExitCode;

use frc_schedule::{cli, logging, run};

fn main() -> ExitCode {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("frc-schedule: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("frc-schedule: {err:#}");
            ExitCode::FAILURE
        }
    }
}
