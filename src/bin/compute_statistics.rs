//! Compute descriptive statistics (mean, median, mode, variance, standard deviation)
//! for a file with one number per line.

use std::io::{self, Write};
use std::process::ExitCode;

use numtools::app;
use numtools::cli::{self, Invocation};

const PROGRAM: &str = "compute_statistics";

fn main() -> ExitCode {
    cli::init_tracing();

    let args = match cli::parse_args(PROGRAM) {
        Invocation::Run(args) => args,
        Invocation::Exit(code) => return ExitCode::from(code),
    };

    let mut stdout = io::stdout().lock();
    match app::run_statistics(&args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{PROGRAM} failed: {:?}", e);
            let _ = writeln!(stdout, "{e}");
            ExitCode::from(cli::EXIT_FAILURE)
        }
    }
}
