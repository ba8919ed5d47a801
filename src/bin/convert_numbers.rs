//! Convert every number in a file to binary and hexadecimal.

use std::io::{self, Write};
use std::process::ExitCode;

use numtools::app;
use numtools::cli::{self, Invocation};

const PROGRAM: &str = "convert_numbers";

fn main() -> ExitCode {
    cli::init_tracing();

    let args = match cli::parse_args(PROGRAM) {
        Invocation::Run(args) => args,
        Invocation::Exit(code) => return ExitCode::from(code),
    };

    let mut stdout = io::stdout().lock();
    match app::run_conversion(&args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{PROGRAM} failed: {:?}", e);
            let _ = writeln!(stdout, "{e}");
            ExitCode::from(cli::EXIT_FAILURE)
        }
    }
}
