//! Command-line surface shared by both programs.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Exit status for a missing input argument or an unreadable input file.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(version, about)]
pub struct Args {
    /// Text file with one number per line
    pub input: PathBuf,

    /// Results file to append the report to
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Results file, falling back to the program's well-known name.
    pub fn output_or(&self, default: &str) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(default))
    }
}

/// Outcome of argument parsing.
#[derive(Debug)]
pub enum Invocation {
    Run(Args),
    /// Parsing finished the run (help, version or a usage error) with this status.
    Exit(u8),
}

/// Parse the process arguments. Any argument error prints a one-line
/// usage message on stdout and maps to exit status 1; `--help` and
/// `--version` behave as usual.
pub fn parse_args(program: &str) -> Invocation {
    parse_args_from(program, std::env::args_os())
}

pub fn parse_args_from<I, T>(program: &str, argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Invocation::Run(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Help text goes to stdout with status 0.
            let _ = e.print();
            Invocation::Exit(0)
        }
        Err(e) => {
            tracing::debug!("Argument error: {e}");
            println!("{}", usage(program));
            Invocation::Exit(EXIT_FAILURE)
        }
    }
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} fileWithData.txt")
}

/// Diagnostics go to stderr so stdout carries only report text.
/// Verbosity comes from `RUST_LOG`, defaulting to warnings.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
