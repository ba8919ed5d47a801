//! Load → transform → report pipelines for the two programs.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::cli::Args;
use crate::data::loader;
use crate::error::LoadError;
use crate::processing::conversion::Conversion;
use crate::processing::statistics::Statistics;
use crate::report::{self, Report, CONVERSION_RESULTS_FILE, STATISTICS_RESULTS_FILE};

/// Compute descriptive statistics for `args.input`.
/// Console output (diagnostics and report) goes to `out`.
pub fn run_statistics<W: Write>(args: &Args, out: &mut W) -> Result<(), LoadError> {
    let start = Instant::now();
    let loaded = loader::load_numbers(&args.input, out)?;

    if loaded.is_empty() {
        tracing::warn!("No valid numbers in {:?}", args.input);
        print_report(&report::no_data_report(start.elapsed()), out);
        return Ok(());
    }

    let stats = Statistics::compute(&loaded.values);
    let report = report::statistics_report(&args.input, &stats, &loaded.errors, start.elapsed());
    publish(&report, &args.output_or(STATISTICS_RESULTS_FILE), out);
    Ok(())
}

/// Convert every number in `args.input` to binary and hexadecimal.
pub fn run_conversion<W: Write>(args: &Args, out: &mut W) -> Result<(), LoadError> {
    let start = Instant::now();
    let loaded = loader::load_integers(&args.input, out)?;

    if loaded.is_empty() {
        tracing::warn!("No valid numbers in {:?}", args.input);
        print_report(&report::no_data_report(start.elapsed()), out);
        return Ok(());
    }

    let rows: Vec<Conversion> = loaded.values.iter().copied().map(Conversion::of).collect();
    let report = report::conversion_report(&args.input, &rows, start.elapsed());
    publish(&report, &args.output_or(CONVERSION_RESULTS_FILE), out);
    Ok(())
}

fn print_report<W: Write>(report: &Report, out: &mut W) {
    if let Err(e) = report.write_to(out) {
        tracing::error!("Failed to write report to console: {e}");
    }
}

/// Print the report, then append it to the results file. A failed append
/// is reported but does not fail the run.
fn publish<W: Write>(report: &Report, results_file: &Path, out: &mut W) {
    print_report(report, out);
    if let Err(e) = report.append_to(results_file) {
        tracing::warn!("Could not append results to {:?}: {e}", results_file);
        let _ = writeln!(out, "Error writing to file: {e}");
    }
}
