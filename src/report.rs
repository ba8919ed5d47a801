//! Fixed-layout text reports, written to the console and appended to a
//! results file.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use crate::processing::conversion::Conversion;
use crate::processing::statistics::Statistics;

pub const STATISTICS_RESULTS_FILE: &str = "StatisticsResults.txt";
pub const CONVERSION_RESULTS_FILE: &str = "ConvertionResults.txt";

const RULE_WIDTH: usize = 52;

/// An immutable sequence of report lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new(lines: Vec<String>) -> Self {
        Report { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write every line, newline-terminated.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }

    /// Append the report to `path`, creating the file if needed.
    /// Existing content is never truncated.
    pub fn append_to(&self, path: &Path) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        self.write_to(&mut file)?;
        tracing::info!("Appended {} report lines to {:?}", self.lines.len(), path);
        Ok(())
    }
}

pub fn execution_time_line(elapsed: Duration) -> String {
    format!("Execution Time: {:.4} seconds", elapsed.as_secs_f64())
}

/// Short report used when the input had no valid numbers.
pub fn no_data_report(elapsed: Duration) -> Report {
    Report::new(vec![
        "No valid numbers found in the file.".to_string(),
        execution_time_line(elapsed),
    ])
}

pub fn statistics_report(
    source: &Path,
    stats: &Statistics,
    errors: &[String],
    elapsed: Duration,
) -> Report {
    Report::new(vec![
        "--- Statistics Results ---".to_string(),
        format!("File: {}", source.display()),
        format!("Count: {}", stats.count),
        format!("Mean: {:.4}", stats.mean),
        format!("Median: {:.4}", stats.median),
        format!("Mode: {}", stats.mode),
        format!("Standard Deviation: {:.4}", stats.std_dev),
        format!("Variance: {:.4}", stats.variance),
        format!("Errors: {}", format_error_list(errors)),
        execution_time_line(elapsed),
    ])
}

pub fn conversion_report(source: &Path, rows: &[Conversion], elapsed: Duration) -> Report {
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines = Vec::with_capacity(rows.len() + 6);

    lines.push("--- Conversion Results ---".to_string());
    lines.push(format!("File: {}", source.display()));
    lines.push(format!("{:<15} {:<20} {:<15}", "Decimal", "Binary", "Hexadecimal"));
    lines.push(rule.clone());
    for row in rows {
        lines.push(format!(
            "{:<15} {:<20} {:<15}",
            row.decimal, row.binary, row.hexadecimal
        ));
    }
    lines.push(rule);
    lines.push(execution_time_line(elapsed));

    Report::new(lines)
}

/// Render invalid lines as a bracketed list of quoted strings, e.g. `['foo', 'x']`.
pub fn format_error_list(errors: &[String]) -> String {
    let quoted: Vec<String> = errors.iter().map(|e| quote(e)).collect();
    format!("[{}]", quoted.join(", "))
}

// Single quotes unless the text itself holds a single quote and no double quote.
fn quote(text: &str) -> String {
    let delim = if text.contains('\'') && !text.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(delim);
    for ch in text.chars() {
        if ch == delim || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push(delim);
    out
}
