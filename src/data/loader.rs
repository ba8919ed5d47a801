use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::data::parser::{self, ParsedLine};
use crate::error::LoadError;

/// Values parsed from an input file, plus the lines that failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    /// Valid values in file order.
    pub values: Vec<T>,
    /// Trimmed text of every invalid line, in file order.
    pub errors: Vec<String>,
}

impl<T> Loaded<T> {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Load every non-blank line of `path` as a finite `f64`.
/// Invalid lines are reported on `diagnostics` as they are found.
pub fn load_numbers<W: Write>(path: &Path, diagnostics: &mut W) -> Result<Loaded<f64>, LoadError> {
    load_with(path, diagnostics, Some)
}

/// Load every non-blank line of `path` truncated toward zero to an `i128`.
pub fn load_integers<W: Write>(path: &Path, diagnostics: &mut W) -> Result<Loaded<i128>, LoadError> {
    load_with(path, diagnostics, parser::truncate_to_integer)
}

fn load_with<T, W, F>(path: &Path, diagnostics: &mut W, convert: F) -> Result<Loaded<T>, LoadError>
where
    W: Write,
    F: Fn(f64) -> Option<T>,
{
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    let mut errors = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let invalid = match parser::parse_line(&line) {
            ParsedLine::Blank => continue,
            ParsedLine::Number(v) => match convert(v) {
                Some(value) => {
                    values.push(value);
                    continue;
                }
                None => line.trim().to_string(),
            },
            ParsedLine::Invalid(text) => text,
        };

        tracing::debug!("Rejected line {:?} in {:?}", invalid, path);
        // Diagnostics are best-effort; a closed stdout must not abort loading.
        let _ = writeln!(diagnostics, "Error: Invalid data found: '{invalid}'");
        errors.push(invalid);
    }

    tracing::info!(
        "Loaded {} values ({} invalid lines) from {:?}",
        values.len(),
        errors.len(),
        path
    );

    Ok(Loaded { values, errors })
}
