/// Largest magnitude bound accepted when truncating to `i128` (2^127).
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Classification of one raw input line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Blank,
    Number(f64),
    /// Trimmed text of a line that is not a finite decimal literal.
    Invalid(String),
}

/// Trim a raw line and classify it.
/// `nan` and `inf` parse as floats but are rejected here since no
/// statistic or conversion is defined for them.
pub fn parse_line(raw: &str) -> ParsedLine {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedLine::Blank;
    }
    match parse_number(trimmed) {
        Some(v) => ParsedLine::Number(v),
        None => ParsedLine::Invalid(trimmed.to_string()),
    }
}

/// Parse an already-trimmed literal as a finite `f64`.
pub fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an already-trimmed literal and truncate it toward zero.
/// Values whose integer part does not fit an `i128` are rejected.
pub fn parse_integer(s: &str) -> Option<i128> {
    parse_number(s).and_then(truncate_to_integer)
}

/// Truncate a finite value toward zero.
pub fn truncate_to_integer(value: f64) -> Option<i128> {
    let t = value.trunc();
    if t >= -I128_BOUND && t < I128_BOUND {
        Some(t as i128)
    } else {
        None
    }
}
