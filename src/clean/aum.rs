//! AUM text parsing.
//!
//! Survey AUM arrives as a plain number, as text with a magnitude suffix
//! (`"$250B"`, `"375M"`), or not at all. Everything is mapped onto raw
//! currency units.
//!
//! Suffix detection is case-sensitive: only uppercase `B` and `M` are
//! recognized, and any other text normalizes to zero.

use crate::domain::RawAum;
use crate::error::AppError;

const BILLIONS_MARKER: char = 'B';
const MILLIONS_MARKER: char = 'M';
const CURRENCY_SYMBOL: char = '$';

/// Convert a raw AUM value into raw currency units.
///
/// - `Missing` and unrecognized text map to `0.0`.
/// - `Numeric` passes through unchanged.
/// - A recognized suffix with a malformed number is an error, as is any
///   result that is negative or non-finite.
pub fn normalize_aum(value: &RawAum) -> Result<f64, AppError> {
    let aum = match value {
        RawAum::Missing => return Ok(0.0),
        RawAum::Numeric(v) => *v,
        RawAum::Text(text) => parse_aum_text(text)?,
    };

    if !aum.is_finite() || aum < 0.0 {
        return Err(AppError::runtime(format!(
            "AUM value '{value}' does not normalize to a non-negative finite amount."
        )));
    }
    Ok(aum)
}

/// Whether a raw value needs cleaning before it can be used as a number.
pub fn needs_normalization(value: &RawAum) -> bool {
    matches!(value, RawAum::Missing | RawAum::Text(_))
}

fn parse_aum_text(text: &str) -> Result<f64, AppError> {
    let compact: String = text
        .chars()
        .filter(|c| *c != CURRENCY_SYMBOL && !c.is_whitespace())
        .collect();

    if compact.contains(BILLIONS_MARKER) {
        parse_scaled(text, &compact.replace(BILLIONS_MARKER, ""), 1e9)
    } else if compact.contains(MILLIONS_MARKER) {
        parse_scaled(text, &compact.replace(MILLIONS_MARKER, ""), 1e6)
    } else {
        Ok(0.0)
    }
}

fn parse_scaled(original: &str, number: &str, scale: f64) -> Result<f64, AppError> {
    let value: f64 = number
        .parse()
        .map_err(|e| AppError::runtime(format!("Unparseable AUM value '{original}': {e}")))?;
    Ok(value * scale)
}
