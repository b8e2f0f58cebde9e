//! Measurement string parsing: decimals, simple fractions, and mixed numbers.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::MeasurementUnit;

/// Why a measurement string was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("measurement is empty")]
    Empty,
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error("zero denominator in {0:?}")]
    ZeroDenominator(String),
    #[error("malformed measurement {0:?}")]
    Malformed(String),
    #[error("unknown unit {0:?}")]
    UnknownUnit(String),
}

/// Parse a measurement typed in `unit`.
///
/// Centimeters accept plain decimals. Inches additionally accept `"3/4"`
/// and `"12 3/8"`. The result stays in `unit`; convert with
/// [`MeasurementUnit::to_cm`].
pub fn parse_measurement(input: &str, unit: MeasurementUnit) -> Result<f64, ParseError> {
    match unit {
        MeasurementUnit::Centimeters => parse_number(non_empty(input)?),
        MeasurementUnit::Inches => parse_fractional_inch(input),
    }
}

/// Parse an inch value: `"12.5"`, `"3/4"`, or `"12 3/8"`.
///
/// A leading minus on a mixed number applies to the whole value, so
/// `"-1 1/2"` is `-1.5`.
pub fn parse_fractional_inch(input: &str) -> Result<f64, ParseError> {
    let s = non_empty(input)?;
    if !s.contains('/') {
        return parse_number(s);
    }

    let parts: Vec<&str> = s.split_whitespace().collect();
    match parts.as_slice() {
        [fraction] => parse_fraction(fraction),
        [whole, fraction] => {
            let whole_value = parse_number(whole)?;
            let fraction_value = parse_fraction(fraction)?;
            if fraction_value < 0.0 {
                return Err(ParseError::Malformed(s.to_string()));
            }
            if whole.starts_with('-') {
                Ok(whole_value - fraction_value)
            } else {
                Ok(whole_value + fraction_value)
            }
        }
        _ => Err(ParseError::Malformed(s.to_string())),
    }
}

fn non_empty(input: &str) -> Result<&str, ParseError> {
    let s = input.trim();
    if s.is_empty() {
        Err(ParseError::Empty)
    } else {
        Ok(s)
    }
}

fn parse_number(s: &str) -> Result<f64, ParseError> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::InvalidNumber(s.to_string())),
    }
}

fn parse_fraction(s: &str) -> Result<f64, ParseError> {
    let Some((numerator, denominator)) = s.split_once('/') else {
        return Err(ParseError::Malformed(s.to_string()));
    };
    let numerator = parse_number(numerator)?;
    let denominator = parse_number(denominator)?;
    if denominator == 0.0 {
        return Err(ParseError::ZeroDenominator(s.to_string()));
    }
    Ok(numerator / denominator)
}
