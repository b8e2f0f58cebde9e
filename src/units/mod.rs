//! Measurement units, fractional-inch display, and measurement parsing.
//!
//! The layout engine works in one linear unit. This module sits at the
//! boundary: it turns what a user typed (`"12 3/8"`, `"30.5"`) into that
//! unit and formats results back for display.
//!
//! # Example
//!
//! ```
//! use hangcalc::units::{self, MeasurementUnit};
//!
//! let inches = units::parse_measurement("12 3/8", MeasurementUnit::Inches).unwrap();
//! assert_eq!(inches, 12.375);
//!
//! let cm = MeasurementUnit::Inches.to_cm(inches);
//! assert_eq!(units::format_measurement(cm, MeasurementUnit::Centimeters), "31.4");
//! assert_eq!(units::format_measurement(inches, MeasurementUnit::Inches), "12 3/8");
//! ```

mod fraction;
mod parse;

pub use fraction::FractionalInch;
pub use parse::{ParseError, parse_fractional_inch, parse_measurement};

use alloc::format;
use alloc::string::{String, ToString};

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// A linear unit the user enters and reads measurements in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MeasurementUnit {
    #[default]
    Centimeters,
    Inches,
}

impl MeasurementUnit {
    pub const ALL: [Self; 2] = [Self::Centimeters, Self::Inches];

    /// Abbreviation: `"cm"` or `"in"`.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::Inches => "in",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Centimeters => "Centimeters",
            Self::Inches => "Inches",
        }
    }

    /// Convert `value` in this unit to centimeters.
    pub fn to_cm(self, value: f64) -> f64 {
        match self {
            Self::Centimeters => value,
            Self::Inches => value * CM_PER_INCH,
        }
    }

    /// Convert `cm` centimeters to this unit.
    pub fn from_cm(self, cm: f64) -> f64 {
        match self {
            Self::Centimeters => cm,
            Self::Inches => cm / CM_PER_INCH,
        }
    }
}

impl core::fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.short_name())
    }
}

impl core::str::FromStr for MeasurementUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("cm")
            || s.eq_ignore_ascii_case("centimeter")
            || s.eq_ignore_ascii_case("centimeters")
        {
            Ok(Self::Centimeters)
        } else if s.eq_ignore_ascii_case("in")
            || s.eq_ignore_ascii_case("inch")
            || s.eq_ignore_ascii_case("inches")
            || s == "\""
        {
            Ok(Self::Inches)
        } else {
            Err(ParseError::UnknownUnit(s.to_string()))
        }
    }
}

/// Format a value already in `unit` for display.
///
/// Centimeters get one decimal place; inches are rounded to the nearest
/// eighth and shown as a mixed fraction.
pub fn format_measurement(value: f64, unit: MeasurementUnit) -> String {
    match unit {
        MeasurementUnit::Centimeters => format!("{value:.1}"),
        MeasurementUnit::Inches => FractionalInch::from_decimal(value).to_string(),
    }
}

/// Format a centimeter value in `unit`, with the unit's abbreviation.
pub fn format_cm_as(cm: f64, unit: MeasurementUnit) -> String {
    format!("{} {}", format_measurement(unit.from_cm(cm), unit), unit)
}
