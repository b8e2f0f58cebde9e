//! Inch values rounded to the nearest eighth, as shown on a tape measure.

use num_traits::Float;

/// Smallest fraction shown.
const EIGHTHS: u64 = 8;

/// An inch measurement as a whole number plus a reduced fraction of at most
/// eighths.
///
/// ```
/// use hangcalc::units::FractionalInch;
///
/// let f = FractionalInch::from_decimal(5.26);
/// assert_eq!((f.whole, f.numerator, f.denominator), (5, 1, 4));
/// assert_eq!(f.to_string(), "5 1/4");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FractionalInch {
    /// True for values below zero.
    pub negative: bool,
    pub whole: u64,
    /// Zero when the value is a whole number of inches.
    pub numerator: u8,
    /// One of 1, 2, 4, 8.
    pub denominator: u8,
}

impl FractionalInch {
    /// Round `inches` to the nearest eighth and reduce the fraction.
    ///
    /// Values within a sixteenth below the next whole inch carry over:
    /// `2.97` becomes `3`, not `2 8/8`. Non-finite input yields zero.
    pub fn from_decimal(inches: f64) -> Self {
        let total = Float::round(Float::abs(inches) * EIGHTHS as f64);
        // Saturating float-to-int cast maps NaN to 0.
        let total = total as u64;
        let eighths = total % EIGHTHS;
        let (numerator, denominator) = reduce(eighths, EIGHTHS);
        Self {
            negative: inches < 0.0 && total > 0,
            whole: total / EIGHTHS,
            numerator: numerator as u8,
            denominator: denominator as u8,
        }
    }

    /// The value in decimal inches.
    pub fn decimal_value(&self) -> f64 {
        let magnitude = self.whole as f64 + self.numerator as f64 / self.denominator as f64;
        if self.negative { -magnitude } else { magnitude }
    }
}

fn reduce(numerator: u64, denominator: u64) -> (u64, u64) {
    if numerator == 0 {
        return (0, 1);
    }
    let g = gcd(numerator, denominator);
    (numerator / g, denominator / g)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl core::fmt::Display for FractionalInch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        match (self.whole, self.numerator) {
            (whole, 0) => write!(f, "{whole}"),
            (0, n) => write!(f, "{n}/{}", self.denominator),
            (whole, n) => write!(f, "{whole} {n}/{}", self.denominator),
        }
    }
}
