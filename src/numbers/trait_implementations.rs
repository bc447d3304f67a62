use core::fmt;

use super::{DoubleDouble, FixedDecimal};
use crate::{Digit, DIGITS};

impl From<f64> for DoubleDouble {
    fn from(hi: f64) -> Self {
        Self { hi, lo: 0.0 }
    }
}

impl From<DoubleDouble> for f64 {
    fn from(value: DoubleDouble) -> Self {
        value.to_f64()
    }
}

/// No digits, sign positive, exponent -1.
///
/// The exponent starts one below the units place, so that the first
/// significant digit before the point lands on 0.
impl Default for FixedDecimal {
    fn default() -> Self {
        Self {
            digits: [0; DIGITS],
            count: 0,
            exponent: -1,
            negative: false,
        }
    }
}

// Only the stored digits take part, not the stale tail of the buffer.
impl PartialEq for FixedDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.digits() == other.digits()
            && self.exponent == other.exponent
            && self.negative == other.negative
    }
}

impl Eq for FixedDecimal {}

impl From<&FixedDecimal> for f64 {
    fn from(decimal: &FixedDecimal) -> Self {
        decimal.to_f64()
    }
}

struct DigitString<'a>(&'a [Digit]);

impl fmt::Debug for DigitString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for &digit in self.0 {
            f.write_char(char::from(b'0' + digit))?;
        }
        Ok(())
    }
}

impl fmt::Debug for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedDecimal")
            .field("negative", &self.negative)
            .field("digits", &DigitString(self.digits()))
            .field("exponent", &self.exponent)
            .finish()
    }
}
