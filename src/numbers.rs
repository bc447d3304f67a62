use crate::{Digit, DIGITS};

mod trait_implementations;

/// Unevaluated sum `hi + lo` of two `f64`.
///
/// `hi` is the double nearest to the represented value, `lo` is the part of
/// the value that `hi` could not hold. This gives about 106 bits of mantissa,
/// i.e. 31 decimal digits, for values whose binary exponent is at least -968;
/// below that `lo` runs into the subnormal range and the precision gradually
/// drops to that of a plain `f64`.
///
/// Whenever `hi` is infinite, `lo` is zero.
///
/// See [`crate::arithmetic`] for the operations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DoubleDouble {
    pub hi: f64,
    pub lo: f64,
}

impl DoubleDouble {
    pub const ZERO: Self = Self { hi: 0.0, lo: 0.0 };

    pub const fn new(hi: f64, lo: f64) -> Self {
        Self { hi, lo }
    }

    /// Result of an operation whose leading part overflowed.
    #[inline]
    pub(crate) const fn saturated(hi: f64) -> Self {
        Self { hi, lo: 0.0 }
    }

    pub fn is_infinite(&self) -> bool {
        self.hi.is_infinite()
    }

    /// Only `hi` survives; `lo` merely kept it correctly rounded.
    pub fn to_f64(self) -> f64 {
        self.hi
    }
}

/// Scanned decimal numeral: `±0.d₁d₂…dₙ × 10^(exponent + 1)`.
///
/// Only significant digits are stored (no leading zeros), at most [`DIGITS`]
/// of them. Further digits are dropped, not rounded into the stored ones.
///
/// `exponent` is the power of ten of the first stored digit: "123.45" has
/// exponent 2, "0.0012" has exponent -3.
///
/// A numeral consisting of zeros only has no stored digits; it is zero,
/// with sign.
#[derive(Clone)]
pub struct FixedDecimal {
    pub(crate) digits: [Digit; DIGITS],
    pub(crate) count: usize,
    pub(crate) exponent: i32,
    pub(crate) negative: bool,
}

impl FixedDecimal {
    /// The stored significant digits, most significant first.
    pub fn digits(&self) -> &[Digit] {
        &self.digits[..self.count]
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.count == 0
    }

    /// Appends a digit, unless the buffer is full.
    ///
    /// Returns whether the digit was stored.
    #[inline]
    pub(crate) fn push(&mut self, digit: Digit) -> bool {
        debug_assert!(digit <= 9);
        if self.count < DIGITS {
            self.digits[self.count] = digit;
            self.count += 1;
            true
        } else {
            false
        }
    }
}
