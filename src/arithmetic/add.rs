use core::ops::{Add, AddAssign};

use crate::DoubleDouble;

/// `a + b` with its exact rounding error, assuming `|a| >= |b|` (or `a == 0`).
///
/// The "Fast2Sum" algorithm (Dekker 1971), see [1] in [`crate::arithmetic`].
/// Three operations instead of the six of [`two_sum`], which is why callers use it
/// whenever the order of magnitudes is already known.
#[inline]
pub fn two_sum_known_order(a: f64, b: f64) -> DoubleDouble {
    let hi = a + b;

    if hi.is_infinite() {
        return DoubleDouble::saturated(hi);
    }

    DoubleDouble { hi, lo: b - (hi - a) }
}

/// `a + b` with its exact rounding error, for any `a` and `b`.
///
/// The "2Sum" algorithm (Knuth, Møller), see [1] in [`crate::arithmetic`].
#[inline]
pub fn two_sum(a: f64, b: f64) -> DoubleDouble {
    let hi = a + b;

    if hi.is_infinite() {
        return DoubleDouble::saturated(hi);
    }

    let a_rounded = hi - b;
    let b_rounded = hi - a_rounded;

    DoubleDouble {
        hi,
        lo: (a - a_rounded) + (b - b_rounded),
    }
}

impl Add<f64> for DoubleDouble {
    type Output = Self;

    /// The "DWPlusFP" algorithm, see [1] in [`crate::arithmetic`].
    fn add(self, summand: f64) -> Self::Output {
        let sum = two_sum(self.hi, summand);

        if sum.is_infinite() {
            return sum;
        }

        two_sum_known_order(sum.hi, sum.lo + self.lo)
    }
}

impl AddAssign<f64> for DoubleDouble {
    fn add_assign(&mut self, summand: f64) {
        *self = *self + summand;
    }
}
