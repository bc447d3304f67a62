use core::ops::{Mul, MulAssign};

use super::{split, two_sum_known_order};
use crate::DoubleDouble;

/// `a * b` with its exact rounding error.
///
/// The "TWO-PRODUCT" algorithm, see [4] in [`crate::arithmetic`]. Both factors are
/// [`split`] into halves whose partial products are exact, and the error is
/// recovered by subtracting those from the rounded product, largest first.
///
/// Exact as long as nothing underflows; with a fused multiply-add this would be
/// `a.mul_add(b, -hi)`, which `core` does not offer.
#[inline]
pub fn two_product(a: f64, b: f64) -> DoubleDouble {
    let hi = a * b;

    if hi.is_infinite() {
        return DoubleDouble::saturated(hi);
    }

    let a = split(a);
    let b = split(b);

    let err1 = hi - a.hi * b.hi;
    let err2 = err1 - a.lo * b.hi;
    let err3 = err2 - a.hi * b.lo;

    DoubleDouble {
        hi,
        lo: a.lo * b.lo - err3,
    }
}

impl Mul<f64> for DoubleDouble {
    type Output = Self;

    /// The "DWTimesFP1" algorithm, see [1] in [`crate::arithmetic`].
    fn mul(self, factor: f64) -> Self::Output {
        let product = two_product(self.hi, factor);

        if product.is_infinite() {
            return product;
        }

        let sum = two_sum_known_order(product.hi, self.lo * factor);
        two_sum_known_order(sum.hi, sum.lo + product.lo)
    }
}

impl MulAssign<f64> for DoubleDouble {
    fn mul_assign(&mut self, factor: f64) {
        *self = *self * factor;
    }
}
