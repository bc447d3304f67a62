//! Double-double arithmetic, for exactly the operations decimal conversion needs.
//!
//! A [`DoubleDouble`] is an unevaluated sum `hi + lo` of two `f64`. The building
//! blocks are "error-free transformations": [`two_sum`] and [`two_product`] return
//! the rounded result of one floating-point operation together with its exact
//! rounding error. On top of these, a `DoubleDouble` can be added to, multiplied
//! by, and divided by a plain `f64` (`core::ops::{Add, Mul, Div}<f64>`).
//!
//! None of this allocates or fails. When the leading part overflows, the result
//! saturates to `(±∞, 0)` instead of producing a NaN correction term.
//!
//! References:
//!
//! 1. [Joldes, Muller, Popescu. Tight and rigourous error bounds for basic building
//!    blocks of double-word arithmetic (2017)][joldes]: Fast2Sum, 2Sum,
//!    DWPlusFP, DWTimesFP1, DWDivFP2.
//! 2. [Dekker. A floating-point technique for extending the available precision
//!    (1971)][dekker]: splitting into halflength numbers, `mul12`.
//! 3. [Hida, Li, Bailey. Library for double-double and quad-double arithmetic
//!    (2000)][qd]
//! 4. [Shewchuk. Adaptive precision floating-point arithmetic and fast robust
//!    geometric predicates (1997)][shewchuk]: TWO-PRODUCT.
//!
//! [joldes]: https://hal.science/hal-01351529v3/document
//! [dekker]: https://csclub.uwaterloo.ca/~pbarfuss/dekker1971.pdf
//! [qd]: http://web.mit.edu/tabbott/Public/quaddouble-debian/qd-2.3.4-old/docs/qd.pdf
//! [shewchuk]: https://people.eecs.berkeley.edu/~jrs/papers/robustr.pdf

use crate::DoubleDouble;

mod add;
mod divide;
mod multiply;
mod split;

pub use add::{two_sum, two_sum_known_order};
pub use multiply::two_product;
pub use split::split;

impl DoubleDouble {
    /// `self + b`, see [`Add`][core::ops::Add].
    pub fn add_f64(self, b: f64) -> Self {
        self + b
    }

    /// `self * b`, see [`Mul`][core::ops::Mul].
    pub fn mul_f64(self, b: f64) -> Self {
        self * b
    }

    /// `self / b`, see [`Div`][core::ops::Div].
    pub fn div_f64(self, b: f64) -> Self {
        self / b
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn named_operations() {
        let x = DoubleDouble::from(3.0);
        assert_eq!(x.add_f64(0.5), x + 0.5);
        assert_eq!(x.mul_f64(0.1), x * 0.1);
        assert_eq!(x.div_f64(7.0), x / 7.0);
    }

    // 0.1 * 10 rounds to 1.0, the error survives in lo
    #[test]
    fn round_trip_through_ten() {
        let tenth = DoubleDouble::from(1.0) / 10.0;
        assert_eq!(tenth.hi, 0.1);

        let one = DoubleDouble::from(0.1) * 10.0;
        assert_eq!(one.hi, 1.0);
        assert!(one.lo > 0.0);
    }
}
