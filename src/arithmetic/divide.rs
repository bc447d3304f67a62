use core::ops::{Div, DivAssign};

use super::{two_product, two_sum_known_order};
use crate::DoubleDouble;

impl Div<f64> for DoubleDouble {
    type Output = Self;

    /// The "DWDivFP2" algorithm, see [1] in [`crate::arithmetic`].
    ///
    /// The quotient of the leading parts is corrected by the remainder
    /// `self - hi * divisor`, which [`two_product`] gives us exactly.
    fn div(self, divisor: f64) -> Self::Output {
        let hi = self.hi / divisor;

        if hi.is_infinite() {
            return DoubleDouble::saturated(hi);
        }

        let product = two_product(hi, divisor);
        let remainder = (self.hi - product.hi) - product.lo;
        let lo = (remainder + self.lo) / divisor;

        two_sum_known_order(hi, lo)
    }
}

impl DivAssign<f64> for DoubleDouble {
    fn div_assign(&mut self, divisor: f64) {
        *self = *self / divisor;
    }
}
