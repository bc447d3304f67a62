//! [`FixedDecimal`] to `f64`.
//!
//! The digits are accumulated into a [`DoubleDouble`], which is then scaled by
//! exactly representable powers of ten. With about 106 bits of working
//! precision the only rounding that usually matters is the final one, from
//! double-double to `f64`.

use crate::{two_sum_known_order, DoubleDouble, FixedDecimal};

/// Largest `n` such that `10^n` is exactly an `f64`.
const LAST_EXACT_EXPONENT: i32 = 22;
const LAST_EXACT_POWER: f64 = 1e22;

/// 2^53 - 1
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Up to here `hi * 10 + 9` is an exact integer in `f64`.
const MAX_PLAIN_ACCUMULATOR: f64 = (MAX_SAFE_INTEGER - 9.0) / 10.0;

static POWERS_OF_TEN: [f64; LAST_EXACT_EXPONENT as usize + 1] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

impl FixedDecimal {
    /// The value as `f64`; saturates to infinity and flushes to zero.
    ///
    /// Never fails. The result is the nearest double for all but rare inputs
    /// with long mantissas or extreme exponents, where it may be one ulp off.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return if self.negative { -0.0 } else { 0.0 };
        }

        let number = self.mantissa();
        let exponent = self.exponent - (self.count as i32 - 1);
        let value = scale(number, exponent).to_f64();

        if self.negative {
            -value
        } else {
            value
        }
    }

    /// The stored digits as an integer.
    fn mantissa(&self) -> DoubleDouble {
        let mut number = DoubleDouble::ZERO;
        for &digit in self.digits() {
            let digit = f64::from(digit);
            if number.hi <= MAX_PLAIN_ACCUMULATOR {
                number.hi = number.hi * 10.0 + digit;
            } else {
                number *= 10.0;
                number += digit;
            }
        }
        number
    }
}

/// `number * 10^exponent`, in steps of at most `10^22`.
///
/// Stops early once the value has saturated to infinity, or flushed to zero;
/// neither can come back.
fn scale(mut number: DoubleDouble, mut exponent: i32) -> DoubleDouble {
    while exponent > LAST_EXACT_EXPONENT {
        number *= LAST_EXACT_POWER;
        if number.is_infinite() {
            return number;
        }
        exponent -= LAST_EXACT_EXPONENT;
    }

    while exponent < -LAST_EXACT_EXPONENT {
        number /= LAST_EXACT_POWER;
        if number.hi == 0.0 {
            return number;
        }
        exponent += LAST_EXACT_EXPONENT;
    }

    if exponent > 0 {
        let power = POWERS_OF_TEN[exponent as usize];
        let product = number * power;
        if product.is_infinite() {
            return near_overflow(number, power);
        }
        product
    } else if exponent < 0 {
        number / POWERS_OF_TEN[(-exponent) as usize]
    } else {
        number
    }
}

/// `number * power` once the leading product has overflowed.
///
/// `hi * power` may round past `f64::MAX` although `(hi + lo) * power` still
/// rounds to it. Half the product cannot overflow, and doubling it again is
/// exact up to the point where the correctly rounded result is infinite.
fn near_overflow(number: DoubleDouble, power: f64) -> DoubleDouble {
    let half = number * 0.5 * power;
    trace!("convert: product overflowed, halved to {:e}", half.hi);
    two_sum_known_order(half.hi * 2.0, half.lo * 2.0)
}
