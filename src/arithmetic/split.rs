use crate::DoubleDouble;

/// Should be chosen as `2^(t - t/2) + 1`, where `t` is the number of mantissa bits.
const SPLITTER: f64 = 134217729.0; // 2^27 + 1

/// Beyond this, `SPLITTER * a` overflows: `2^(1023 - 27)`.
const SPLIT_LIMIT: f64 = 6.69692879491417e+299; // 2^996
const SCALE_DOWN: f64 = 3.7252902984619140625e-09; // 2^-28
const SCALE_UP: f64 = 268435456.0; // 2^28

/// Splits `a` into `hi + lo`, each with at most 26 significant bits.
///
/// The "Veltkamp split" (Dekker's `mul12`), see [2] in [`crate::arithmetic`].
/// Products of halves are then exact, which is what [`two_product`][super::two_product]
/// relies on.
///
/// Very large `a` are scaled down by a power of two first (and the halves scaled back up),
/// so the multiplication by the splitter cannot overflow.
#[inline]
pub fn split(a: f64) -> DoubleDouble {
    if a > SPLIT_LIMIT || a < -SPLIT_LIMIT {
        let halves = veltkamp(a * SCALE_DOWN);
        return DoubleDouble {
            hi: halves.hi * SCALE_UP,
            lo: halves.lo * SCALE_UP,
        };
    }

    veltkamp(a)
}

#[inline]
fn veltkamp(a: f64) -> DoubleDouble {
    let t = SPLITTER * a;
    let hi = t - (t - a);
    DoubleDouble { hi, lo: a - hi }
}

#[cfg(test)]
mod test {
    use super::*;

    /// The 27 lowest mantissa bits of the high half are clear.
    fn is_half_length(x: f64) -> bool {
        x.to_bits() & ((1 << 27) - 1) == 0
    }

    #[test]
    fn halves_add_up() {
        for &a in &[
            core::f64::consts::PI,
            -core::f64::consts::E,
            0.1,
            9007199254740991.0,
            1e-300,
            1.2345e300,
            1.7e308,
            -1.7e308,
        ] {
            let halves = split(a);
            assert_eq!(halves.hi + halves.lo, a, "{}", a);
            assert!(is_half_length(halves.hi), "{}", a);
            assert!(halves.lo.abs() <= halves.hi.abs(), "{}", a);
        }
    }

    #[test]
    fn large_values_do_not_overflow() {
        let halves = split(1.7e308);
        assert!(halves.hi.is_finite());
        assert!(halves.lo.is_finite());

        // naive split would produce infinities here
        assert!((SPLITTER * 1.7e308).is_infinite());
    }

    #[test]
    fn short_values_split_trivially() {
        let halves = split(3.0);
        assert_eq!(halves, DoubleDouble::new(3.0, 0.0));
    }
}
