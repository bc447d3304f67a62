//! Test helpers.

use rand_core::{impls, Error, RngCore};

/// Deterministic linear congruential generator, so runs are reproducible.
///
/// Not remotely random in the cryptographic sense, but every bit pattern
/// of an `f64` is reachable through `next_u64`.
pub struct LcgRng(pub u32);

impl RngCore for LcgRng {
    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(0x0808_8405).wrapping_add(1);
        self.0
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl LcgRng {
    /// Uniform in `0..bound`.
    pub fn below(&mut self, bound: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as u32
    }
}

/// Number of doubles from `a` to `b`, counting `+0` and `-0` as one.
pub fn ulps(a: f64, b: f64) -> u64 {
    fn ordered(x: f64) -> i128 {
        let bits = x.to_bits() as i64;
        i128::from(if bits < 0 { i64::MIN - bits } else { bits })
    }
    (ordered(a) - ordered(b)).unsigned_abs() as u64
}

/// Bit pattern of a double, most significant byte first.
pub fn from_hex(bytes: [u8; 8]) -> f64 {
    f64::from_be_bytes(bytes)
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn ulps_across_zero() {
        assert_eq!(ulps(0.0, -0.0), 0);
        assert_eq!(ulps(1.0, 1.0), 0);
        assert_eq!(ulps(1.0, 1.0 + f64::EPSILON), 1);
        assert_eq!(ulps(f64::MAX, f64::INFINITY), 1);
        assert_eq!(ulps(from_hex(hex!("0000000000000001")), from_hex(hex!("8000000000000001"))), 2);
    }

    #[test]
    fn deterministic() {
        let mut a = LcgRng(0);
        let mut b = LcgRng(0);
        assert_eq!(a.next_u32(), 1);
        assert_eq!(a.next_u32(), 0x0808_8406);
        b.next_u64();
        let mut bytes = [0u8; 3];
        a.fill_bytes(&mut bytes);
        b.fill_bytes(&mut bytes);
        assert_eq!(a.next_u32(), b.next_u32());
        assert!(a.below(10) < 10);
    }
}
