// Arithmetic in the integer field mod P.
//
// All values handed out by PrimeField are in [0, P). Inputs may be any
// u64; every operation reduces its arguments first, so callers don't
// have to. Products go through u128, which is why P is capped at 2**63
// (sums of two reduced values then also stay inside a u64).

use rand::Rng;

use crate::error::{Error, Result};

/// 2**15 - 19, the field used by the original integer version of the
/// scheme. Big enough for small secrets and up to 32748 shares.
pub const DEFAULT_PRIME: u64 = 32749;

const MAX_MODULUS: u64 = 1 << 63;

// Deterministic Miller-Rabin witnesses; this set is enough for every
// n < 2**64.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// A prime field GF(P).
///
/// The modulus is a run-time parameter rather than a constant, so pick
/// one comfortably larger than the range of secrets you intend to share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: u64,
}

impl Default for PrimeField {
    fn default() -> Self {
        Self { modulus: DEFAULT_PRIME }
    }
}

impl PrimeField {
    /// Create a field with the given modulus, which must be a prime in
    /// `[3, 2**63)`.
    pub fn new(modulus: u64) -> Result<Self> {
        if modulus < 3 || modulus >= MAX_MODULUS || !is_prime(modulus) {
            return Err(Error::InvalidModulus(modulus));
        }
        Ok(Self { modulus })
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn reduce(&self, x: u64) -> u64 {
        x % self.modulus
    }

    /// Fold a signed integer into `[0, P)`, so `-1` becomes `P - 1`.
    pub fn reduce_signed(&self, x: i64) -> u64 {
        (x as i128).rem_euclid(self.modulus as i128) as u64
    }

    pub fn add(&self, a: u64, b: u64) -> u64 {
        (self.reduce(a) + self.reduce(b)) % self.modulus
    }

    pub fn sub(&self, a: u64, b: u64) -> u64 {
        self.add(a, self.neg(b))
    }

    pub fn neg(&self, a: u64) -> u64 {
        (self.modulus - self.reduce(a)) % self.modulus
    }

    pub fn mul(&self, a: u64, b: u64) -> u64 {
        mul_mod(a, b, self.modulus)
    }

    /// `base ** exponent mod P`. Anything to the power 0 is 1, zero
    /// included.
    pub fn power(&self, base: u64, exponent: u64) -> u64 {
        pow_mod(base, exponent, self.modulus)
    }

    /// Inverse via the extended Euclidean algorithm.
    ///
    /// Running it on `(x, P)` gives Bezout coefficients with
    /// `s*x + t*P = gcd(x, P) = 1`, and reducing mod P drops the `t*P`
    /// term, leaving `s*x = 1`. Zero (or any multiple of P) has no
    /// inverse and is reported as [`Error::NotInvertible`] with the
    /// reduced value, i.e. 0.
    pub fn multiplicative_inverse(&self, x: u64) -> Result<u64> {
        let a = self.reduce(x);
        if a == 0 {
            return Err(Error::NotInvertible(a));
        }

        let (mut old_r, mut r) = (a as i128, self.modulus as i128);
        let (mut old_s, mut s) = (1i128, 0i128);
        while r != 0 {
            let quotient = old_r / r;

            let tmp = r;
            r = old_r - quotient * r;
            old_r = tmp;

            let tmp = s;
            s = old_s - quotient * s;
            old_s = tmp;
        }
        if old_r != 1 {
            return Err(Error::NotInvertible(a));
        }

        Ok(old_s.rem_euclid(self.modulus as i128) as u64)
    }

    /// `a / b`, failing when `b` is zero in the field.
    pub fn div(&self, a: u64, b: u64) -> Result<u64> {
        Ok(self.mul(a, self.multiplicative_inverse(b)?))
    }

    /// Draw a uniformly random element of `[1, P)`. Zero draws are
    /// thrown away and redrawn rather than shifted, keeping the result
    /// uniform over the nonzero elements.
    pub fn random_nonzero<R: Rng>(&self, rng: &mut R) -> u64 {
        loop {
            let value = rng.gen_range(0..self.modulus);
            if value != 0 {
                return value;
            }
        }
    }
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

// square and multiply
fn pow_mod(base: u64, mut exponent: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    let mut base = base % m;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exponent >>= 1;
    }
    result
}

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in WITNESSES.iter() {
        if n % p == 0 {
            return n == p;
        }
    }

    // n - 1 = d * 2**s with d odd
    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for &a in WITNESSES.iter() {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const MERSENNE_61: u64 = (1 << 61) - 1;

    #[test]
    fn test_default_field() {
        let field = PrimeField::default();
        assert_eq!(field.modulus(), DEFAULT_PRIME);
        assert_eq!(PrimeField::new(DEFAULT_PRIME).unwrap(), field);
    }

    #[test]
    fn test_rejects_bad_moduli() {
        for &m in &[0, 1, 2, 4, 32748, 32751, 561, 1 << 63, u64::MAX] {
            assert_eq!(PrimeField::new(m), Err(Error::InvalidModulus(m)), "modulus {}", m);
        }
    }

    #[test]
    fn test_accepts_primes() {
        for &m in &[3, 5, 257, 65521, 4294967291, MERSENNE_61] {
            assert!(PrimeField::new(m).is_ok(), "modulus {}", m);
        }
    }

    #[test]
    fn test_power_zero_exponent() {
        let field = PrimeField::default();
        for &b in &[0, 1, 2, DEFAULT_PRIME, DEFAULT_PRIME - 1, u64::MAX] {
            assert_eq!(field.power(b, 0), 1);
        }
    }

    #[test]
    fn test_power() {
        let field = PrimeField::default();
        assert_eq!(field.power(2, 10), 1024);
        assert_eq!(field.power(2, 15), 32768 % DEFAULT_PRIME);
        assert_eq!(field.power(0, 5), 0);
        // Fermat
        assert_eq!(field.power(12345, DEFAULT_PRIME - 1), 1);
    }

    #[test]
    fn test_inverse_every_element() {
        let field = PrimeField::default();
        for x in 1..DEFAULT_PRIME {
            let inv = field.multiplicative_inverse(x).unwrap();
            assert!(inv < DEFAULT_PRIME);
            assert_eq!(field.mul(inv, x), 1, "inverse of {}", x);
        }
    }

    #[test]
    fn test_inverse_of_zero() {
        let field = PrimeField::default();
        assert_eq!(field.multiplicative_inverse(0), Err(Error::NotInvertible(0)));
        assert_eq!(
            field.multiplicative_inverse(2 * DEFAULT_PRIME),
            Err(Error::NotInvertible(0))
        );
        assert_eq!(field.div(7, 0), Err(Error::NotInvertible(0)));
    }

    #[test]
    fn test_large_field() {
        let field = PrimeField::new(MERSENNE_61).unwrap();
        for &x in &[2, 3, 1 << 40, MERSENNE_61 - 1, 0x1234_5678_9abc] {
            let inv = field.multiplicative_inverse(x).unwrap();
            assert_eq!(field.mul(x, inv), 1);
        }
        assert_eq!(field.mul(MERSENNE_61 - 1, MERSENNE_61 - 1), 1);
    }

    #[test]
    fn test_add_sub_neg() {
        let field = PrimeField::default();
        let p = DEFAULT_PRIME;
        assert_eq!(field.add(p - 1, 1), 0);
        assert_eq!(field.sub(0, 1), p - 1);
        assert_eq!(field.neg(0), 0);
        assert_eq!(field.neg(5), p - 5);
        assert_eq!(field.add(field.neg(1234), 1234), 0);
        assert_eq!(field.div(10, 5).unwrap(), 2);
    }

    #[test]
    fn test_reduce_signed() {
        let field = PrimeField::default();
        let p = DEFAULT_PRIME;
        assert_eq!(field.reduce_signed(-5), p - 5);
        assert_eq!(field.reduce_signed(-(p as i64)), 0);
        assert_eq!(field.reduce_signed(p as i64 + 7), 7);
        assert_eq!(field.reduce_signed(i64::MIN), field.reduce_signed(i64::MIN % p as i64));
    }

    #[test]
    fn test_random_nonzero() {
        let field = PrimeField::new(3).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let v = field.random_nonzero(&mut rng);
            assert!(v == 1 || v == 2);
            seen[v as usize] = true;
        }
        assert!(seen[1] && seen[2]);
    }
}
