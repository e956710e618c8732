// Polynomial evaluation over a prime field.
//
// f(x) = a_0 * 1  +  a_1 * x  +  a_2 * x**2  +  ...  +  a_o * x**o
//
// Coefficients are stored lowest power first, so coefficients[0] is
// a_0 (the secret, when we're splitting).

use crate::field::PrimeField;

/// Evaluate the polynomial with the given coefficients at `x`, mod P.
///
/// Uses Horner's rule, which needs one multiply and one add per
/// coefficient. An empty coefficient list is the zero polynomial.
pub fn evaluate(field: &PrimeField, x: u64, coefficients: &[u64]) -> u64 {
    coefficients
        .iter()
        .rev()
        .fold(0, |acc, &c| field.add(field.mul(acc, x), c))
}
