// Share generation
//
// Build a random polynomial of order o = k - 1 whose constant term is
// the secret, then hand out f(1), f(2), ..., f(n). Any k of those
// points pin the polynomial down again; k - 1 of them are consistent
// with every possible secret.

use log::{debug, trace};
use rand::Rng;
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::field::PrimeField;
use crate::poly;
use crate::share::Share;

/// Split `secret` into `share_count` shares, any `threshold` of which
/// recover it.
///
/// The secret is first folded into `[0, P)`, so negative and oversized
/// values are accepted (`-5` and `P - 5` split identically). Random
/// coefficients are drawn from `rng`, which is the only source of
/// entropy; pass a seeded generator for reproducible output.
///
/// Fails with [`Error::InvalidParameters`] unless
/// `1 <= threshold <= share_count < P`.
pub fn split_secret<R: Rng>(
    field: &PrimeField,
    secret: i64,
    threshold: usize,
    share_count: usize,
    rng: &mut R,
) -> Result<Vec<Share>> {
    if threshold == 0 || share_count < threshold || share_count as u64 >= field.modulus() {
        return Err(Error::InvalidParameters {
            threshold,
            share_count,
        });
    }
    debug!(
        "splitting into {} shares, quorum {}, modulus {}",
        share_count,
        threshold,
        field.modulus()
    );

    // coefficients[0] is the secret, the rest must be nonzero
    let mut coefficients = Vec::with_capacity(threshold);
    coefficients.push(field.reduce_signed(secret));
    for _ in 1..threshold {
        coefficients.push(field.random_nonzero(rng));
    }

    let shares = (1..=share_count as u64)
        .map(|x| {
            let share = Share::new(x, poly::evaluate(field, x, &coefficients));
            trace!("generated share {}", share.x);
            share
        })
        .collect();

    coefficients.zeroize();
    Ok(shares)
}
