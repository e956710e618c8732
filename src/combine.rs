// Reconstruction by Lagrange interpolation
//
// Given points (x_i, y_i), the unique polynomial of lowest order
// through them is
//
// f(z) = sum_i y_i * prod_{j != i} (z - x_j) / (x_i - x_j)
//
// and the secret is f(0). Nothing here can tell whether the shares
// really belong together or whether there are enough of them: too few
// shares, or shares from different splits, just give a wrong answer.
// Repeated x-coordinates are caught, though, since they would make the
// denominator zero.

use std::collections::HashSet;

use log::debug;

use crate::error::{Error, Result};
use crate::field::PrimeField;
use crate::share::Share;

/// Recover the secret, i.e. the shared polynomial's value at 0.
pub fn combine_shares(field: &PrimeField, shares: &[Share]) -> Result<u64> {
    interpolate(field, shares, 0)
}

/// Evaluate the polynomial through `shares` at an arbitrary point.
///
/// Fails with [`Error::NoShares`] on an empty slice and with
/// [`Error::DuplicateShareCoordinate`] when two shares have the same x
/// (mod P), whatever their y values.
pub fn interpolate(field: &PrimeField, shares: &[Share], at: u64) -> Result<u64> {
    if shares.is_empty() {
        return Err(Error::NoShares);
    }
    check_distinct(field, shares)?;
    debug!(
        "interpolating {} shares, modulus {}",
        shares.len(),
        field.modulus()
    );

    let mut result = 0;
    for (i, share_i) in shares.iter().enumerate() {
        let xi = field.reduce(share_i.x);

        let mut numerator = 1;
        let mut denominator = 1;
        for (j, share_j) in shares.iter().enumerate() {
            if i != j {
                let xj = field.reduce(share_j.x);
                numerator = field.mul(numerator, field.sub(at, xj));
                denominator = field.mul(denominator, field.sub(xi, xj));
            }
        }

        let basis = field.div(numerator, denominator)?;
        result = field.add(result, field.mul(share_i.y, basis));
    }
    Ok(result)
}

/// Make a new share at `x` from at least a quorum of existing ones,
/// e.g. to replace a share that was lost.
pub fn recover_share(field: &PrimeField, shares: &[Share], x: u64) -> Result<Share> {
    Ok(Share::new(x, interpolate(field, shares, x)?))
}

fn check_distinct(field: &PrimeField, shares: &[Share]) -> Result<()> {
    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        let x = field.reduce(share.x);
        if !seen.insert(x) {
            return Err(Error::DuplicateShareCoordinate(x));
        }
    }
    Ok(())
}
