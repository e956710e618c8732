// An implementation of key sharing from
//
// Shamir A.,
// How to Share a Secret,
// Communications of the ACM, 22, 1979, pp. 612--613.
//
// This version works in the integer field mod P, with P chosen at run
// time, and shares a single integer secret.

//! Shamir's Secret Sharing over a prime field.
//!
//! A secret is the constant term of a random polynomial of order
//! `threshold - 1`; shares are points on that polynomial, and any
//! `threshold` of them recover the secret by Lagrange interpolation.
//!
//! ```
//! use prime_ssss::{combine_shares, split_secret, PrimeField};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let field = PrimeField::default();
//! let mut rng = StdRng::from_entropy();
//! let shares = split_secret(&field, 1234, 3, 5, &mut rng).unwrap();
//!
//! assert_eq!(combine_shares(&field, &shares[0..3]).unwrap(), 1234);
//! assert_eq!(combine_shares(&field, &shares[2..5]).unwrap(), 1234);
//! ```

pub mod combine;
pub mod error;
pub mod field;
pub mod poly;
pub mod share;
pub mod split;

pub use combine::{combine_shares, interpolate, recover_share};
pub use error::{Error, Result};
pub use field::{PrimeField, DEFAULT_PRIME};
pub use share::Share;
pub use split::split_secret;
