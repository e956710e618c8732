use thiserror::Error;

/// Everything that can go wrong while splitting or combining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Share generation needs `1 <= threshold <= share_count < P`.
    #[error("invalid parameters: threshold {threshold}, share count {share_count}")]
    InvalidParameters { threshold: usize, share_count: usize },

    /// Inverting or dividing by zero; carries the value reduced mod P.
    #[error("{0} has no multiplicative inverse")]
    NotInvertible(u64),

    /// Two shares with the same x (mod P); carries the reduced x.
    #[error("duplicate share x-coordinate {0}")]
    DuplicateShareCoordinate(u64),

    /// Reconstruction was handed an empty slice of shares.
    #[error("no shares given")]
    NoShares,

    /// Field modulus is not a prime in `[3, 2**63)`.
    #[error("modulus {0} is not a usable prime")]
    InvalidModulus(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
