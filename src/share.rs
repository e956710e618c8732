use std::fmt;

/// One point `(x, f(x))` on the secret-encoding polynomial.
///
/// Shares are plain values: they don't know which field or which
/// polynomial they came from, and keeping them together with their
/// siblings is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Share {
    /// x-coordinate; 1..=n for freshly generated shares
    pub x: u64,
    /// f(x) mod P
    pub y: u64,
}

impl Share {
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }
}

// Same look as the old C test driver's output
impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}|{})", self.x, self.y)
    }
}
