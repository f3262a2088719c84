//! Error types.

use core::fmt;

/// Errors raised while constructing an engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A seed sequence produced fewer 32-bit words than the key needs.
    ShortSeedSequence {
        /// Words needed to fill the key.
        required: usize,
        /// Words the sequence actually wrote.
        produced: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortSeedSequence { required, produced } => write!(
                f,
                "seed sequence produced {produced} words, key requires {required}"
            ),
        }
    }
}

impl core::error::Error for Error {}
