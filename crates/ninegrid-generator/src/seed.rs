//! Reproducible puzzle seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DisplayDerive, Error};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines puzzle generation.
///
/// The seed is the sole source of randomness for both the backtracking
/// search's digit shuffling and the cell-removal coordinates, so a puzzle
/// can be reproduced exactly from its seed and difficulty.
///
/// Seeds render as 64 lowercase hexadecimal characters and parse back from
/// the same form.
///
/// # Examples
///
/// ```
/// use ninegrid_generator::PuzzleSeed;
///
/// // Derive a seed from an arbitrary phrase
/// let seed = PuzzleSeed::from_phrase("daily puzzle 2024-01-01");
/// let rendered = seed.to_string();
/// assert_eq!(rendered.len(), 64);
///
/// // Round-trips through its text form
/// let parsed: PuzzleSeed = rendered.parse().unwrap();
/// assert_eq!(parsed, seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed {
    bytes: [u8; 32],
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Creates a fresh seed from OS entropy.
    #[must_use]
    pub fn random() -> Self {
        Self::from_bytes(rand::random())
    }

    /// Derives a seed from an arbitrary phrase by hashing it with SHA-256.
    ///
    /// Useful for human-memorable reproducible puzzles ("daily" seeds).
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self::from_bytes(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// Expands the seed into the deterministic random number generator used
    /// for generation.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.bytes)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// An error returned when parsing a [`PuzzleSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
pub enum ParseSeedError {
    /// The text was not exactly 64 characters long.
    #[display("expected 64 hex characters, found {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// The text contained a non-hexadecimal character.
    #[display("invalid hex character: {_0:?}")]
    InvalidHexDigit(#[error(not(source))] char),
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 64 {
            return Err(ParseSeedError::InvalidLength(s.chars().count()));
        }

        let mut bytes = [0; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let hi = hex_value(chars.next().expect("length checked"))?;
            let lo = hex_value(chars.next().expect("length checked"))?;
            *byte = hi << 4 | lo;
        }
        Ok(Self::from_bytes(bytes))
    }
}

fn hex_value(c: char) -> Result<u8, ParseSeedError> {
    c.to_digit(16)
        .map(|value| u8::try_from(value).expect("hex digit fits in u8"))
        .ok_or(ParseSeedError::InvalidHexDigit(c))
}
