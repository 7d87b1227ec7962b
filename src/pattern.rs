//! Thresholding of a 2×3 pixel block into a 6-bit sextant pattern.
//!
//! ```text
//! +---+---+
//! | 0 | 1 |
//! +---+---+
//! | 2 | 3 |
//! +---+---+
//! | 4 | 5 |
//! +---+---+
//! ```
//!
//! Each number is both the sample's position in a [`SextantCell`] and the bit
//! it sets in the resulting [`SextantPattern`].

/// Samples strictly above this value are "on".
pub const THRESHOLD: u8 = 127;

/// The six samples that make up one character cell, in row-major order: `[0]`
/// and `[1]` are the top row, `[2]` and `[3]` the middle, `[4]` and `[5]` the
/// bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SextantCell(pub [u8; 6]);

impl SextantCell {
    pub fn samples(&self) -> &[u8; 6] {
        &self.0
    }
}

impl From<[u8; 6]> for SextantCell {
    fn from(samples: [u8; 6]) -> Self {
        Self(samples)
    }
}

/// A 6-bit on/off encoding of a [`SextantCell`]. Always in `0..64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SextantPattern(u8);

impl SextantPattern {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(0b11_1111);

    /// Keeps the low six bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b11_1111)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn from_cell(cell: &SextantCell) -> Self {
        let bits = cell
            .0
            .iter()
            .enumerate()
            .fold(0, |acc, (i, &v)| acc | (is_on(v) as u8) << i);
        Self(bits)
    }

    /// Whether the pixel at `position` (`0..6`) is on.
    pub const fn is_set(self, position: usize) -> bool {
        position < 6 && self.0 & (1 << position) != 0
    }

    /// Every pattern, in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..64).map(Self)
    }
}

impl From<SextantCell> for SextantPattern {
    fn from(cell: SextantCell) -> Self {
        Self::from_cell(&cell)
    }
}

const fn is_on(sample: u8) -> bool {
    sample > THRESHOLD
}
