//! Block sextants from the Unicode Symbols for Legacy Computing block.
//!
//! The block (U+1FB00..=U+1FB3B) only encodes the 60 patterns that had no
//! existing character. The other four are borrowed from elsewhere: the empty
//! cell is a space, the full cell is U+2588 FULL BLOCK, and the left and right
//! columns are U+258C LEFT HALF BLOCK and U+2590 RIGHT HALF BLOCK. That leaves
//! two holes in the run, so the mapping is kept as a table.

use crate::{
    private,
    Mosaic,
    SextantPattern,
};

/// Maps patterns to Unicode sextant characters.
pub struct UnicodeSextant;

impl UnicodeSextant {
    pub const fn char(pattern: SextantPattern) -> char {
        SEXTANTS[pattern.bits() as usize]
    }
}

impl private::Sealed for UnicodeSextant {}
impl Mosaic for UnicodeSextant {
    const NAME: &'static str = "unicode";

    fn glyph(pattern: SextantPattern) -> char {
        Self::char(pattern)
    }
}

#[rustfmt::skip]
const SEXTANTS: [char; 64] = [
    '\u{0020}',  '\u{1FB00}', '\u{1FB01}', '\u{1FB02}', // 0..=3
    '\u{1FB03}', '\u{1FB04}', '\u{1FB05}', '\u{1FB06}', // 4..=7
    '\u{1FB07}', '\u{1FB08}', '\u{1FB09}', '\u{1FB0A}', // 8..=11
    '\u{1FB0B}', '\u{1FB0C}', '\u{1FB0D}', '\u{1FB0E}', // 12..=15
    '\u{1FB0F}', '\u{1FB10}', '\u{1FB11}', '\u{1FB12}', // 16..=19
    '\u{1FB13}', '\u{258C}',  '\u{1FB14}', '\u{1FB15}', // 20..=23
    '\u{1FB16}', '\u{1FB17}', '\u{1FB18}', '\u{1FB19}', // 24..=27
    '\u{1FB1A}', '\u{1FB1B}', '\u{1FB1C}', '\u{1FB1D}', // 28..=31
    '\u{1FB1E}', '\u{1FB1F}', '\u{1FB20}', '\u{1FB21}', // 32..=35
    '\u{1FB22}', '\u{1FB23}', '\u{1FB24}', '\u{1FB25}', // 36..=39
    '\u{1FB26}', '\u{1FB27}', '\u{2590}',  '\u{1FB28}', // 40..=43
    '\u{1FB29}', '\u{1FB2A}', '\u{1FB2B}', '\u{1FB2C}', // 44..=47
    '\u{1FB2D}', '\u{1FB2E}', '\u{1FB2F}', '\u{1FB30}', // 48..=51
    '\u{1FB31}', '\u{1FB32}', '\u{1FB33}', '\u{1FB34}', // 52..=55
    '\u{1FB35}', '\u{1FB36}', '\u{1FB37}', '\u{1FB38}', // 56..=59
    '\u{1FB39}', '\u{1FB3A}', '\u{1FB3B}', '\u{2588}',  // 60..=63
];
