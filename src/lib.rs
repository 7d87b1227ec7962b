//! A-Sextant library for turning greyscale images into sextant mosaics.
//!
//! A sextant is a 2×3 block of pixels. Each block is thresholded into a 6-bit
//! [`SextantPattern`], which is then drawn as one character, either:
//! - a teletext G1 block mosaic ([`TeletextG1`]), optionally prefixed with
//!   colour [`Attributes`], or
//! - a Unicode block sextant ([`UnicodeSextant`]), optionally wrapped in an
//!   HTML page ([`SextantGrid::html`]).
//!
//! The library doesn't decode, resize or colour-convert images. Hand it a
//! single-channel buffer (luma or alpha) and its width.
//!
//! ### Basic Usage
//!
//! ```rust
//! use a_sextant::{
//!     Attributes,
//!     Colour,
//!     SextantGrid,
//! };
//!
//! // .X
//! // X.
//! // .X
//! let pixels = [0x00, 0xff, 0xff, 0x00, 0x00, 0xff];
//! let grid = SextantGrid::new(&pixels, 2)?;
//!
//! assert_eq!(grid.teletext_rows(&Attributes::none()), ["f"]);
//! assert_eq!(
//!     grid.teletext_rows(&Attributes::foreground(Colour::Cyan)),
//!     ["\x16f"]
//! );
//! assert_eq!(grid.unicode_rows(), ["\u{1FB24}"]);
//! # Ok::<(), a_sextant::SextantError>(())
//! ```
//!
//! ## Edges
//! Images whose height isn't a multiple of 3, or whose width isn't a multiple
//! of 2, still get a character for the partial cells along the bottom and
//! right. Samples past the end of the buffer read as `0`. Asking for a cell
//! outside the grid is an error.

pub mod html;
pub mod pattern;
pub mod teletext;
pub mod unicode;

use std::fmt;

#[cfg(feature = "rayon")]
use rayon::iter::{
    IntoParallelIterator,
    ParallelIterator,
};
use thiserror::Error;

pub use crate::{
    pattern::{
        SextantCell,
        SextantPattern,
    },
    teletext::{
        Attributes,
        Colour,
        TeletextG1,
    },
    unicode::UnicodeSextant,
};

/// Errors raised for bad input. None of them are recoverable without the
/// caller changing what it passed in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SextantError {
    #[error("width must be a positive integer")]
    InvalidWidth,

    /// The buffer isn't a whole number of rows.
    #[error("bad width {width} for buffer length {len}")]
    DimensionMismatch { len: usize, width: usize },

    #[error("row {row} out of range for number of rows {rows}")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("col {col} out of range for number of cols {cols}")]
    ColOutOfRange { col: usize, cols: usize },

    #[error("bad foreground: {0}")]
    InvalidForeground(String),

    #[error("bad background: {0}")]
    InvalidBackground(String),
}

pub type Result<T> = core::result::Result<T, SextantError>;

mod private {
    pub trait Sealed {}
}

/// A character set that can draw every [`SextantPattern`].
///
/// Implemented by [`TeletextG1`] and [`UnicodeSextant`]. Both are total over
/// the 64 patterns.
pub trait Mosaic: private::Sealed {
    const NAME: &'static str;

    fn glyph(pattern: SextantPattern) -> char;
}

/// A read-only view of a single-channel image as a grid of sextant cells.
#[derive(Debug, Clone, Copy)]
pub struct SextantGrid<'a> {
    buffer: &'a [u8],
    width_px: usize,
    height_px: usize,
    num_rows: usize,
    num_cols: usize,
}

impl<'a> SextantGrid<'a> {
    /// Wraps `buffer`, a row-major image `width_px` samples wide.
    pub fn new(buffer: &'a [u8], width_px: usize) -> Result<Self> {
        if width_px == 0 {
            return Err(SextantError::InvalidWidth);
        }
        if buffer.len() % width_px != 0 {
            return Err(SextantError::DimensionMismatch {
                len: buffer.len(),
                width: width_px,
            });
        }

        let height_px = buffer.len() / width_px;
        let grid = Self {
            buffer,
            width_px,
            height_px,
            num_rows: height_px.div_ceil(3),
            num_cols: width_px.div_ceil(2),
        };
        log::debug!(
            "{}x{} px image -> {}x{} sextant cells",
            grid.width_px,
            grid.height_px,
            grid.num_cols,
            grid.num_rows
        );

        Ok(grid)
    }

    /// Borrows the luma channel of `image`.
    #[cfg(feature = "image")]
    pub fn from_luma(image: &'a image::GrayImage) -> Result<Self> {
        Self::new(image.as_raw(), image.width() as usize)
    }

    pub fn width_px(&self) -> usize {
        self.width_px
    }

    pub fn height_px(&self) -> usize {
        self.height_px
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// The six samples under the cell at (`col`, `row`).
    ///
    /// Samples are addressed by their linear offset in the buffer, so on an
    /// odd-width image the right half of the last column comes from the start
    /// of the next pixel row. Only offsets past the end of the buffer are
    /// padded with `0`.
    pub fn cell(&self, col: usize, row: usize) -> Result<SextantCell> {
        if row >= self.num_rows {
            return Err(SextantError::RowOutOfRange {
                row,
                rows: self.num_rows,
            });
        }
        if col >= self.num_cols {
            return Err(SextantError::ColOutOfRange {
                col,
                cols: self.num_cols,
            });
        }

        Ok(self.cell_unchecked(col, row))
    }

    pub fn pattern(&self, col: usize, row: usize) -> Result<SextantPattern> {
        self.cell(col, row).map(SextantPattern::from)
    }

    /// The character `M` draws for the cell at (`col`, `row`).
    pub fn glyph<M: Mosaic>(&self, col: usize, row: usize) -> Result<char> {
        self.pattern(col, row).map(M::glyph)
    }

    /// One string per cell row, each `num_cols` characters long.
    pub fn rows<M: Mosaic>(&self) -> Vec<String> {
        log::trace!("assembling {} {} rows", self.num_rows, M::NAME);

        #[cfg(feature = "rayon")]
        let rows = (0..self.num_rows)
            .into_par_iter()
            .map(|row| self.row::<M>(row))
            .collect();
        #[cfg(not(feature = "rayon"))]
        let rows = (0..self.num_rows).map(|row| self.row::<M>(row)).collect();

        rows
    }

    /// Teletext G1 rows, each prefixed with the colour `attributes`.
    pub fn teletext_rows(&self, attributes: &Attributes) -> Vec<String> {
        attributes.decorate(self.rows::<TeletextG1>())
    }

    pub fn unicode_rows(&self) -> Vec<String> {
        self.rows::<UnicodeSextant>()
    }

    /// A standalone HTML page showing the Unicode rendering.
    pub fn html(&self) -> String {
        html::wrap(&self.unicode_rows())
    }

    fn row<M: Mosaic>(&self, row: usize) -> String {
        (0..self.num_cols)
            .map(|col| M::glyph(self.cell_unchecked(col, row).into()))
            .collect()
    }

    fn cell_unchecked(&self, col: usize, row: usize) -> SextantCell {
        let root = row * self.width_px * 3 + col * 2;
        let w = self.width_px;
        let sample = |offset: usize| self.buffer.get(root + offset).copied().unwrap_or(0);

        SextantCell([
            sample(0),
            sample(1),
            sample(w),
            sample(w + 1),
            sample(2 * w),
            sample(2 * w + 1),
        ])
    }
}

/// Writes the Unicode rows separated by newlines.
impl fmt::Display for SextantGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.unicode_rows().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}
