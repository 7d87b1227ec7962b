//! Teletext G1 block mosaics and the colour attributes that go in front of
//! them.
//!
//! G1 mosaics occupy `0x20..=0x3F` and `0x60..=0x7F`, skipping the upper-case
//! letters in between. A pattern's low 5 bits select the character within a
//! range and bit 5 (the bottom-right pixel) selects the range.

use std::str::FromStr;

use strum::{
    Display,
    EnumIter,
    EnumString,
};

use crate::{
    private,
    Mosaic,
    Result,
    SextantError,
    SextantPattern,
};

/// Starts a new background in the current foreground colour.
pub const NEW_BACKGROUND: u8 = 0x1d;

/// Maps patterns to teletext G1 mosaic characters.
pub struct TeletextG1;

impl TeletextG1 {
    pub const fn byte(pattern: SextantPattern) -> u8 {
        let bits = pattern.bits();
        if bits < 0x20 {
            bits + 0x20
        } else {
            bits + 0x40
        }
    }
}

impl private::Sealed for TeletextG1 {}
impl Mosaic for TeletextG1 {
    const NAME: &'static str = "teletext-g1";

    fn glyph(pattern: SextantPattern) -> char {
        Self::byte(pattern) as char
    }
}

/// The eight teletext colours. Names parse and print in lower case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Colour {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Colour {
    /// The mosaic colour control byte, `0x10..=0x17`.
    pub const fn byte(self) -> u8 {
        match self {
            Colour::Black => 0x10,
            Colour::Red => 0x11,
            Colour::Green => 0x12,
            Colour::Yellow => 0x13,
            Colour::Blue => 0x14,
            Colour::Magenta => 0x15,
            Colour::Cyan => 0x16,
            Colour::White => 0x17,
        }
    }
}

/// Colour attributes prepended to every teletext row.
///
/// A black background is the page default and emits nothing. A background
/// with no foreground gets a white foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attributes {
    pub foreground: Option<Colour>,
    pub background: Option<Colour>,
}

impl Attributes {
    pub const fn none() -> Self {
        Self {
            foreground: None,
            background: None,
        }
    }

    pub const fn foreground(colour: Colour) -> Self {
        Self {
            foreground: Some(colour),
            background: None,
        }
    }

    pub const fn background(colour: Colour) -> Self {
        Self {
            foreground: None,
            background: Some(colour),
        }
    }

    pub const fn with_foreground(mut self, colour: Colour) -> Self {
        self.foreground = Some(colour);
        self
    }

    pub const fn with_background(mut self, colour: Colour) -> Self {
        self.background = Some(colour);
        self
    }

    /// Builds attributes from colour names such as `"yellow"`. Empty names
    /// count as absent.
    pub fn from_names(foreground: Option<&str>, background: Option<&str>) -> Result<Self> {
        let background = parse_name(background, SextantError::InvalidBackground)?;
        let foreground = parse_name(foreground, SextantError::InvalidForeground)?;
        Ok(Self {
            foreground,
            background,
        })
    }

    /// The attribute bytes to emit at the start of each row. Empty if the
    /// rows should pass through untouched.
    pub fn prefix(&self) -> String {
        let background = self.background.filter(|&bg| bg != Colour::Black);
        let foreground = match (self.foreground, background) {
            (None, Some(_)) => Some(Colour::White),
            (fg, _) => fg,
        };

        let mut prefix = String::with_capacity(3);
        if let Some(bg) = background {
            prefix.push(bg.byte() as char);
            prefix.push(NEW_BACKGROUND as char);
        }
        if let Some(fg) = foreground {
            prefix.push(fg.byte() as char);
        }
        prefix
    }

    /// Prepends [`prefix`](Self::prefix) to each row.
    pub fn decorate(&self, rows: Vec<String>) -> Vec<String> {
        let prefix = self.prefix();
        if prefix.is_empty() {
            return rows;
        }

        log::debug!("prefixing {} rows with attributes {:02x?}", rows.len(), prefix.as_bytes());
        rows.into_iter()
            .map(|row| {
                let mut decorated = String::with_capacity(prefix.len() + row.len());
                decorated.push_str(&prefix);
                decorated.push_str(&row);
                decorated
            })
            .collect()
    }
}

fn parse_name(name: Option<&str>, err: fn(String) -> SextantError) -> Result<Option<Colour>> {
    match name {
        None | Some("") => Ok(None),
        Some(name) => Colour::from_str(name)
            .map(Some)
            .map_err(|_| err(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::SextantCell;

    fn g1(samples: [u8; 6]) -> u8 {
        TeletextG1::byte(SextantPattern::from(SextantCell(samples)))
    }

    #[test]
    fn block_mosaics() {
        assert_eq!(g1([0x00; 6]), b' ');
        // XX
        // XX
        // X.
        assert_eq!(g1([0xff, 0xff, 0xff, 0xff, 0xff, 0x00]), 0x3f);
        // ..
        // ..
        // .X
        assert_eq!(g1([0x00, 0x00, 0x00, 0x00, 0x00, 0xff]), 0x60);
        assert_eq!(g1([0xff; 6]), 0x7f);
    }

    #[test]
    fn g1_is_a_bijection_onto_the_mosaic_ranges() {
        let bytes = SextantPattern::all()
            .map(TeletextG1::byte)
            .collect::<HashSet<_>>();
        let expected = (0x20..=0x3f).chain(0x60..=0x7f).collect::<HashSet<u8>>();
        assert_eq!(bytes, expected);
    }

    #[test]
    fn colour_bytes() {
        let bytes = Colour::iter().map(Colour::byte).collect::<Vec<_>>();
        assert_eq!(bytes, (0x10..=0x17).collect::<Vec<u8>>());
        assert_eq!(NEW_BACKGROUND, 0x1d);
    }

    #[test]
    fn colour_names() {
        assert_eq!("magenta".parse::<Colour>().unwrap(), Colour::Magenta);
        assert_eq!(Colour::Cyan.to_string(), "cyan");
        assert!("Magenta".parse::<Colour>().is_err());
        assert!("newBackground".parse::<Colour>().is_err());
    }

    #[test]
    fn prefixes() {
        assert_eq!(Attributes::none().prefix(), "");
        assert_eq!(Attributes::foreground(Colour::Yellow).prefix(), "\x13");
        assert_eq!(Attributes::background(Colour::Yellow).prefix(), "\x13\x1d\x17");
        assert_eq!(
            Attributes::background(Colour::Yellow)
                .with_foreground(Colour::Blue)
                .prefix(),
            "\x13\x1d\x14"
        );
    }

    #[test]
    fn black_background_is_dropped() {
        assert_eq!(Attributes::background(Colour::Black).prefix(), "");
        assert_eq!(
            Attributes::background(Colour::Black)
                .with_foreground(Colour::Red)
                .prefix(),
            "\x11"
        );
    }

    #[test]
    fn decorate_passes_rows_through_without_attributes() {
        let rows = vec!["ab".to_string(), "cd".to_string()];
        assert_eq!(Attributes::none().decorate(rows.clone()), rows);
        assert_eq!(
            Attributes::foreground(Colour::Green).decorate(rows),
            ["\x12ab", "\x12cd"]
        );
    }

    #[test]
    fn from_names() {
        assert_eq!(
            Attributes::from_names(Some("blue"), Some("yellow")).unwrap(),
            Attributes::background(Colour::Yellow).with_foreground(Colour::Blue)
        );
        assert_eq!(
            Attributes::from_names(Some("red"), Some("cyan")).unwrap(),
            Attributes::foreground(Colour::Red).with_background(Colour::Cyan)
        );
        assert_eq!(Attributes::from_names(None, Some("")).unwrap(), Attributes::none());

        assert!(matches!(
            Attributes::from_names(Some("purple"), None),
            Err(SextantError::InvalidForeground(name)) if name == "purple"
        ));
        assert!(matches!(
            Attributes::from_names(None, Some("newBackground")),
            Err(SextantError::InvalidBackground(name)) if name == "newBackground"
        ));
    }
}
