//! Wraps Unicode sextant rows in a minimal HTML page.
//!
//! The page expects the Unscii 8 font at `fonts/unscii-8.otf` relative to the
//! document. Unscii squashes each 2×3 sextant into an 8×8 pixel glyph, so
//! images should be stretched vertically by 1.5 beforehand to keep their
//! aspect ratio.

pub const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html><head>
<meta charset="UTF-8">
<style>
body {
    background-color: black;
    color: white;
}
@font-face {
    font-family: 'Unscii';
    src: url('fonts/unscii-8.otf') format('opentype');
    -webkit-font-smoothing: none;
    font-smooth: never;
}
pre {
    font-size: 16px;
    font-family: Unscii;
    line-height: 16px;
}
</style></head><body><pre>"#;

pub const HTML_FOOT: &str = "</pre></body></html>";

pub fn wrap<S: AsRef<str>>(rows: &[S]) -> String {
    let len = rows.iter().map(|row| row.as_ref().len() + 1).sum::<usize>();
    let mut page = String::with_capacity(HTML_HEAD.len() + len + HTML_FOOT.len());

    page.push_str(HTML_HEAD);
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            page.push('\n');
        }
        page.push_str(row.as_ref());
    }
    page.push_str(HTML_FOOT);

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SextantGrid;

    #[test]
    fn empty_page() {
        assert_eq!(wrap::<&str>(&[]), format!("{HTML_HEAD}{HTML_FOOT}"));
    }

    #[test]
    fn rows_are_newline_separated() {
        let buffer = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
        let grid = SextantGrid::new(&buffer, 2).unwrap();

        let html = grid.html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("<pre> \n\u{2588}</pre></body></html>"));
    }
}
