/// Single-line text drawing and measurement.
///
/// Text is a run of single-byte code units. It ends at the first zero byte
/// or after an optional unit limit, whichever comes first. There is no
/// wrapping: text running past the clip rectangle keeps advancing the
/// cursor and simply isn't painted.

use crate::device::PixelDevice;
use crate::font::Font;
use crate::geometry::Rect;
use crate::raster::{draw_glyph, measure_glyph};

/// A run of code units to draw or measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text<'a> {
    bytes: &'a [u8],
    limit: Option<usize>,
}

impl<'a> Text<'a> {
    /// Everything up to the first zero byte or the end of `bytes`.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, limit: None }
    }

    /// At most `limit` code units of `bytes`, still stopping at a zero byte.
    pub const fn bounded(bytes: &'a [u8], limit: usize) -> Self {
        Self { bytes, limit: Some(limit) }
    }

    pub fn code_units(&self) -> impl Iterator<Item = u8> + 'a {
        self.bytes
            .iter()
            .take(self.limit.unwrap_or(usize::MAX))
            .copied()
            .take_while(|&code| code != 0)
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(s: &'a str) -> Self {
        Text::new(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Text<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Text::new(bytes)
    }
}

/// Draw `text` with the first cell's top-left corner at (`x`, `y`).
/// Returns the cursor position after the last glyph.
pub fn draw_text<'a, D: PixelDevice>(
    dev: &mut D,
    font: &Font<'_>,
    text: impl Into<Text<'a>>,
    x: i32,
    y: i32,
    clip: Rect,
    fill_background: bool,
) -> i32 {
    let mut x = x;
    for code in text.into().code_units() {
        x += draw_glyph(dev, font, x, y, clip, code, fill_background);
    }
    x
}

/// Width of `text`. With a positive `max_width` the sum stops before the
/// first glyph that would take it past `max_width`; otherwise it's the
/// width of the whole run.
pub fn measure_text<'a>(font: &Font<'_>, text: impl Into<Text<'a>>, max_width: i32) -> i32 {
    let mut width = 0;
    for code in text.into().code_units() {
        let advance = measure_glyph(font, code);
        if max_width > 0 && width + advance > max_width {
            break;
        }
        width += advance;
    }
    width
}
