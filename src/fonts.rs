/// Built-in fonts.
///
/// `SMALL` is a 5x7 face with just enough characters for readouts such as
/// `+12.50 V` or `1.000 A`. Cells are 8 pixels tall (ascent 7, descent 1)
/// and most glyphs advance by 6.

use crate::font::Font;

static SMALL_DATA: [u8; 365] = [
    // ascent, descent, first code, last code
    7, 1, 0x20, 0x6D,
    // glyph offsets, big-endian
    0x00, 0xA0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xA5,
    0xFF, 0xFF, 0x00, 0xAF, 0x00, 0xB5, 0xFF, 0xFF, 0x00, 0xBC, 0x00, 0xC8,
    0x00, 0xD4, 0x00, 0xE0, 0x00, 0xEC, 0x00, 0xF8, 0x01, 0x04, 0x01, 0x10,
    0x01, 0x1C, 0x01, 0x28, 0x01, 0x34, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01, 0x3F, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x01, 0x4B, 0x01, 0x57, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01, 0x63,
    // ' '
    0x06, 0x00, 0x00, 0x00, 0x00,
    // '+'
    0x06, 0x05, 0x05, 0x00, 0x01, 0x20, 0x20, 0xF8, 0x20, 0x20,
    // '-'
    0x06, 0x05, 0x01, 0x00, 0x03, 0xF8,
    // '.'
    0x03, 0x02, 0x02, 0x00, 0x00, 0xC0, 0xC0,
    // '0'
    0x06, 0x05, 0x07, 0x00, 0x00, 0x70, 0x88, 0x98, 0xA8, 0xC8, 0x88, 0x70,
    // '1'
    0x06, 0x05, 0x07, 0x00, 0x00, 0x20, 0x60, 0x20, 0x20, 0x20, 0x20, 0x70,
    // '2'
    0x06, 0x05, 0x07, 0x00, 0x00, 0x70, 0x88, 0x08, 0x10, 0x20, 0x40, 0xF8,
    // '3'
    0x06, 0x05, 0x07, 0x00, 0x00, 0xF8, 0x10, 0x20, 0x10, 0x08, 0x88, 0x70,
    // '4'
    0x06, 0x05, 0x07, 0x00, 0x00, 0x10, 0x30, 0x50, 0x90, 0xF8, 0x10, 0x10,
    // '5'
    0x06, 0x05, 0x07, 0x00, 0x00, 0xF8, 0x80, 0xF0, 0x08, 0x08, 0x88, 0x70,
    // '6'
    0x06, 0x05, 0x07, 0x00, 0x00, 0x30, 0x40, 0x80, 0xF0, 0x88, 0x88, 0x70,
    // '7'
    0x06, 0x05, 0x07, 0x00, 0x00, 0xF8, 0x08, 0x10, 0x20, 0x40, 0x40, 0x40,
    // '8'
    0x06, 0x05, 0x07, 0x00, 0x00, 0x70, 0x88, 0x88, 0x70, 0x88, 0x88, 0x70,
    // '9'
    0x06, 0x05, 0x07, 0x00, 0x00, 0x70, 0x88, 0x88, 0x78, 0x08, 0x10, 0x60,
    // ':'
    0x04, 0x02, 0x06, 0x01, 0x00, 0xC0, 0xC0, 0x00, 0x00, 0xC0, 0xC0,
    // 'A'
    0x06, 0x05, 0x07, 0x00, 0x00, 0x70, 0x88, 0x88, 0xF8, 0x88, 0x88, 0x88,
    // 'V'
    0x06, 0x05, 0x07, 0x00, 0x00, 0x88, 0x88, 0x88, 0x88, 0x88, 0x50, 0x20,
    // 'W'
    0x06, 0x05, 0x07, 0x00, 0x00, 0x88, 0x88, 0x88, 0xA8, 0xA8, 0xA8, 0x50,
    // 'm'
    0x06, 0x05, 0x05, 0x00, 0x00, 0xD0, 0xA8, 0xA8, 0xA8, 0xA8,
];

pub static SMALL: Font<'static> = Font::new_unchecked(&SMALL_DATA);
