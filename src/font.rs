/// Packed bitmap fonts.
///
/// A font is a read-only byte blob, usually baked into flash:
///
/// ```text
/// font header
///   0   ascent            u8
///   1   descent           u8
///   2   encoding start    u8
///   3   encoding end      u8
///   4   glyph offsets     (end - start + 1) x u16 big-endian, 0xFFFF = absent
///
/// glyph record
///   0   advance (DWIDTH)  i8, 0xFF = empty record
///   1   width             u8
///   2   height            u8
///   3   x offset          i8
///   4   y offset          i8
///   5   bitmap            height rows of ceil(width / 8) bytes, MSB = leftmost
/// ```
///
/// Offsets are measured from the start of the blob.

use core::fmt;

pub const FONT_HEADER_SIZE: usize = 4;
pub const GLYPH_HEADER_SIZE: usize = 5;

const ABSENT_OFFSET: u16 = 0xFFFF;
const EMPTY_RECORD: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontError {
    /// Blob ends before the header or offset table does.
    Truncated { len: usize, needed: usize },
    /// Encoding start is above encoding end.
    InvalidRange { start: u8, end: u8 },
    /// A glyph offset points at a record that doesn't fit in the blob.
    GlyphOutOfBounds { code: u8, offset: usize },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Truncated { len, needed } => {
                write!(f, "font truncated: {} bytes, need at least {}", len, needed)
            }
            FontError::InvalidRange { start, end } => {
                write!(f, "invalid encoding range {:#04x}..={:#04x}", start, end)
            }
            FontError::GlyphOutOfBounds { code, offset } => {
                write!(f, "glyph {:#04x} at offset {} runs past end of font", code, offset)
            }
        }
    }
}

/// One character's bitmap and metrics, borrowed from its font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    /// Cursor step after drawing.
    pub advance: i8,
    pub x: i8,
    pub y: i8,
    pub width: u8,
    pub height: u8,
    data: &'a [u8],
}

impl<'a> Glyph<'a> {
    /// Bytes per bitmap row.
    pub const fn row_bytes(&self) -> usize {
        (self.width as usize + 7) / 8
    }

    /// The packed bitmap, exactly `row_bytes() * height` long.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn row(&self, row: usize) -> Option<&'a [u8]> {
        let row_bytes = self.row_bytes();
        self.data.get(row * row_bytes..(row + 1) * row_bytes)
    }

    /// Whether the bit at (`col`, `row`) is set. Out of range reads as clear.
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        if col >= self.width as usize {
            return false;
        }
        self.row(row)
            .and_then(|bytes| bytes.get(col / 8))
            .map_or(false, |byte| byte & (0x80 >> (col % 8)) != 0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    data: &'a [u8],
}

impl<'a> Font<'a> {
    /// Wrap a blob without validating it. Lookups stay bounds-checked; a
    /// malformed record just reads as absent.
    pub const fn new_unchecked(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Wrap a blob, checking the header and every glyph record.
    pub fn new(data: &'a [u8]) -> Result<Self, FontError> {
        let font = Self { data };
        font.validate()?;
        log::debug!(
            "font loaded: {} bytes, ascent {}, height {}, codes {:?}",
            data.len(),
            font.ascent(),
            font.height(),
            font.encoding_range()
        );
        Ok(font)
    }

    fn validate(&self) -> Result<(), FontError> {
        let len = self.data.len();
        if len < FONT_HEADER_SIZE {
            return Err(FontError::Truncated { len, needed: FONT_HEADER_SIZE });
        }
        let (start, end) = (self.data[2], self.data[3]);
        if start > end {
            return Err(FontError::InvalidRange { start, end });
        }
        let needed = FONT_HEADER_SIZE + 2 * (end as usize - start as usize + 1);
        if len < needed {
            return Err(FontError::Truncated { len, needed });
        }

        for code in start..=end {
            let Some(offset) = self.offset(code) else {
                continue;
            };
            let empty = self.data.get(offset) == Some(&EMPTY_RECORD);
            if !empty && self.record(offset).is_none() {
                return Err(FontError::GlyphOutOfBounds { code, offset });
            }
        }
        Ok(())
    }

    fn byte(&self, index: usize) -> u8 {
        self.data.get(index).copied().unwrap_or(0)
    }

    pub fn ascent(&self) -> u8 {
        self.byte(0)
    }

    pub fn descent(&self) -> u8 {
        self.byte(1)
    }

    /// Cell height shared by every glyph of the font.
    pub fn height(&self) -> u16 {
        u16::from(self.ascent()) + u16::from(self.descent())
    }

    pub fn encoding_range(&self) -> core::ops::RangeInclusive<u8> {
        self.byte(2)..=self.byte(3)
    }

    pub fn raw(&self) -> &'a [u8] {
        self.data
    }

    fn offset(&self, code: u8) -> Option<usize> {
        let range = self.encoding_range();
        if !range.contains(&code) {
            return None;
        }
        let entry = FONT_HEADER_SIZE + 2 * (code - *range.start()) as usize;
        let bytes = self.data.get(entry..entry + 2)?;
        match u16::from_be_bytes([bytes[0], bytes[1]]) {
            ABSENT_OFFSET => None,
            offset => Some(offset as usize),
        }
    }

    fn record(&self, offset: usize) -> Option<Glyph<'a>> {
        let header = self.data.get(offset..offset + GLYPH_HEADER_SIZE)?;
        if header[0] == EMPTY_RECORD {
            return None;
        }
        let mut glyph = Glyph {
            advance: header[0] as i8,
            width: header[1],
            height: header[2],
            x: header[3] as i8,
            y: header[4] as i8,
            data: &[],
        };
        let start = offset + GLYPH_HEADER_SIZE;
        let len = glyph.row_bytes() * glyph.height as usize;
        glyph.data = self.data.get(start..start + len)?;
        Some(glyph)
    }

    /// Look up the glyph for a code unit.
    pub fn glyph(&self, code: u8) -> Option<Glyph<'a>> {
        self.offset(code).and_then(|offset| self.record(offset))
    }
}
