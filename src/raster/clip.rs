/// Clipping of a glyph bitmap against the caller's clip rectangle.

use crate::font::Glyph;
use crate::geometry::Rect;

/// The part of a glyph bitmap that survives clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleGlyph {
    /// Screen rectangle the visible pixels occupy.
    pub window: Rect,
    /// First visible bitmap row.
    pub start_row: usize,
    /// Byte of each row holding the first visible column.
    pub start_byte: usize,
    /// Bit (from the MSB) of `start_byte` holding the first visible column.
    pub start_bit: usize,
    /// False when the glyph sticks out past the right clip edge. Such a glyph
    /// is painted in the background color only.
    pub paint: bool,
}

impl VisibleGlyph {
    pub fn start_col(&self) -> usize {
        self.start_byte * 8 + self.start_bit
    }

    pub fn width(&self) -> usize {
        self.window.width() as usize
    }

    pub fn height(&self) -> usize {
        self.window.height() as usize
    }
}

/// Screen rectangle of a glyph bitmap whose top-left corner is at
/// (`x`, `y`). Zero-sized bitmaps give an empty rectangle.
pub fn bitmap_rect(glyph: &Glyph<'_>, x: i32, y: i32) -> Rect {
    Rect::new(
        x,
        y,
        x + i32::from(glyph.width) - 1,
        y + i32::from(glyph.height) - 1,
    )
}

/// Clip `bitmap` (as placed by [`bitmap_rect`]) against `clip`. Each edge is
/// handled on its own: left and top clipping move the decode start, right
/// and bottom clipping shrink the window. `None` when nothing is visible.
pub fn clip_bitmap(bitmap: Rect, clip: &Rect) -> Option<VisibleGlyph> {
    let window = bitmap.intersect(clip);
    if window.is_empty() {
        return None;
    }
    let skipped_cols = (window.x1 - bitmap.x1) as usize;
    let skipped_rows = (window.y1 - bitmap.y1) as usize;
    Some(VisibleGlyph {
        window,
        start_row: skipped_rows,
        start_byte: skipped_cols / 8,
        start_bit: skipped_cols % 8,
        paint: bitmap.x2 <= clip.x2,
    })
}

/// Background margins around `bitmap` inside the (already clipped) `cell`:
/// left, right, top and bottom, in that order. Empty spans come back as
/// `None`.
pub fn cell_margins(cell: Rect, bitmap: Rect) -> [Option<Rect>; 4] {
    let margins = [
        Rect::new(cell.x1, cell.y1, (bitmap.x1 - 1).min(cell.x2), cell.y2),
        Rect::new((bitmap.x2 + 1).max(cell.x1), cell.y1, cell.x2, cell.y2),
        Rect::new(cell.x1, cell.y1, cell.x2, (bitmap.y1 - 1).min(cell.y2)),
        Rect::new(cell.x1, (bitmap.y2 + 1).max(cell.y1), cell.x2, cell.y2),
    ];
    margins.map(|rect| (!rect.is_empty()).then_some(rect))
}
