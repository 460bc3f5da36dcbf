/// Pixel emission in the order the panel scans.
///
/// The decode is the same in both orientations. Portrait opens one window
/// over the whole visible bitmap and streams it row after row. Landscape
/// opens a one-pixel-tall window per row and streams each row from its last
/// column back to its first, which is how the controller walks a row when
/// the panel is turned on its side.

use crate::color::Color;
use crate::device::{Orientation, PixelDevice};
use crate::font::Glyph;
use crate::geometry::Rect;

use super::clip::VisibleGlyph;

/// Visible bits of one packed row, MSB-first, starting at the clipped
/// start column.
fn row_bits<'a>(
    row: &'a [u8],
    visible: &VisibleGlyph,
) -> impl DoubleEndedIterator<Item = bool> + 'a {
    let start = visible.start_col();
    (start..start + visible.width())
        .map(move |col| row.get(col / 8).map_or(false, |byte| byte & (0x80 >> (col % 8)) != 0))
}

/// Stream every visible pixel of `glyph`. Must run with the bus selected.
pub fn emit_glyph<D: PixelDevice>(dev: &mut D, glyph: &Glyph<'_>, visible: &VisibleGlyph) {
    let foreground = dev.foreground();
    let background = dev.background();
    let color = |set: bool| -> Color {
        if set && visible.paint {
            foreground
        } else {
            background
        }
    };

    let rows = (0..visible.height()).map(|r| glyph.row(visible.start_row + r).unwrap_or(&[]));

    match dev.orientation() {
        Orientation::Portrait => {
            dev.set_draw_window(visible.window);
            for row in rows {
                for set in row_bits(row, visible) {
                    dev.write_pixel(color(set));
                }
            }
        }
        Orientation::Landscape => {
            let window = visible.window;
            for (y, row) in (window.y1..).zip(rows) {
                dev.set_draw_window(Rect::new(window.x1, y, window.x2, y));
                for set in row_bits(row, visible).rev() {
                    dev.write_pixel(color(set));
                }
            }
        }
    }
}
