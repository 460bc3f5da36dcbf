//! Glyph rasterizer.
//!
//! Draws one glyph of a [`Font`] into a [`PixelDevice`], clipped to a
//! caller-supplied rectangle. The cell of a glyph is `advance` pixels wide
//! and `font.height()` tall; the bitmap sits on the baseline, `ascent`
//! pixels below the top of the cell.
//!
//! Nothing here fails. A missing glyph draws nothing and advances by 0, a
//! glyph clipped away draws nothing but still advances, and a glyph that
//! sticks out past the right clip edge is painted in the background color
//! only.

pub mod clip;
pub mod emit;

use crate::device::PixelDevice;
use crate::font::{Font, Glyph};
use crate::geometry::Rect;

use self::clip::{bitmap_rect, cell_margins, clip_bitmap};

/// Screen rectangle of the bitmap of `glyph` for a cell whose top-left
/// corner is (`x`, `y`).
pub fn glyph_bitmap_rect(font: &Font<'_>, glyph: &Glyph<'_>, x: i32, y: i32) -> Rect {
    let bitmap_x = x + i32::from(glyph.x);
    let bitmap_y =
        y + i32::from(font.ascent()) - (i32::from(glyph.y) + i32::from(glyph.height));
    bitmap_rect(glyph, bitmap_x, bitmap_y)
}

/// Cell rectangle of `glyph` with its top-left corner at (`x`, `y`).
pub fn glyph_cell_rect(font: &Font<'_>, glyph: &Glyph<'_>, x: i32, y: i32) -> Rect {
    Rect::new(
        x,
        y,
        x + i32::from(glyph.advance) - 1,
        y + i32::from(font.height()) - 1,
    )
}

/// Paint the background margins of the cell around the bitmap, leaving the
/// bitmap area for the pixel stream.
fn fill_cell_background<D: PixelDevice>(dev: &mut D, cell: Rect, bitmap: Rect) {
    let foreground = dev.foreground();
    dev.set_foreground(dev.background());
    for margin in cell_margins(cell, bitmap).into_iter().flatten() {
        dev.fill_rect(margin);
    }
    dev.set_foreground(foreground);
}

/// Draw the glyph for `code` with its cell's top-left corner at (`x`, `y`).
///
/// Returns the glyph's advance whatever was visible, or 0 when the font has
/// no glyph for `code`.
pub fn draw_glyph<D: PixelDevice>(
    dev: &mut D,
    font: &Font<'_>,
    x: i32,
    y: i32,
    clip: Rect,
    code: u8,
    fill_background: bool,
) -> i32 {
    let Some(glyph) = font.glyph(code) else {
        log::trace!("no glyph for {:#04x}", code);
        return 0;
    };

    let bitmap = glyph_bitmap_rect(font, &glyph, x, y);

    if fill_background {
        let cell = glyph_cell_rect(font, &glyph, x, y).intersect(&clip);
        fill_cell_background(dev, cell, bitmap);
    }

    if let Some(visible) = clip_bitmap(bitmap, &clip) {
        if !visible.paint {
            log::trace!("glyph {:#04x} at {} crosses clip edge {}, not painted", code, x, clip.x2);
        }
        dev.transaction(|dev| emit::emit_glyph(dev, &glyph, &visible));
    }

    i32::from(glyph.advance)
}

/// Advance of the glyph for `code`, or 0 when the font has none.
pub fn measure_glyph(font: &Font<'_>, code: u8) -> i32 {
    font.glyph(code).map_or(0, |glyph| i32::from(glyph.advance))
}
