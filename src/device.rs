/// Pixel device capability.
///
/// The rasterizer never talks to the panel controller directly; it drives
/// whatever implements [`PixelDevice`]. A real driver maps these calls onto
/// bus transfers (chip select, address window, pixel stream), the
/// [`Framebuffer`](crate::framebuffer::Framebuffer) maps them onto RAM.

use crate::color::Color;
use crate::geometry::Rect;

/// Physical scan direction of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

pub trait PixelDevice {
    /// Address a rectangular region for the following pixel stream.
    fn set_draw_window(&mut self, window: Rect);

    /// Emit one pixel into the current window, advancing within it.
    fn write_pixel(&mut self, color: Color);

    /// Solid-fill `rect` with the current foreground color.
    fn fill_rect(&mut self, rect: Rect);

    fn foreground(&self) -> Color;
    fn set_foreground(&mut self, color: Color);
    fn background(&self) -> Color;
    fn set_background(&mut self, color: Color);

    fn orientation(&self) -> Orientation;
    fn set_orientation(&mut self, orientation: Orientation);

    /// Width of the display as seen in the current orientation.
    fn display_width(&self) -> u32;
    fn display_height(&self) -> u32;

    /// Assert chip select ahead of a pixel stream.
    fn select(&mut self);

    /// Release chip select.
    fn deselect(&mut self);

    /// Reset the address window to the whole display.
    fn clear_window(&mut self);

    fn set_contrast(&mut self, level: u8);
    fn set_brightness(&mut self, level: u8);

    /// Run `f` with the bus held, releasing it and the address window
    /// afterwards.
    fn transaction<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        self.select();
        let result = f(self);
        self.deselect();
        self.clear_window();
        result
    }
}
