/// RAM-backed pixel device.
///
/// Stands in for the panel controller in the simulator and in tests. Pixels
/// are stored row-major in the coordinates of the current orientation, and
/// the address window streams the way the controller does: left to right in
/// portrait, right to left in landscape.

use crate::color::Color;
use crate::device::{Orientation, PixelDevice};
use crate::geometry::Rect;

pub struct FramebufferInfo {
    /// Panel width in portrait orientation.
    pub width: u32,
    /// Panel height in portrait orientation.
    pub height: u32,
}

pub struct Framebuffer<'a> {
    buffer: &'a mut [Color],
    info: FramebufferInfo,
    orientation: Orientation,
    foreground: Color,
    background: Color,
    window: Rect,
    /// Pixels streamed into `window` so far.
    streamed: u32,
    selected: bool,
    contrast: u8,
    brightness: u8,
}

impl<'a> Framebuffer<'a> {
    /// `buffer` should hold `width * height` pixels; anything addressed past
    /// its end is silently dropped.
    pub fn new(buffer: &'a mut [Color], info: FramebufferInfo) -> Self {
        let window = Rect::from_size(info.width, info.height);
        Self {
            buffer,
            info,
            orientation: Orientation::Portrait,
            foreground: Color::WHITE,
            background: Color::BLACK,
            window,
            streamed: 0,
            selected: false,
            contrast: 0,
            brightness: 0,
        }
    }

    fn stride(&self) -> u32 {
        self.display_width()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.display_width() || y >= self.display_height() {
            return None;
        }
        Some((y * self.stride() + x) as usize)
    }

    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(slot) = self.index(x, y).and_then(|i| self.buffer.get_mut(i)) {
            *slot = color;
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).and_then(|i| self.buffer.get(i)).copied()
    }

    pub fn clear(&mut self, color: Color) {
        self.buffer.fill(color);
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn window(&self) -> Rect {
        self.window
    }

    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Convert the whole screen to BGRA bytes, row by row, for a front-end
    /// that wants 32-bit pixels. Stops at whichever buffer ends first.
    pub fn copy_bgra(&self, out: &mut [u8]) {
        for (color, dst) in self.buffer.iter().zip(out.chunks_exact_mut(4)) {
            dst.copy_from_slice(&color.to_bgra());
        }
    }
}

impl PixelDevice for Framebuffer<'_> {
    fn set_draw_window(&mut self, window: Rect) {
        self.window = window;
        self.streamed = 0;
    }

    fn write_pixel(&mut self, color: Color) {
        if !self.selected || self.window.is_empty() {
            return;
        }
        let width = self.window.width() as u32;
        let total = width * self.window.height() as u32;
        if self.streamed >= total {
            return;
        }
        let col = (self.streamed % width) as i32;
        let row = (self.streamed / width) as i32;
        self.streamed += 1;

        let x = match self.orientation {
            Orientation::Portrait => self.window.x1 + col,
            Orientation::Landscape => self.window.x2 - col,
        };
        self.put_pixel(x, self.window.y1 + row, color);
    }

    fn fill_rect(&mut self, rect: Rect) {
        let screen = Rect::from_size(self.display_width(), self.display_height());
        let area = rect.intersect(&screen);
        if area.is_empty() {
            return;
        }
        let color = self.foreground;
        for y in area.y1..=area.y2 {
            for x in area.x1..=area.x2 {
                self.put_pixel(x, y, color);
            }
        }
    }

    fn foreground(&self) -> Color {
        self.foreground
    }

    fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    fn background(&self) -> Color {
        self.background
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.clear_window();
    }

    fn display_width(&self) -> u32 {
        match self.orientation {
            Orientation::Portrait => self.info.width,
            Orientation::Landscape => self.info.height,
        }
    }

    fn display_height(&self) -> u32 {
        match self.orientation {
            Orientation::Portrait => self.info.height,
            Orientation::Landscape => self.info.width,
        }
    }

    fn select(&mut self) {
        self.selected = true;
    }

    fn deselect(&mut self) {
        self.selected = false;
    }

    fn clear_window(&mut self) {
        self.window = Rect::from_size(self.display_width(), self.display_height());
        self.streamed = 0;
    }

    fn set_contrast(&mut self, level: u8) {
        self.contrast = level;
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }
}
