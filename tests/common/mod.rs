// Shared fixtures for the integration tests.

#![allow(dead_code)]

use panel_lcd::{Color, Framebuffer, FramebufferInfo, Orientation, PixelDevice, Rect};

/// Assembles font blobs in the packed layout.
pub struct FontBuilder {
    ascent: u8,
    descent: u8,
    glyphs: Vec<(u8, Vec<u8>)>,
}

impl FontBuilder {
    pub fn new(ascent: u8, descent: u8) -> Self {
        Self {
            ascent,
            descent,
            glyphs: Vec::new(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn glyph(
        mut self,
        code: u8,
        advance: i8,
        x: i8,
        y: i8,
        width: u8,
        height: u8,
        bitmap: &[u8],
    ) -> Self {
        assert_eq!(bitmap.len(), (width as usize).div_ceil(8) * height as usize);
        let mut record = vec![advance as u8, width, height, x as u8, y as u8];
        record.extend_from_slice(bitmap);
        self.glyphs.push((code, record));
        self
    }

    /// A record marked empty with the 0xFF advance byte.
    pub fn empty(mut self, code: u8) -> Self {
        self.glyphs.push((code, vec![0xFF, 0, 0, 0, 0]));
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        self.glyphs.sort_by_key(|(code, _)| *code);
        let start = self.glyphs.first().map_or(0x20, |(code, _)| *code);
        let end = self.glyphs.last().map_or(0x20, |(code, _)| *code);
        let count = (end - start) as usize + 1;

        let mut offsets = vec![0xFFFFu16; count];
        let mut records = Vec::new();
        let mut offset = 4 + 2 * count;
        for (code, record) in &self.glyphs {
            offsets[(code - start) as usize] = offset as u16;
            offset += record.len();
            records.extend_from_slice(record);
        }

        let mut blob = vec![self.ascent, self.descent, start, end];
        for offset in offsets {
            blob.extend_from_slice(&offset.to_be_bytes());
        }
        blob.extend_from_slice(&records);
        blob
    }
}

/// The rough "A": 5x7, one byte per row.
pub const A_BITMAP: [u8; 7] = [0x88, 0x88, 0xF8, 0x88, 0x88, 0x88, 0x88];

/// Ascent 7, descent 2. 'A' as above, 'B' a 12-pixel-wide two-byte glyph,
/// 'g' a descender, ' ' an empty space, 0x7F an empty record. 'N' is a 2x3
/// mark that backs the cursor up by 3, 'Z' a 3x1 bar that doesn't move it.
pub fn test_font() -> Vec<u8> {
    FontBuilder::new(7, 2)
        .glyph(b' ', 4, 0, 0, 0, 0, &[])
        .glyph(b'A', 6, 0, 0, 5, 7, &A_BITMAP)
        .glyph(
            b'B',
            13,
            0,
            0,
            12,
            3,
            &[0xFF, 0xF0, 0x80, 0x10, 0xAA, 0xA0],
        )
        .glyph(b'C', 6, 0, 0, 5, 7, &[0x70, 0x88, 0x80, 0x80, 0x80, 0x88, 0x70])
        .glyph(b'N', -3, 0, 4, 2, 3, &[0xC0, 0x40, 0xC0])
        .glyph(b'Z', 0, 0, 0, 3, 1, &[0xE0])
        .glyph(b'g', 6, 1, -2, 4, 6, &[0x70, 0x90, 0x90, 0x70, 0x10, 0x60])
        .empty(0x7F)
        .build()
}

pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;

pub fn screen_clip() -> Rect {
    Rect::new(0, 0, SCREEN_WIDTH as i32 - 1, SCREEN_HEIGHT as i32 - 1)
}

/// Sentinel for pixels nobody wrote.
pub const UNTOUCHED: Color = Color(0x1234);
pub const FG: Color = Color::WHITE;
pub const BG: Color = Color::NAVY;

pub fn screen() -> Vec<Color> {
    vec![UNTOUCHED; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize]
}

/// Framebuffer in portrait coordinates of `SCREEN_WIDTH` x `SCREEN_HEIGHT`.
/// Landscape swaps the panel dimensions so the logical screen keeps the
/// same size either way.
pub fn framebuffer(buffer: &mut [Color], orientation: Orientation) -> Framebuffer<'_> {
    let info = match orientation {
        Orientation::Portrait => FramebufferInfo {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        },
        Orientation::Landscape => FramebufferInfo {
            width: SCREEN_HEIGHT,
            height: SCREEN_WIDTH,
        },
    };
    let mut fb = Framebuffer::new(buffer, info);
    fb.set_orientation(orientation);
    fb.set_foreground(FG);
    fb.set_background(BG);
    fb
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Select,
    Deselect,
    ClearWindow,
    Window(Rect),
    Pixel(Color),
    Fill(Rect, Color),
}

/// Wraps a framebuffer and records every call the rasterizer makes.
pub struct Recorder<'a> {
    pub inner: Framebuffer<'a>,
    pub events: Vec<Event>,
}

impl<'a> Recorder<'a> {
    pub fn new(inner: Framebuffer<'a>) -> Self {
        Self {
            inner,
            events: Vec::new(),
        }
    }

    pub fn pixel_writes(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Pixel(_)))
            .count()
    }

    pub fn windows(&self) -> Vec<Rect> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Window(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> Vec<Rect> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Fill(rect, _) => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl PixelDevice for Recorder<'_> {
    fn set_draw_window(&mut self, window: Rect) {
        self.events.push(Event::Window(window));
        self.inner.set_draw_window(window);
    }

    fn write_pixel(&mut self, color: Color) {
        self.events.push(Event::Pixel(color));
        self.inner.write_pixel(color);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.events.push(Event::Fill(rect, self.inner.foreground()));
        self.inner.fill_rect(rect);
    }

    fn foreground(&self) -> Color {
        self.inner.foreground()
    }

    fn set_foreground(&mut self, color: Color) {
        self.inner.set_foreground(color);
    }

    fn background(&self) -> Color {
        self.inner.background()
    }

    fn set_background(&mut self, color: Color) {
        self.inner.set_background(color);
    }

    fn orientation(&self) -> Orientation {
        self.inner.orientation()
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.inner.set_orientation(orientation);
    }

    fn display_width(&self) -> u32 {
        self.inner.display_width()
    }

    fn display_height(&self) -> u32 {
        self.inner.display_height()
    }

    fn select(&mut self) {
        self.events.push(Event::Select);
        self.inner.select();
    }

    fn deselect(&mut self) {
        self.events.push(Event::Deselect);
        self.inner.deselect();
    }

    fn clear_window(&mut self) {
        self.events.push(Event::ClearWindow);
        self.inner.clear_window();
    }

    fn set_contrast(&mut self, level: u8) {
        self.inner.set_contrast(level);
    }

    fn set_brightness(&mut self, level: u8) {
        self.inner.set_brightness(level);
    }
}

/// Every pixel of `fb` inside `area`, row-major.
pub fn snapshot(fb: &Framebuffer<'_>, area: Rect) -> Vec<Color> {
    let mut pixels = Vec::new();
    for y in area.y1..=area.y2 {
        for x in area.x1..=area.x2 {
            pixels.push(fb.pixel(x, y).unwrap_or(UNTOUCHED));
        }
    }
    pixels
}

/// Coordinates of every pixel of `fb` that isn't `UNTOUCHED`.
pub fn touched(fb: &Framebuffer<'_>) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..SCREEN_HEIGHT as i32 {
        for x in 0..SCREEN_WIDTH as i32 {
            if fb.pixel(x, y) != Some(UNTOUCHED) {
                out.push((x, y));
            }
        }
    }
    out
}
