/// Front-panel display.
///
/// Owns the pixel device, remembers whether the panel is powered, and keeps
/// the current font for glyph-at-a-time drawing. Drawing a string switches
/// the current font to the one it was drawn with.

use crate::color::Color;
use crate::config::DisplayConfig;
use crate::device::PixelDevice;
use crate::font::Font;
use crate::fonts;
use crate::geometry::Rect;
use crate::raster;
use crate::text::{self, Text};

pub struct Lcd<'f, D> {
    device: D,
    config: DisplayConfig,
    font: Font<'f>,
    on: bool,
}

impl<'f, D: PixelDevice> Lcd<'f, D> {
    pub fn new(device: D, config: DisplayConfig) -> Self {
        Self {
            device,
            config,
            font: fonts::SMALL,
            on: false,
        }
    }

    /// Apply the configured orientation and blank the panel. The panel is
    /// forced off even if the device was left on by a previous run.
    pub fn init(&mut self) {
        self.device.set_orientation(self.config.orientation);
        self.on = true;
        self.turn_off();
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn turn_on(&mut self) {
        if self.on {
            return;
        }
        self.device.set_contrast(self.config.contrast);
        self.device.set_brightness(self.config.brightness);
        self.on = true;
        log::debug!("display on");
    }

    pub fn turn_off(&mut self) {
        if !self.on {
            return;
        }
        self.device.set_contrast(0);
        self.device.set_brightness(0);

        let foreground = self.device.foreground();
        self.device.set_foreground(Color::BLACK);
        self.device.fill_rect(self.full_clip());
        self.device.set_foreground(foreground);

        self.on = false;
        log::debug!("display off");
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The whole display, for unclipped drawing.
    pub fn full_clip(&self) -> Rect {
        Rect::from_size(self.device.display_width(), self.device.display_height())
    }

    pub fn font(&self) -> Font<'f> {
        self.font
    }

    pub fn set_font(&mut self, font: Font<'f>) {
        self.font = font;
    }

    /// Draw one glyph of the current font. See [`raster::draw_glyph`].
    pub fn draw_glyph(
        &mut self,
        x: i32,
        y: i32,
        clip: Rect,
        code: u8,
        fill_background: bool,
    ) -> i32 {
        raster::draw_glyph(&mut self.device, &self.font, x, y, clip, code, fill_background)
    }

    /// Draw `text` in `font`, which becomes the current font.
    pub fn draw_text<'t>(
        &mut self,
        text: impl Into<Text<'t>>,
        x: i32,
        y: i32,
        clip: Rect,
        font: Font<'f>,
        fill_background: bool,
    ) -> i32 {
        self.font = font;
        text::draw_text(&mut self.device, &self.font, text, x, y, clip, fill_background)
    }

    /// Advance of one glyph of the current font.
    pub fn measure_glyph(&self, code: u8) -> i32 {
        raster::measure_glyph(&self.font, code)
    }

    /// Measure `text` in `font`, which becomes the current font.
    pub fn measure_text<'t>(
        &mut self,
        text: impl Into<Text<'t>>,
        font: Font<'f>,
        max_width: i32,
    ) -> i32 {
        self.font = font;
        text::measure_text(&self.font, text, max_width)
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn into_inner(self) -> D {
        self.device
    }
}
