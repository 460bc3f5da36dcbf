/// Panel configuration.
///
/// The panel size is not part of it: the device reports that through
/// `display_width`/`display_height`.

use crate::device::Orientation;

/// Contrast applied when the panel is switched on.
pub const DEFAULT_CONTRAST: u8 = 64;
/// Backlight level applied when the panel is switched on.
pub const DEFAULT_BRIGHTNESS: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub orientation: Orientation,
    pub contrast: u8,
    pub brightness: u8,
}

impl DisplayConfig {
    /// Upright, with the front panel's usual on-levels.
    pub const fn new() -> Self {
        Self {
            orientation: Orientation::Portrait,
            contrast: DEFAULT_CONTRAST,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub const fn with_contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }

    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}
