/// 16-bit RGB565 colors.
///
/// The panel controller takes pixels as `rrrrrggg gggbbbbb`. Anything that
/// reads the framebuffer back (the simulator front-end, screenshots) decodes
/// this exact layout, so the packing must not change.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x0400);
    pub const BLUE: Color = Color(0x001F);
    pub const SILVER: Color = Color(0xC618);
    pub const GRAY: Color = Color(0x8410);
    pub const MAROON: Color = Color(0x8000);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const OLIVE: Color = Color(0x8400);
    pub const LIME: Color = Color(0x07E0);
    pub const AQUA: Color = Color(0x07FF);
    pub const TEAL: Color = Color(0x0410);
    pub const NAVY: Color = Color(0x0010);
    pub const FUCHSIA: Color = Color(0xF81F);
    pub const PURPLE: Color = Color(0x8010);

    /// Pack 8-bit channels, dropping the low bits each channel can't hold.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color((((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | ((b >> 3) as u16))
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// High and low bytes, in the order they go out on the bus.
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub const fn red(self) -> u8 {
        ((self.0 >> 11) << 3) as u8
    }

    pub const fn green(self) -> u8 {
        (((self.0 >> 5) << 2) & 0xFF) as u8
    }

    pub const fn blue(self) -> u8 {
        ((self.0 << 3) & 0xFF) as u8
    }

    /// Expand to the B, G, R, A byte order the simulator window expects.
    pub const fn to_bgra(self) -> [u8; 4] {
        [self.blue(), self.green(), self.red(), 0xFF]
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Color(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}
