//! Text rendering for the instrument front-panel LCD.
//!
//! Glyphs come from packed 1-bit bitmap fonts ([`font`]), get clipped and
//! decoded by the rasterizer ([`raster`]) and are streamed into anything that
//! implements [`PixelDevice`]. [`text`] lays glyphs out along a line and
//! measures runs for truncation; [`Lcd`] ties a device, its power state and
//! the current font together.

#![cfg_attr(not(test), no_std)]

pub mod color;
pub mod config;
pub mod device;
pub mod font;
pub mod fonts;
pub mod framebuffer;
pub mod geometry;
pub mod lcd;
pub mod logger;
pub mod raster;
pub mod text;

pub use color::Color;
pub use config::DisplayConfig;
pub use device::{Orientation, PixelDevice};
pub use font::{Font, FontError, Glyph};
pub use framebuffer::{Framebuffer, FramebufferInfo};
pub use geometry::Rect;
pub use lcd::Lcd;
pub use raster::{draw_glyph, measure_glyph};
pub use text::{draw_text, measure_text, Text};
