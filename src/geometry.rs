/// Inclusive pixel rectangles used for clipping and window addressing.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Rectangle covering a `width` x `height` display. Sizes past
    /// `i32::MAX` saturate.
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, last_coord(width), last_coord(height))
    }

    /// Width in pixels; zero or negative when the rectangle is inverted.
    pub const fn width(&self) -> i32 {
        self.x2 - self.x1 + 1
    }

    pub const fn height(&self) -> i32 {
        self.y2 - self.y1 + 1
    }

    pub const fn is_empty(&self) -> bool {
        self.x1 > self.x2 || self.y1 > self.y2
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Overlap of two rectangles. May come back empty.
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect {
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
            x2: self.x2.min(other.x2),
            y2: self.y2.min(other.y2),
        }
    }
}

const fn last_coord(size: u32) -> i32 {
    if size > i32::MAX as u32 {
        i32::MAX - 1
    } else {
        size as i32 - 1
    }
}
