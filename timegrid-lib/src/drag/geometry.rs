//! Element geometry

/// An element's bounds in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Horizontal center, unrounded.
    pub fn center_x(&self) -> f32 {
        f32::from(self.x) + f32::from(self.width) / 2.0
    }

    /// Vertical center, unrounded.
    pub fn center_y(&self) -> f32 {
        f32::from(self.y) + f32::from(self.height) / 2.0
    }
}

/// Direction along which siblings are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Side by side, like columns. Measured on x.
    Horizontal,
    /// Stacked, like rows. Measured on y.
    Vertical,
}

impl Axis {
    /// The pointer coordinate along this axis.
    pub fn position(self, x: u16, y: u16) -> f32 {
        match self {
            Axis::Horizontal => f32::from(x),
            Axis::Vertical => f32::from(y),
        }
    }

    /// The rectangle's center along this axis.
    pub fn center(self, rect: &Rect) -> f32 {
        match self {
            Axis::Horizontal => rect.center_x(),
            Axis::Vertical => rect.center_y(),
        }
    }
}

/// One element of a draggable collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Sibling<K> {
    pub key: K,
    pub rect: Rect,
}

impl<K> Sibling<K> {
    pub fn new(key: K, rect: Rect) -> Self {
        Self { key, rect }
    }
}
