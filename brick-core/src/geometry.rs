//! Pixel geometry value types

/// Pixel coordinate, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Point shifted right by `dx` pixels, saturating at `u32::MAX`
    pub const fn offset_x(self, dx: u32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y,
        }
    }
}

/// Pixel rectangle
///
/// `p1` is the top-left corner and `p2` the exclusive bottom-right corner.
/// Ordering is the caller's responsibility: a rectangle with `p2` above or
/// left of `p1` is treated as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub p1: Point,
    pub p2: Point,
}

impl Rect {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Rectangle from its origin and size
    ///
    /// The far corner saturates at `u32::MAX`.
    pub const fn with_size(origin: Point, width: u32, height: u32) -> Self {
        Self {
            p1: origin,
            p2: Point::new(origin.x.saturating_add(width), origin.y.saturating_add(height)),
        }
    }

    pub fn width(&self) -> u32 {
        self.p2.x.saturating_sub(self.p1.x)
    }

    pub fn height(&self) -> u32 {
        self.p2.y.saturating_sub(self.p1.y)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Monochrome pixel colour
///
/// A set framebuffer bit is a dark pixel on the LCD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Pixel bit set
    #[default]
    Black,
    /// Pixel bit cleared
    White,
}

impl Color {
    /// Whether drawing in this colour sets bits
    pub const fn is_set(self) -> bool {
        matches!(self, Color::Black)
    }

    pub const fn inverse(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub const fn from_bit(set: bool) -> Self {
        if set {
            Color::Black
        } else {
            Color::White
        }
    }
}

/// Horizontal text alignment inside a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Direction an arrow points to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    Left,
    Right,
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_size() {
        let rect = Rect::new(Point::new(10, 20), Point::new(40, 28));
        assert_eq!(rect.width(), 30);
        assert_eq!(rect.height(), 8);
        assert_eq!(Rect::with_size(Point::new(10, 20), 30, 8), rect);
    }

    #[test]
    fn test_near_max_coordinates_saturate() {
        let p = Point::new(u32::MAX - 2, 7);
        assert_eq!(p.offset_x(10), Point::new(u32::MAX, 7));

        let rect = Rect::with_size(Point::new(u32::MAX - 1, u32::MAX - 3), 5, 2);
        assert_eq!(rect.p2, Point::new(u32::MAX, u32::MAX - 1));
        assert_eq!(rect.width(), 1);
        assert_eq!(rect.height(), 2);
    }

    #[test]
    fn test_inverted_rect_is_empty() {
        let rect = Rect::new(Point::new(40, 20), Point::new(10, 28));
        assert_eq!(rect.width(), 0);
        assert!(rect.is_empty());
    }

    #[test]
    fn test_color_inverse() {
        assert_eq!(Color::Black.inverse(), Color::White);
        assert_eq!(Color::White.inverse(), Color::Black);
        assert!(Color::from_bit(true).is_set());
        assert!(!Color::from_bit(false).is_set());
    }
}
