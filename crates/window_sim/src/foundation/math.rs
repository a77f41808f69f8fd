//! Math utilities and types
//!
//! Integer 2D types for surface-space geometry and the rectangle
//! containment tests used by hit testing.

pub use nalgebra::Vector2;

/// 2D integer vector (surface pixels, buffer pixels or offsets)
pub type Vec2i = Vector2<i32>;

/// Axis-aligned rectangle in integer pixel space
///
/// `x`/`y` is the top-left corner. A rectangle may have zero width or
/// height, in which case it contains no points under half-open tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from two inclusive corners
    ///
    /// `(x0, y0)` and `(x1, y1)` are both inside the resulting rectangle.
    /// Spans wider than `i32::MAX` saturate.
    pub const fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1.saturating_sub(x0).saturating_add(1),
            height: y1.saturating_sub(y0).saturating_add(1),
        }
    }

    /// Exclusive right edge, saturating at `i32::MAX`
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at `i32::MAX`
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Half-open containment: `[x, x + width) × [y, y + height)`
    pub fn contains(&self, point: Vec2i) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Intersection of two rectangles, `None` when they do not overlap
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        }
    }
}

/// Integer division rounding up, for positive divisors
///
/// Never overflows, however large `value` or `divisor` is.
pub const fn div_ceil(value: i32, divisor: i32) -> i32 {
    let quotient = value / divisor;
    if value % divisor > 0 {
        quotient + 1
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(10, 20, 5, 4);
        assert!(rect.contains(Vec2i::new(10, 20)));
        assert!(rect.contains(Vec2i::new(14, 23)));
        assert!(!rect.contains(Vec2i::new(15, 23)));
        assert!(!rect.contains(Vec2i::new(14, 24)));
        assert!(!Rect::new(0, 0, 0, 10).contains(Vec2i::new(0, 0)));
    }

    #[test]
    fn test_from_corners_is_inclusive() {
        let rect = Rect::from_corners(-8, 0, -1, 10);
        assert_eq!(rect.width, 8);
        assert!(rect.contains(Vec2i::new(-8, 0)));
        assert!(rect.contains(Vec2i::new(-1, 10)));
        assert!(!rect.contains(Vec2i::new(0, 10)));
        assert!(!rect.contains(Vec2i::new(-1, 11)));
    }

    #[test]
    fn test_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(Rect::new(5, 5, 5, 5)));
        assert_eq!(a.intersect(&Rect::new(10, 0, 5, 5)), None);
    }

    #[test]
    fn test_div_ceil() {
        assert_eq!(div_ceil(11, 1), 11);
        assert_eq!(div_ceil(11, 2), 6);
        assert_eq!(div_ceil(12, 4), 3);
        assert_eq!(div_ceil(1, 3), 1);
        assert_eq!(div_ceil(0, 5), 0);
        assert_eq!(div_ceil(-3, 2), -1);
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        assert_eq!(div_ceil(11, i32::MAX), 1);
        assert_eq!(div_ceil(i32::MAX, 2), 1 << 30);
        assert_eq!(div_ceil(i32::MAX, i32::MAX), 1);

        let rect = Rect::new(i32::MAX - 4, 0, 10, i32::MAX);
        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), i32::MAX);
        assert!(rect.contains(Vec2i::new(i32::MAX - 1, 5)));
    }
}
