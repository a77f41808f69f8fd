//! Window geometry and hit queries
//!
//! A window has two sizes. The *logical* size is the size of its pixel
//! buffer; the *real* footprint is what it covers on the surface: the
//! logical size magnified by the integer scale, plus the banner strip drawn
//! above the body.

use crate::foundation::math::{Rect, Vec2i};

/// Banner height used when a window does not specify one
pub const DEFAULT_BANNER_HEIGHT: i32 = 10;

/// Position, logical size, scale and banner of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    /// Top-left of the body (below the banner) in surface coordinates
    pub position: Vec2i,
    /// Logical (buffer) size, at least 1x1
    pub size: Vec2i,
    /// Buffer pixel to surface pixel magnification, at least 1
    pub scale: i32,
    /// Banner height, `None` when the window has no banner
    pub banner: Option<i32>,
}

impl WindowGeometry {
    /// Height of the banner strip, 0 without a banner
    pub fn banner_height(&self) -> i32 {
        self.banner.unwrap_or(0)
    }

    /// Whether a banner is drawn above the body
    pub const fn has_banner(&self) -> bool {
        self.banner.is_some()
    }

    /// Body width on the surface
    pub fn body_width(&self) -> i32 {
        self.size.x.saturating_mul(self.scale)
    }

    /// Body height on the surface
    pub fn body_height(&self) -> i32 {
        self.size.y.saturating_mul(self.scale)
    }

    /// On-screen width
    pub fn real_width(&self) -> i32 {
        self.body_width()
    }

    /// On-screen height, banner included
    pub fn real_height(&self) -> i32 {
        self.body_height().saturating_add(self.banner_height())
    }

    /// On-screen width and height, `None` if either overflows `i32`
    ///
    /// The other size queries saturate instead, so a window must pass this
    /// check before it is drawn or hit-tested.
    pub fn checked_footprint(&self) -> Option<Vec2i> {
        let width = self.size.x.checked_mul(self.scale)?;
        let height = self.size.y.checked_mul(self.scale)?.checked_add(self.banner_height())?;
        Some(Vec2i::new(width, height))
    }

    /// The same geometry at another scale, if its footprint still fits
    pub fn rescaled(&self, scale: i32) -> Option<Self> {
        let geometry = Self { scale, ..*self };
        geometry.checked_footprint().map(|_| geometry)
    }

    /// The same geometry at another logical size, if its footprint still fits
    pub fn resized(&self, width: i32, height: i32) -> Option<Self> {
        let geometry = Self {
            size: Vec2i::new(width, height),
            ..*self
        };
        geometry.checked_footprint().map(|_| geometry)
    }

    /// The scaled body on the surface
    pub fn body_bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.body_width(), self.body_height())
    }

    /// The banner strip, if any
    pub fn banner_bounds(&self) -> Option<Rect> {
        self.banner.map(|height| {
            Rect::new(self.position.x, self.position.y - height, self.body_width(), height)
        })
    }

    /// Body plus banner strip
    pub fn real_bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y - self.banner_height(),
            self.real_width(),
            self.real_height(),
        )
    }

    /// Translate a surface point into buffer coordinates
    ///
    /// Points left of or above the body map to negative coordinates.
    pub fn to_local(&self, point: Vec2i) -> Vec2i {
        Vec2i::new(
            point.x.saturating_sub(self.position.x).div_euclid(self.scale),
            point.y.saturating_sub(self.position.y).div_euclid(self.scale),
        )
    }

    /// Whether a surface point lies on the body
    pub fn body_contains(&self, point: Vec2i) -> bool {
        self.body_bounds().contains(point)
    }

    /// Whether a surface point lies on the banner strip
    pub fn banner_contains(&self, point: Vec2i) -> bool {
        self.banner_bounds().is_some_and(|banner| banner.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> WindowGeometry {
        WindowGeometry {
            position: Vec2i::new(100, 50),
            size: Vec2i::new(40, 30),
            scale: 2,
            banner: Some(10),
        }
    }

    #[test]
    fn test_real_size_includes_scale_and_banner() {
        let geometry = geometry();
        assert_eq!(geometry.real_width(), 80);
        assert_eq!(geometry.real_height(), 70);
        assert_eq!(geometry.real_bounds(), Rect::new(100, 40, 80, 70));

        let bare = WindowGeometry { banner: None, ..geometry };
        assert_eq!(bare.real_height(), 60);
        assert_eq!(bare.real_bounds(), bare.body_bounds());
    }

    #[test]
    fn test_to_local_divides_by_scale() {
        let geometry = geometry();
        assert_eq!(geometry.to_local(Vec2i::new(100, 50)), Vec2i::new(0, 0));
        assert_eq!(geometry.to_local(Vec2i::new(105, 53)), Vec2i::new(2, 1));
        assert_eq!(geometry.to_local(Vec2i::new(99, 49)), Vec2i::new(-1, -1));
    }

    #[test]
    fn test_body_and_banner_hits() {
        let geometry = geometry();
        assert!(geometry.body_contains(Vec2i::new(179, 109)));
        assert!(!geometry.body_contains(Vec2i::new(180, 109)));
        assert!(geometry.banner_contains(Vec2i::new(100, 40)));
        assert!(!geometry.banner_contains(Vec2i::new(100, 50)));
        assert!(!WindowGeometry { banner: None, ..geometry }.banner_contains(Vec2i::new(100, 45)));
    }

    #[test]
    fn test_footprint_overflow_is_detected() {
        let geometry = geometry();
        assert_eq!(geometry.checked_footprint(), Some(Vec2i::new(80, 70)));
        assert!(geometry.rescaled(i32::MAX / 2).is_none());
        assert!(geometry.resized(i32::MAX, 1).is_none());

        // Body fits but the banner pushes the height over
        let tall = WindowGeometry { scale: 1, ..geometry };
        assert!(tall.resized(40, i32::MAX - 5).is_none());
        assert!(tall.resized(40, i32::MAX - 10).is_some());

        // Unchecked queries saturate rather than panic
        let huge = WindowGeometry {
            scale: i32::MAX / 2,
            ..geometry
        };
        assert_eq!(huge.real_width(), i32::MAX);
        assert_eq!(huge.real_height(), i32::MAX);
    }
}
