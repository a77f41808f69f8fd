//! Construction-time window options

use super::geometry::DEFAULT_BANNER_HEIGHT;
use super::{Permissions, WindowId};
use crate::foundation::math::Vec2i;
use crate::surface::MouseButton;

/// Options recognized when constructing a [`Window`](super::Window)
///
/// ```rust
/// use window_sim::{MouseButton, Permissions, WindowConfig};
///
/// let config = WindowConfig::new(2, "Slice", 200, 60)
///     .with_position(420, 40)
///     .with_permissions(Permissions::MOVE | Permissions::RESIZE_X)
///     .with_body_drag(Some(MouseButton::Right))
///     .with_tick_rate(20.0);
/// assert_eq!(config.banner, Some(10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Identifier, unique within a manager
    pub id: WindowId,
    /// Display name shown in the banner
    pub name: String,
    /// Logical width
    pub width: i32,
    /// Logical height
    pub height: i32,
    /// Initial top-left of the body
    pub position: Vec2i,
    /// Initial magnification
    pub scale: i32,
    /// Pointer capabilities
    pub permissions: Permissions,
    /// Banner height, `None` for no banner
    pub banner: Option<i32>,
    /// Button that drags the window from anywhere on it
    pub body_drag: Option<MouseButton>,
    /// Fixed content update rate in ticks per second
    pub tick_rate: Option<f32>,
    /// Start hidden
    pub hidden: bool,
}

impl WindowConfig {
    /// Create a configuration with default position, scale and permissions
    pub fn new(id: WindowId, name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            id,
            name: name.into(),
            width,
            height,
            position: Vec2i::zeros(),
            scale: 1,
            permissions: Permissions::default(),
            banner: Some(DEFAULT_BANNER_HEIGHT),
            body_drag: None,
            tick_rate: None,
            hidden: false,
        }
    }

    /// Set the initial position
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = Vec2i::new(x, y);
        self
    }

    /// Set the magnification
    pub fn with_scale(mut self, scale: i32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the pointer capabilities
    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    /// Show a banner of `height` pixels, or none
    pub fn with_banner(mut self, height: Option<i32>) -> Self {
        self.banner = height;
        self
    }

    /// Allow dragging from anywhere on the window with `button`
    pub fn with_body_drag(mut self, button: Option<MouseButton>) -> Self {
        self.body_drag = button;
        self
    }

    /// Throttle content updates to `rate` ticks per second
    pub fn with_tick_rate(mut self, rate: f32) -> Self {
        self.tick_rate = Some(rate);
        self
    }

    /// Start hidden or visible
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}
