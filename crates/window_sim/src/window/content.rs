//! Window content hooks
//!
//! The compositor has no idea what a window shows. Each window carries a
//! [`WindowContent`] that draws into the window's buffer when asked to.

use super::{WindowDirectory, WindowId, WindowInfo};
use crate::foundation::math::Vec2i;
use crate::surface::{ButtonState, MouseButton, Pixel, Surface};

/// Content provider lifecycle
///
/// The hooks run with the window's buffer installed as the surface's draw
/// target, so every draw call through [`WindowContext::surface`] lands in
/// the window's own buffer in buffer coordinates.
pub trait WindowContent {
    /// Called once when the window is added to a manager
    ///
    /// Returning `false` schedules the window for destruction; it then
    /// never receives [`WindowContent::on_update`] or
    /// [`WindowContent::on_destroy`].
    fn on_create(&mut self, ctx: &mut WindowContext<'_>) -> bool {
        let _ = ctx;
        true
    }

    /// Called every frame (or every tick for throttled windows)
    ///
    /// `elapsed` is the time in seconds since the previous call. Returning
    /// `false` asks for the window to be closed.
    fn on_update(&mut self, ctx: &mut WindowContext<'_>, elapsed: f32) -> bool;

    /// Called once before a successfully created window is removed
    fn on_destroy(&mut self) {}
}

/// What a content hook can see and draw with
pub struct WindowContext<'a> {
    surface: &'a mut dyn Surface,
    window: WindowInfo,
    directory: &'a WindowDirectory,
}

impl<'a> WindowContext<'a> {
    pub(crate) fn new(
        surface: &'a mut dyn Surface,
        window: WindowInfo,
        directory: &'a WindowDirectory,
    ) -> Self {
        Self {
            surface,
            window,
            directory,
        }
    }

    /// Draw target: the window's buffer
    pub fn surface(&mut self) -> &mut dyn Surface {
        &mut *self.surface
    }

    /// This window's state at the start of the hook
    pub const fn window(&self) -> &WindowInfo {
        &self.window
    }

    /// Look up another window by id
    pub fn sibling(&self, id: WindowId) -> Option<&WindowInfo> {
        self.directory.get(id)
    }

    /// Every window's snapshot
    pub const fn directory(&self) -> &WindowDirectory {
        self.directory
    }

    /// Logical width of the buffer
    pub fn width(&self) -> i32 {
        self.window.width()
    }

    /// Logical height of the buffer
    pub fn height(&self) -> i32 {
        self.window.height()
    }

    /// Pointer position in surface coordinates
    pub fn mouse(&self) -> Vec2i {
        self.surface.mouse_position()
    }

    /// Pointer position in buffer coordinates
    pub fn local_mouse(&self) -> Vec2i {
        self.window.local_point(self.mouse())
    }

    /// Whether the pointer is over this window's body
    pub fn mouse_in_bounds(&self) -> bool {
        self.window.contains(self.mouse())
    }

    /// Button state for the current frame
    pub fn button(&self, button: MouseButton) -> ButtonState {
        self.surface.button(button)
    }

    /// Fill the whole buffer with `color`
    pub fn clear(&mut self, color: Pixel) {
        let size = self.window.geometry.size;
        self.surface.fill_rect(Vec2i::zeros(), size, color);
    }
}
