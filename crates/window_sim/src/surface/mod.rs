//! Host surface interface
//!
//! The compositor never rasterises anything itself. Everything it draws and
//! every pointer state it reads goes through a host-provided [`Surface`].

mod buffer;
mod headless;
mod pixel;

pub use buffer::PixelBuffer;
pub use headless::{DrawCommand, HeadlessSurface};
pub use pixel::Pixel;

use crate::foundation::math::Vec2i;
use serde::{Deserialize, Serialize};

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Left (primary) mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

impl MouseButton {
    /// All buttons the compositor polls
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Middle];

    /// Host-conventional button index (0 = left, 1 = right, 2 = middle)
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Middle => 2,
        }
    }
}

/// Polled button state for the current frame
///
/// `pressed` and `released` are edges: true only on the frame the state
/// changed relative to the previous poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Went down this frame
    pub pressed: bool,
    /// Is down
    pub held: bool,
    /// Went up this frame
    pub released: bool,
}

impl ButtonState {
    /// Derive edges from the previous and current down state
    pub const fn from_transition(was_down: bool, is_down: bool) -> Self {
        Self {
            pressed: is_down && !was_down,
            held: is_down,
            released: was_down && !is_down,
        }
    }
}

/// Host drawing and input interface consumed by the compositor
///
/// Draw calls go to the current draw target: the main surface by default,
/// or a window buffer installed with [`Surface::swap_draw_target`].
pub trait Surface {
    /// Pointer position in surface coordinates
    fn mouse_position(&self) -> Vec2i;

    /// State of `button` for the current frame
    fn button(&self, button: MouseButton) -> ButtonState;

    /// Scroll wheel delta for the current frame
    fn scroll_delta(&self) -> i32;

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, position: Vec2i, size: Vec2i, color: Pixel);

    /// Outline a rectangle
    ///
    /// The outline spans `position ..= position + size`, one pixel larger
    /// than the equivalent fill.
    fn draw_rect(&mut self, position: Vec2i, size: Vec2i, color: Pixel);

    /// Draw a line segment (both ends inclusive)
    fn draw_line(&mut self, from: Vec2i, to: Vec2i, color: Pixel);

    /// Draw a string with the host's built-in 8x8 font
    fn draw_string(&mut self, position: Vec2i, text: &str, color: Pixel);

    /// Blit `buffer` at `position`, magnifying each pixel `scale` times
    /// (nearest neighbour)
    fn draw_buffer(&mut self, position: Vec2i, buffer: &PixelBuffer, scale: u32);

    /// Redirect subsequent draw calls
    ///
    /// `Some(buffer)` makes `buffer` the draw target; `None` restores the
    /// main surface. The previously installed buffer, if any, is handed
    /// back to the caller.
    fn swap_draw_target(&mut self, target: Option<PixelBuffer>) -> Option<PixelBuffer>;
}
