//! In-memory surface
//!
//! [`HeadlessSurface`] rasterises the primitives into a software
//! framebuffer, records every draw call and simulates pointer input, so the
//! compositor can be driven frame by frame without a host engine. Text is
//! recorded but not rasterised.

use super::{ButtonState, MouseButton, Pixel, PixelBuffer, Surface};
use crate::foundation::math::{Rect, Vec2i};

/// A draw call as issued by the compositor or a window's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Filled rectangle
    FillRect {
        /// Top-left corner
        position: Vec2i,
        /// Width and height
        size: Vec2i,
        /// Fill color
        color: Pixel,
    },
    /// Rectangle outline
    DrawRect {
        /// Top-left corner
        position: Vec2i,
        /// Width and height
        size: Vec2i,
        /// Line color
        color: Pixel,
    },
    /// Line segment
    Line {
        /// Start point
        from: Vec2i,
        /// End point
        to: Vec2i,
        /// Line color
        color: Pixel,
    },
    /// Text string
    Text {
        /// Top-left of the first glyph
        position: Vec2i,
        /// The string drawn
        text: String,
        /// Text color
        color: Pixel,
    },
    /// Buffer blit
    Buffer {
        /// Top-left corner
        position: Vec2i,
        /// Logical buffer size
        size: Vec2i,
        /// Magnification factor
        scale: u32,
    },
}

/// Software surface for tests and headless hosts
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    screen: PixelBuffer,
    target: Option<PixelBuffer>,
    mouse: Vec2i,
    down: [bool; 3],
    previous: [bool; 3],
    scroll: i32,
    screen_commands: Vec<DrawCommand>,
    buffer_commands: Vec<DrawCommand>,
}

impl HeadlessSurface {
    /// Create a surface with a `width` x `height` framebuffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            screen: PixelBuffer::filled(width, height, Pixel::BLACK),
            target: None,
            mouse: Vec2i::zeros(),
            down: [false; 3],
            previous: [false; 3],
            scroll: 0,
            screen_commands: Vec::new(),
            buffer_commands: Vec::new(),
        }
    }

    /// The main framebuffer
    pub const fn screen(&self) -> &PixelBuffer {
        &self.screen
    }

    /// Draw calls that reached the main framebuffer, in order
    pub fn screen_commands(&self) -> &[DrawCommand] {
        &self.screen_commands
    }

    /// Draw calls that went to a redirected buffer, in order
    pub fn buffer_commands(&self) -> &[DrawCommand] {
        &self.buffer_commands
    }

    /// Forget all recorded draw calls
    pub fn clear_commands(&mut self) {
        self.screen_commands.clear();
        self.buffer_commands.clear();
    }

    /// Whether a window buffer is currently the draw target
    pub const fn is_redirected(&self) -> bool {
        self.target.is_some()
    }

    /// Move the pointer
    pub fn set_mouse(&mut self, x: i32, y: i32) {
        self.mouse = Vec2i::new(x, y);
    }

    /// Set whether `button` is down for the current frame
    pub fn set_button(&mut self, button: MouseButton, down: bool) {
        self.down[button.index()] = down;
    }

    /// Put `button` down
    pub fn press(&mut self, button: MouseButton) {
        self.set_button(button, true);
    }

    /// Let `button` up
    pub fn release(&mut self, button: MouseButton) {
        self.set_button(button, false);
    }

    /// Add to this frame's scroll delta
    pub fn scroll(&mut self, delta: i32) {
        self.scroll += delta;
    }

    /// Finish the frame: the current button state becomes the previous poll
    /// and the scroll delta resets
    pub fn end_frame(&mut self) {
        self.previous = self.down;
        self.scroll = 0;
    }

    fn record(&mut self, command: DrawCommand) {
        if self.target.is_some() {
            self.buffer_commands.push(command);
        } else {
            self.screen_commands.push(command);
        }
    }

    fn canvas(&mut self) -> &mut PixelBuffer {
        self.target.as_mut().unwrap_or(&mut self.screen)
    }

    fn fill(&mut self, rect: Rect, color: Pixel) {
        let canvas = self.canvas();
        let bounds = Rect::new(0, 0, canvas.width() as i32, canvas.height() as i32);
        if let Some(clipped) = rect.intersect(&bounds) {
            for y in clipped.y..clipped.bottom() {
                for x in clipped.x..clipped.right() {
                    canvas.set(x, y, color);
                }
            }
        }
    }

    fn plot_line(&mut self, from: Vec2i, to: Vec2i, color: Pixel) {
        let canvas = self.canvas();
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);
        loop {
            canvas.set(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

impl Surface for HeadlessSurface {
    fn mouse_position(&self) -> Vec2i {
        self.mouse
    }

    fn button(&self, button: MouseButton) -> ButtonState {
        let i = button.index();
        ButtonState::from_transition(self.previous[i], self.down[i])
    }

    fn scroll_delta(&self) -> i32 {
        self.scroll
    }

    fn fill_rect(&mut self, position: Vec2i, size: Vec2i, color: Pixel) {
        self.record(DrawCommand::FillRect { position, size, color });
        self.fill(Rect::new(position.x, position.y, size.x, size.y), color);
    }

    fn draw_rect(&mut self, position: Vec2i, size: Vec2i, color: Pixel) {
        self.record(DrawCommand::DrawRect { position, size, color });
        let (x0, y0) = (position.x, position.y);
        let (x1, y1) = (x0.saturating_add(size.x), y0.saturating_add(size.y));
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        // Four one-pixel strips, clipped like fills
        for edge in [
            Rect::from_corners(left, top, right, top),
            Rect::from_corners(right, top, right, bottom),
            Rect::from_corners(left, bottom, right, bottom),
            Rect::from_corners(left, top, left, bottom),
        ] {
            self.fill(edge, color);
        }
    }

    fn draw_line(&mut self, from: Vec2i, to: Vec2i, color: Pixel) {
        self.record(DrawCommand::Line { from, to, color });
        self.plot_line(from, to, color);
    }

    fn draw_string(&mut self, position: Vec2i, text: &str, color: Pixel) {
        self.record(DrawCommand::Text {
            position,
            text: text.to_string(),
            color,
        });
    }

    fn draw_buffer(&mut self, position: Vec2i, buffer: &PixelBuffer, scale: u32) {
        self.record(DrawCommand::Buffer {
            position,
            size: buffer.size(),
            scale,
        });
        let scale = i32::try_from(scale).unwrap_or(i32::MAX).max(1);
        for y in 0..buffer.height() as i32 {
            let top = position.y.saturating_add(y.saturating_mul(scale));
            for x in 0..buffer.width() as i32 {
                let Some(color) = buffer.get(x, y) else { continue };
                let left = position.x.saturating_add(x.saturating_mul(scale));
                self.fill(Rect::new(left, top, scale, scale), color);
            }
        }
    }

    fn swap_draw_target(&mut self, target: Option<PixelBuffer>) -> Option<PixelBuffer> {
        std::mem::replace(&mut self.target, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_edges() {
        let mut surface = HeadlessSurface::new(8, 8);
        surface.press(MouseButton::Left);
        let state = surface.button(MouseButton::Left);
        assert!(state.pressed && state.held && !state.released);

        surface.end_frame();
        let state = surface.button(MouseButton::Left);
        assert!(!state.pressed && state.held);

        surface.release(MouseButton::Left);
        let state = surface.button(MouseButton::Left);
        assert!(state.released && !state.held);

        surface.end_frame();
        assert_eq!(surface.button(MouseButton::Left), ButtonState::default());
        assert_eq!(surface.button(MouseButton::Right), ButtonState::default());
    }

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut surface = HeadlessSurface::new(4, 4);
        surface.fill_rect(Vec2i::new(2, 2), Vec2i::new(10, 10), Pixel::WHITE);
        assert_eq!(surface.screen().get(3, 3), Some(Pixel::WHITE));
        assert_eq!(surface.screen().get(1, 1), Some(Pixel::BLACK));
    }

    #[test]
    fn test_draw_rect_outline_spans_size_plus_one() {
        let mut surface = HeadlessSurface::new(8, 8);
        surface.draw_rect(Vec2i::new(1, 1), Vec2i::new(3, 3), Pixel::WHITE);
        assert_eq!(surface.screen().get(1, 1), Some(Pixel::WHITE));
        assert_eq!(surface.screen().get(4, 4), Some(Pixel::WHITE));
        assert_eq!(surface.screen().get(2, 2), Some(Pixel::BLACK));
    }

    #[test]
    fn test_redirected_drawing_hits_buffer() {
        let mut surface = HeadlessSurface::new(8, 8);
        assert!(surface.swap_draw_target(Some(PixelBuffer::new(2, 2))).is_none());
        assert!(surface.is_redirected());

        surface.fill_rect(Vec2i::zeros(), Vec2i::new(2, 2), Pixel::WHITE);
        let buffer = surface.swap_draw_target(None).expect("buffer handed back");

        assert_eq!(buffer.get(1, 1), Some(Pixel::WHITE));
        assert_eq!(surface.screen().get(0, 0), Some(Pixel::BLACK));
        assert_eq!(surface.buffer_commands().len(), 1);
        assert!(surface.screen_commands().is_empty());
    }

    #[test]
    fn test_draw_buffer_magnifies() {
        let mut surface = HeadlessSurface::new(8, 8);
        let mut buffer = PixelBuffer::filled(2, 1, Pixel::WHITE);
        buffer.set(1, 0, Pixel::DARK_RED);
        surface.draw_buffer(Vec2i::new(1, 1), &buffer, 3);

        assert_eq!(surface.screen().get(1, 1), Some(Pixel::WHITE));
        assert_eq!(surface.screen().get(3, 3), Some(Pixel::WHITE));
        assert_eq!(surface.screen().get(4, 1), Some(Pixel::DARK_RED));
        assert_eq!(surface.screen().get(6, 3), Some(Pixel::DARK_RED));
        assert_eq!(surface.screen().get(7, 1), Some(Pixel::BLACK));
        assert_eq!(surface.screen().get(1, 4), Some(Pixel::BLACK));
    }

    #[test]
    fn test_huge_shapes_are_clipped() {
        let mut surface = HeadlessSurface::new(8, 8);
        surface.draw_rect(Vec2i::new(2, -1), Vec2i::new(i32::MAX, i32::MAX), Pixel::WHITE);
        assert_eq!(surface.screen().get(2, 5), Some(Pixel::WHITE));
        assert_eq!(surface.screen().get(3, 5), Some(Pixel::BLACK));

        let buffer = PixelBuffer::filled(2, 2, Pixel::DARK_RED);
        surface.draw_buffer(Vec2i::new(-4, 6), &buffer, u32::MAX);
        assert_eq!(surface.screen().get(0, 7), Some(Pixel::DARK_RED));
        assert_eq!(surface.screen().get(7, 7), Some(Pixel::DARK_RED));
        assert_eq!(surface.screen().get(0, 5), Some(Pixel::BLACK));
    }

    #[test]
    fn test_scroll_resets_each_frame() {
        let mut surface = HeadlessSurface::new(1, 1);
        surface.scroll(2);
        surface.scroll(-1);
        assert_eq!(surface.scroll_delta(), 1);
        surface.end_frame();
        assert_eq!(surface.scroll_delta(), 0);
    }
}
