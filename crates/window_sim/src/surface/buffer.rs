//! Off-screen pixel buffers
//!
//! Every window owns one [`PixelBuffer`] sized to its logical (unscaled)
//! dimensions. The host surface draws into it while the window's content
//! hook runs and blits it, magnified, when compositing.

use super::Pixel;
use crate::foundation::math::Vec2i;

/// Row-major 2D pixel storage
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Allocate a buffer filled with [`Pixel::BLANK`]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Pixel::BLANK)
    }

    /// Allocate a buffer filled with `color`
    pub fn filled(width: u32, height: u32, color: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Size as an integer vector
    pub fn size(&self) -> Vec2i {
        Vec2i::new(self.width as i32, self.height as i32)
    }

    /// True for a zero-area buffer
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Read a pixel, `None` outside the buffer
    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write a pixel; writes outside the buffer are ignored
    ///
    /// Returns whether the pixel was inside the buffer.
    pub fn set(&mut self, x: i32, y: i32, color: Pixel) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Fill the entire buffer
    pub fn fill(&mut self, color: Pixel) {
        self.pixels.fill(color);
    }

    /// Row-major pixel slice
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Raw RGBA bytes, for hosts uploading the buffer as a texture
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Reallocate to a new size keeping the overlapping top-left region
    ///
    /// Pixels outside the old bounds become [`Pixel::BLANK`]; shrinking
    /// truncates the right and bottom edges.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        let mut resized = Self::new(width, height);
        let copy_width = self.width.min(width) as usize;
        let copy_height = self.height.min(height) as usize;
        for row in 0..copy_height {
            let src = row * self.width as usize;
            let dst = row * width as usize;
            resized.pixels[dst..dst + copy_width]
                .copy_from_slice(&self.pixels[src..src + copy_width]);
        }
        *self = resized;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                buffer.set(x, y, Pixel::rgb(x as u8, y as u8, 7));
            }
        }
        buffer
    }

    #[test]
    fn test_new_buffer_is_blank() {
        let buffer = PixelBuffer::new(4, 3);
        assert_eq!(buffer.pixels().len(), 12);
        assert!(buffer.pixels().iter().all(|p| *p == Pixel::BLANK));
        assert_eq!(buffer.size(), Vec2i::new(4, 3));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut buffer = PixelBuffer::new(2, 2);
        assert!(!buffer.set(2, 0, Pixel::WHITE));
        assert!(!buffer.set(-1, 0, Pixel::WHITE));
        assert_eq!(buffer.get(0, 2), None);
        assert!(buffer.set(1, 1, Pixel::WHITE));
        assert_eq!(buffer.get(1, 1), Some(Pixel::WHITE));
    }

    #[test]
    fn test_grow_preserves_content() {
        let mut buffer = numbered(3, 2);
        buffer.resize(5, 4);

        assert_eq!(buffer.width(), 5);
        assert_eq!(buffer.height(), 4);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(buffer.get(x, y), Some(Pixel::rgb(x as u8, y as u8, 7)));
            }
        }
        assert_eq!(buffer.get(4, 0), Some(Pixel::BLANK));
        assert_eq!(buffer.get(0, 3), Some(Pixel::BLANK));
    }

    #[test]
    fn test_shrink_truncates() {
        let mut buffer = numbered(4, 4);
        buffer.resize(2, 1);
        assert_eq!(buffer.pixels().len(), 2);
        assert_eq!(buffer.get(1, 0), Some(Pixel::rgb(1, 0, 7)));
        assert_eq!(buffer.get(0, 1), None);

        buffer.resize(0, 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_as_bytes_layout() {
        let buffer = PixelBuffer::filled(2, 1, Pixel::rgba(1, 2, 3, 4));
        assert_eq!(buffer.as_bytes(), &[1, 2, 3, 4, 1, 2, 3, 4]);
    }
}
