// Core types: the pixel grid every rasterizer draws into.

use crate::color::Color;

/// Row-major grid of packed colors (index = y * width + x).
/// The caller picks the size and owns the buffer; drawing code only borrows it.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>, // length = width * height
}

impl FrameBuffer {
    /// Allocate a `width` x `height` buffer with every pixel set to `Color(0)`.
    /// Visual: nothing yet; a fully transparent black canvas until something is drawn.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![Color::default(); width * height] }
    }

    /// Number of pixels per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Color at column `x`, row `y`, or None outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Set the pixel at (x, y) if it lies inside the buffer; anything else is dropped.
    /// Visual: the exact pixel at (x,y) changes color, or nothing changes off-canvas.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y * self.width + x;
        self.pixels[idx] = color;
    }

    /// All pixels, top row first, left to right within a row.
    /// This is the order the image file lists them in.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn new_buffer_is_zeroed() {
        let fb = FrameBuffer::new(3, 2);
        assert_eq!(fb.pixels().len(), 6);
        assert!(fb.pixels().iter().all(|&c| c == Color(0)));
    }

    #[test]
    fn put_lands_in_row_major_slot() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put(2, 1, Color(7));
        assert_eq!(fb.get(2, 1), Some(Color(7)));
        assert_eq!(fb.pixels()[5], Color(7));
    }

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put(-1, 0, Color(1));
        fb.put(0, -1, Color(1));
        fb.put(3, 0, Color(1));
        fb.put(0, 2, Color(1));
        assert!(fb.pixels().iter().all(|&c| c == Color(0)));
        assert_eq!(fb.get(3, 0), None);
        assert_eq!(fb.get(0, 2), None);
    }
}
