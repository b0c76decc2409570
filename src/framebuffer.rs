//! Reference RGBA pixel buffer backend.
//!
//! Rows are padded to a 64-byte stride. The buffer implements
//! [`Backend<Rgba>`] with native spans and rectangle fills that clip against
//! its own size, so primitives reach it in as few calls as possible.

use std::convert::Infallible;

use crate::backend::Backend;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Extent;

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// RGBA8 framebuffer in row-major order.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels, 4 bytes each, rows `stride` bytes apart.
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions, cleared to transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use pixelgfx::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width: width.into(), height: height.into() });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);
        let pixels = vec![0; stride * (height as usize)];

        Ok(Self { width, height, pixels, stride })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Bounds to build a [`Canvas`](crate::canvas::Canvas) over this buffer with.
    #[must_use]
    pub const fn extent(&self) -> Extent {
        Extent::new(self.width as i32, self.height as i32)
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        let end = start + (self.width as usize) * 4;
        Some(&self.pixels[start..end])
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        self.fill_region(0, 0, self.width, self.height, color);
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(Rgba::from_array(rgba))
    }

    /// Count pixels equal to `color`.
    #[must_use]
    pub fn count(&self, color: Rgba) -> usize {
        let want = color.to_array();
        (0..self.height)
            .filter_map(|y| self.row(y))
            .flat_map(|row| row.chunks_exact(4))
            .filter(|px| *px == want)
            .count()
    }

    /// Get pixel data as a compact buffer without stride padding.
    ///
    /// This is what encoders like PNG expect.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        if self.stride == row_bytes {
            return self.pixels.clone();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Intersect a signed box with the buffer.
    ///
    /// Returns `(x, y, w, h)` of the visible part, or `None` when nothing of
    /// it is visible.
    fn clip(&self, x: i32, y: i32, w: i32, h: i32) -> Option<(u32, u32, u32, u32)> {
        let x1 = i64::from(x).max(0);
        let y1 = i64::from(y).max(0);
        let x2 = (i64::from(x) + i64::from(w)).min(i64::from(self.width));
        let y2 = (i64::from(y) + i64::from(h)).min(i64::from(self.height));

        if x1 >= x2 || y1 >= y2 {
            return None;
        }
        Some((x1 as u32, y1 as u32, (x2 - x1) as u32, (y2 - y1) as u32))
    }

    /// Fill an in-bounds region.
    fn fill_region(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let rgba = color.to_array();
        let run = (w as usize) * 4;

        for row_y in y..y + h {
            let start = self.pixel_index(x, row_y);
            for chunk in self.pixels[start..start + run].chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    fn fill_clipped(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        if let Some((x, y, w, h)) = self.clip(x, y, w, h) {
            self.fill_region(x, y, w, h, color);
        }
    }
}

impl Backend<Rgba> for Framebuffer {
    type Error = Infallible;

    fn set_pixel(&mut self, x: i32, y: i32, color: &Rgba) -> std::result::Result<(), Infallible> {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            if x < self.width && y < self.height {
                let idx = self.pixel_index(x, y);
                self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
            }
        }
        Ok(())
    }

    fn draw_hspan(
        &mut self,
        _bounds: Extent,
        x: i32,
        y: i32,
        length: i32,
        color: &Rgba,
    ) -> std::result::Result<(), Infallible> {
        self.fill_clipped(x, y, length, 1, *color);
        Ok(())
    }

    fn draw_vspan(
        &mut self,
        _bounds: Extent,
        x: i32,
        y: i32,
        length: i32,
        color: &Rgba,
    ) -> std::result::Result<(), Infallible> {
        self.fill_clipped(x, y, 1, length, *color);
        Ok(())
    }

    fn fill_rect(
        &mut self,
        _bounds: Extent,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: &Rgba,
    ) -> std::result::Result<(), Infallible> {
        self.fill_clipped(x, y, width, height, *color);
        Ok(())
    }
}
