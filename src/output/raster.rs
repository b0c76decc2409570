//! Sampling drawn results as RGBA images.

use std::collections::HashSet;

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Extent, Point};

/// A finished drawing that can be read back pixel by pixel.
///
/// Encoders walk `(0, 0)..(width, height)` of [`Raster::extent`] in row-major
/// order.
pub trait Raster {
    /// Size of the image.
    fn extent(&self) -> Extent;

    /// Color at `(x, y)`. Only called inside [`Raster::extent`].
    fn sample(&self, x: i32, y: i32) -> Rgba;

    /// Row-major RGBA8 bytes of the whole image.
    fn rgba_bytes(&self) -> Vec<u8> {
        let Extent { width, height } = self.extent();
        (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .flat_map(|(x, y)| self.sample(x, y).to_array())
            .collect()
    }
}

impl Raster for Framebuffer {
    fn extent(&self) -> Extent {
        Framebuffer::extent(self)
    }

    fn sample(&self, x: i32, y: i32) -> Rgba {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(x), Ok(y)) => self.get_pixel(x, y).unwrap_or_default(),
            _ => Rgba::TRANSPARENT,
        }
    }

    fn rgba_bytes(&self) -> Vec<u8> {
        self.to_compact_pixels()
    }
}

/// Two-tone image of the cells a recording backend saw.
///
/// Built from [`CallLog::covered`](crate::recorder::CallLog::covered) or
/// [`PixelLog::covered`](crate::recorder::PixelLog::covered): covered cells
/// are `ink`, everything else is transparent. Cells outside the extent are
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageMask {
    extent: Extent,
    cells: HashSet<Point>,
    ink: Rgba,
}

impl CoverageMask {
    /// Collect `cells` into a mask of size `extent`.
    #[must_use]
    pub fn new<I>(extent: Extent, cells: I, ink: Rgba) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let cells = cells
            .into_iter()
            .filter(|p| (0..extent.width).contains(&p.x) && (0..extent.height).contains(&p.y))
            .collect();
        Self { extent, cells, ink }
    }

    /// Number of distinct inked cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether nothing is inked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Raster for CoverageMask {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn sample(&self, x: i32, y: i32) -> Rgba {
        if self.cells.contains(&Point::new(x, y)) {
            self.ink
        } else {
            Rgba::TRANSPARENT
        }
    }
}
