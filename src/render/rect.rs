//! Axis-aligned rectangles, composed from spans.

use log::trace;

use crate::backend::Backend;
use crate::canvas::Canvas;
use crate::geometry::offset;

impl<B> Canvas<B> {
    /// Draw a one pixel wide rectangle outline with top-left corner `(x, y)`.
    ///
    /// Issues the top and bottom edges as horizontal spans and the left and
    /// right edges as vertical spans, in that order. Corners are covered by
    /// both the row and the column that meet there.
    ///
    /// Nothing is drawn when `y < -height`, `y > canvas height`,
    /// `x < -width` or `x > canvas width`.
    pub fn rect<X>(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        extra: &X,
    ) -> Result<(), <B as Backend<X>>::Error>
    where
        B: Backend<X>,
        X: ?Sized,
    {
        if !self.extent().admits_rect(x, y, width, height) {
            trace!("rect rejected: ({x}, {y}) {width}x{height}");
            return Ok(());
        }
        self.hspan(x, y, width, extra)?;
        self.hspan(x, offset(y, i64::from(height) - 1), width, extra)?;
        self.vspan(x, y, height, extra)?;
        self.vspan(offset(x, i64::from(width) - 1), y, height, extra)
    }

    /// Draw a filled rectangle with top-left corner `(x, y)`.
    ///
    /// Uses the same rejection test as [`Canvas::rect`]. The accepted box is
    /// handed to the backend's `fill_rect`, which by default issues one
    /// vertical span of `height` pixels per column from `x` to `x + width`
    /// (exclusive).
    pub fn fill_rect<X>(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        extra: &X,
    ) -> Result<(), <B as Backend<X>>::Error>
    where
        B: Backend<X>,
        X: ?Sized,
    {
        let bounds = self.extent();
        if !bounds.admits_rect(x, y, width, height) {
            trace!("fill_rect rejected: ({x}, {y}) {width}x{height}");
            return Ok(());
        }
        self.backend_mut().fill_rect(bounds, x, y, width, height, extra)
    }
}
