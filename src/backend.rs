//! The drawing capability a display exposes to the rasterizers.
//!
//! A backend must be able to set one pixel. Horizontal spans, vertical spans
//! and filled rectangles are optional: the provided methods synthesize them
//! from [`Backend::set_pixel`]. A backend with faster paths overrides them.
//!
//! The fallback span methods receive the canvas [`Extent`] because they
//! perform bounds rejection on behalf of the backend. Overrides are trusted to
//! clip on their own and are free to ignore it.

use crate::geometry::{run, Extent};
use crate::render::span::{fallback_hspan, fallback_vspan};

/// Pixel sink driven by a [`Canvas`](crate::canvas::Canvas).
///
/// `X` is the extra parameter forwarded verbatim from every primitive call,
/// usually a color. Use a tuple for several values and `()` for none.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use pixelgfx::{Backend, Canvas};
///
/// struct Dots(Vec<(i32, i32, char)>);
///
/// impl Backend<char> for Dots {
///     type Error = Infallible;
///
///     fn set_pixel(&mut self, x: i32, y: i32, glyph: &char) -> Result<(), Infallible> {
///         self.0.push((x, y, *glyph));
///         Ok(())
///     }
/// }
///
/// let mut canvas = Canvas::new(8, 8, Dots(Vec::new()));
/// canvas.line(0, 0, 2, 0, &'#').unwrap();
/// assert_eq!(canvas.backend().0, vec![(0, 0, '#'), (1, 0, '#'), (2, 0, '#')]);
/// ```
pub trait Backend<X: ?Sized> {
    /// Fault raised by the backend. Primitives return it unmodified.
    type Error;

    /// Set one pixel. May clip or ignore out-of-range positions.
    fn set_pixel(&mut self, x: i32, y: i32, extra: &X) -> Result<(), Self::Error>;

    /// Set `length` pixels rightward from `(x, y)`.
    ///
    /// Defaults to [`fallback_hspan`].
    fn draw_hspan(
        &mut self,
        bounds: Extent,
        x: i32,
        y: i32,
        length: i32,
        extra: &X,
    ) -> Result<(), Self::Error> {
        fallback_hspan(self, bounds, x, y, length, extra)
    }

    /// Set `length` pixels downward from `(x, y)`.
    ///
    /// Defaults to [`fallback_vspan`].
    fn draw_vspan(
        &mut self,
        bounds: Extent,
        x: i32,
        y: i32,
        length: i32,
        extra: &X,
    ) -> Result<(), Self::Error> {
        fallback_vspan(self, bounds, x, y, length, extra)
    }

    /// Fill a `width` x `height` box whose top-left corner is `(x, y)`.
    ///
    /// Called only after the canvas accepted the box. Defaults to one
    /// [`Backend::draw_vspan`] per column, left to right.
    fn fill_rect(
        &mut self,
        bounds: Extent,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        extra: &X,
    ) -> Result<(), Self::Error> {
        for column in run(x, width) {
            self.draw_vspan(bounds, column, y, height, extra)?;
        }
        Ok(())
    }
}

impl<B, X> Backend<X> for &mut B
where
    B: Backend<X> + ?Sized,
    X: ?Sized,
{
    type Error = B::Error;

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, extra: &X) -> Result<(), Self::Error> {
        (**self).set_pixel(x, y, extra)
    }

    #[inline]
    fn draw_hspan(
        &mut self,
        bounds: Extent,
        x: i32,
        y: i32,
        length: i32,
        extra: &X,
    ) -> Result<(), Self::Error> {
        (**self).draw_hspan(bounds, x, y, length, extra)
    }

    #[inline]
    fn draw_vspan(
        &mut self,
        bounds: Extent,
        x: i32,
        y: i32,
        length: i32,
        extra: &X,
    ) -> Result<(), Self::Error> {
        (**self).draw_vspan(bounds, x, y, length, extra)
    }

    #[inline]
    fn fill_rect(
        &mut self,
        bounds: Extent,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        extra: &X,
    ) -> Result<(), Self::Error> {
        (**self).fill_rect(bounds, x, y, width, height, extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::{CallLog, DrawCall, PixelLog};

    #[test]
    fn test_default_hspan_uses_set_pixel() {
        let mut log = PixelLog::new();
        log.draw_hspan(Extent::new(10, 10), 2, 3, 3, &7u8).unwrap();

        assert_eq!(
            log.calls(),
            &[DrawCall::pixel(2, 3, 7), DrawCall::pixel(3, 3, 7), DrawCall::pixel(4, 3, 7)]
        );
    }

    #[test]
    fn test_default_fill_rect_issues_vspans() {
        let mut log = CallLog::new();
        log.fill_rect(Extent::new(10, 10), 1, 1, 3, 2, &()).unwrap();

        assert_eq!(
            log.calls(),
            &[DrawCall::vspan(1, 1, 2, ()), DrawCall::vspan(2, 1, 2, ()), DrawCall::vspan(3, 1, 2, ())]
        );
    }

    fn drive<B: Backend<char>>(mut backend: B) -> Result<(), B::Error> {
        backend.draw_hspan(Extent::new(4, 4), 0, 0, 2, &'x')?;
        backend.set_pixel(1, 1, &'y')
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut log = CallLog::new();
        drive(&mut log).unwrap();
        assert_eq!(log.calls(), &[DrawCall::hspan(0, 0, 2, 'x'), DrawCall::pixel(1, 1, 'y')]);
    }
}
