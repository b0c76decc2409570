//! Integer Bresenham line rasterization.

use std::mem::swap;

use crate::backend::Backend;
use crate::canvas::Canvas;
use crate::geometry::saturate;

/// Walk the pixels of the line `(x0, y0)`-`(x1, y1)` with Bresenham's algorithm.
///
/// The walk always advances one pixel per step along the longer axis, from
/// the endpoint with the smaller major coordinate to the other, so exactly
/// `max(|dx|, |dy|) + 1` points are produced and swapping the endpoints yields
/// the same set. `plot` errors stop the walk.
///
/// [https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
pub fn bresenham<F, E>(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: F) -> Result<(), E>
where
    F: FnMut(i32, i32) -> Result<(), E>,
{
    let (mut x0, mut y0) = (i64::from(x0), i64::from(y0));
    let (mut x1, mut y1) = (i64::from(x1), i64::from(y1));
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    if steep {
        swap(&mut x0, &mut y0);
        swap(&mut x1, &mut y1);
    }

    if x0 > x1 {
        swap(&mut x0, &mut x1);
        swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let ystep = if y0 < y1 { 1 } else { -1 };

    // dx >= 0 here, so truncation and floor agree.
    let mut err = dx / 2;
    let mut y = y0;

    // Every walked coordinate lies between two i32 endpoints.
    for x in x0..=x1 {
        if steep {
            plot(saturate(y), saturate(x))?;
        } else {
            plot(saturate(x), saturate(y))?;
        }

        err -= dy;
        if err < 0 {
            y += ystep;
            err += dx;
        }
    }

    Ok(())
}

impl<B> Canvas<B> {
    /// Draw a one pixel wide line from `(x0, y0)` to `(x1, y1)`, endpoints included.
    ///
    /// No bounds check is done; every pixel goes to the backend's `set_pixel`.
    pub fn line<X>(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        extra: &X,
    ) -> Result<(), <B as Backend<X>>::Error>
    where
        B: Backend<X>,
        X: ?Sized,
    {
        let backend = self.backend_mut();
        bresenham(x0, y0, x1, y1, |x, y| backend.set_pixel(x, y, extra))
    }
}
