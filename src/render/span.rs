//! Pixel-by-pixel span synthesis for backends without native spans.
//!
//! These are the only operations that bounds-check raw span requests. The
//! test keeps the far edge inclusive: a span starting at `x == width` or
//! `y == height` is still forwarded to `set_pixel`, which clips it.

use log::trace;

use crate::backend::Backend;
use crate::geometry::{run, Extent};

/// Draw `length` pixels rightward from `(x, y)` with repeated `set_pixel`.
///
/// Does nothing when `y < 0`, `y > height`, `x < -length` or `x > width`.
/// Pixels are emitted left to right.
pub fn fallback_hspan<B, X>(
    backend: &mut B,
    bounds: Extent,
    x: i32,
    y: i32,
    length: i32,
    extra: &X,
) -> Result<(), B::Error>
where
    B: Backend<X> + ?Sized,
    X: ?Sized,
{
    if !bounds.admits_hspan(x, y, length) {
        trace!("hspan rejected: ({x}, {y}) len {length}");
        return Ok(());
    }
    for px in run(x, length) {
        backend.set_pixel(px, y, extra)?;
    }
    Ok(())
}

/// Draw `length` pixels downward from `(x, y)` with repeated `set_pixel`.
///
/// Does nothing when `y < -length`, `y > height`, `x < 0` or `x > width`.
/// Pixels are emitted top to bottom.
pub fn fallback_vspan<B, X>(
    backend: &mut B,
    bounds: Extent,
    x: i32,
    y: i32,
    length: i32,
    extra: &X,
) -> Result<(), B::Error>
where
    B: Backend<X> + ?Sized,
    X: ?Sized,
{
    if !bounds.admits_vspan(x, y, length) {
        trace!("vspan rejected: ({x}, {y}) len {length}");
        return Ok(());
    }
    for py in run(y, length) {
        backend.set_pixel(x, py, extra)?;
    }
    Ok(())
}
