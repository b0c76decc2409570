//! Triangles: outlines from three lines, fills from horizontal scanlines.

use std::mem::swap;

use crate::backend::Backend;
use crate::canvas::Canvas;
use crate::geometry::saturate;

/// Denominator used for an edge with no vertical extent.
///
/// Such an edge is never sampled: a horizontal top edge leaves the upper
/// phase empty and a horizontal bottom edge leaves the lower phase empty.
const FLAT_EDGE_DY: i64 = 1;

fn edge_dy(dy: i64, flat: i64) -> i64 {
    if dy == 0 {
        flat
    } else {
        dy
    }
}

/// Walk the scanlines of a triangle whose vertices are sorted by `y` and do
/// not all share one row.
///
/// `row(y, a, b)` receives the two edge intersections of each row, `a` on the
/// short edges and `b` on the long edge 0-2. Intersections use floor
/// division of running accumulators, so each row is exact for integer input.
fn scan_sorted<F, E>(
    (x0, y0): (i64, i64),
    (x1, y1): (i64, i64),
    (x2, y2): (i64, i64),
    flat: i64,
    mut row: F,
) -> Result<(), E>
where
    F: FnMut(i64, i64, i64) -> Result<(), E>,
{
    let dx01 = x1 - x0;
    let dy01 = edge_dy(y1 - y0, flat);
    let dx02 = x2 - x0;
    let dy02 = edge_dy(y2 - y0, flat);
    let dx12 = x2 - x1;
    let dy12 = edge_dy(y2 - y1, flat);

    // With a flat bottom the last row belongs to the upper phase,
    // otherwise the middle vertex row starts the lower phase.
    let last = if y1 == y2 { y1 } else { y1 - 1 };

    let mut sa: i64 = 0;
    let mut sb: i64 = 0;
    let mut y = y0;

    while y <= last {
        let a = x0 + sa.div_euclid(dy01);
        let b = x0 + sb.div_euclid(dy02);
        sa += dx01;
        sb += dx02;
        row(y, a, b)?;
        y += 1;
    }

    sa = dx12 * (y - y1);
    sb = dx02 * (y - y0);

    while y <= y2 {
        let a = x1 + sa.div_euclid(dy12);
        let b = x0 + sb.div_euclid(dy02);
        sa += dx12;
        sb += dx02;
        row(y, a, b)?;
        y += 1;
    }

    Ok(())
}

/// Length of the inclusive run `a..=b`, saturated to `i32`.
fn run_length(a: i64, b: i64) -> i32 {
    saturate(b - a + 1)
}

impl<B> Canvas<B> {
    /// Draw the outline of the triangle `(x0, y0)`, `(x1, y1)`, `(x2, y2)`.
    ///
    /// Lines are drawn 0-1, 1-2, 2-0. Collinear vertices simply overlap.
    pub fn triangle<X>(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        extra: &X,
    ) -> Result<(), <B as Backend<X>>::Error>
    where
        B: Backend<X>,
        X: ?Sized,
    {
        self.line(x0, y0, x1, y1, extra)?;
        self.line(x1, y1, x2, y2, extra)?;
        self.line(x2, y2, x0, y0, extra)
    }

    /// Fill the triangle `(x0, y0)`, `(x1, y1)`, `(x2, y2)` with one horizontal
    /// span per row, top to bottom.
    ///
    /// If all three vertices share a row, a single span from the smallest to
    /// the largest `x` is drawn.
    pub fn fill_triangle<X>(
        &mut self,
        mut x0: i32,
        mut y0: i32,
        mut x1: i32,
        mut y1: i32,
        mut x2: i32,
        mut y2: i32,
        extra: &X,
    ) -> Result<(), <B as Backend<X>>::Error>
    where
        B: Backend<X>,
        X: ?Sized,
    {
        if y0 > y1 {
            swap(&mut y0, &mut y1);
            swap(&mut x0, &mut x1);
        }
        if y1 > y2 {
            swap(&mut y2, &mut y1);
            swap(&mut x2, &mut x1);
        }
        if y0 > y1 {
            swap(&mut y0, &mut y1);
            swap(&mut x0, &mut x1);
        }

        if y0 == y2 {
            let a = x0.min(x1).min(x2);
            let b = x0.max(x1).max(x2);
            return self.hspan(a, y0, run_length(a.into(), b.into()), extra);
        }

        scan_sorted(
            (x0.into(), y0.into()),
            (x1.into(), y1.into()),
            (x2.into(), y2.into()),
            FLAT_EDGE_DY,
            |y, a, b| {
                let (a, b) = if a > b { (b, a) } else { (a, b) };
                self.hspan(saturate(a), saturate(y), run_length(a, b), extra)
            },
        )
    }
}
