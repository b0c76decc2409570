//! Midpoint circle rasterization, outlined and filled.

use crate::backend::Backend;
use crate::canvas::Canvas;
use crate::geometry::{offset, saturate};

/// Incremental state of the midpoint circle walk over one octant.
///
/// Starts at `(0, radius)` and steps `x` by one until `x >= y`, decrementing
/// `y` whenever the decision variable says the midpoint lies outside.
#[derive(Debug, Clone)]
struct Midpoint {
    f: i64,
    ddf_x: i64,
    ddf_y: i64,
    x: i64,
    y: i64,
}

impl Midpoint {
    fn new(radius: i32) -> Self {
        let r = i64::from(radius);
        Self { f: 1 - r, ddf_x: 1, ddf_y: -2 * r, x: 0, y: r }
    }
}

impl Iterator for Midpoint {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<(i64, i64)> {
        if self.x >= self.y {
            return None;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x;
        Some((self.x, self.y))
    }
}

impl<B> Canvas<B> {
    /// Draw a one pixel wide circle centred on `(x0, y0)`.
    ///
    /// The four axis points are emitted first, then eight mirrored points per
    /// step of the octant walk. A radius of zero emits the centre four times.
    pub fn circle<X>(
        &mut self,
        x0: i32,
        y0: i32,
        radius: i32,
        extra: &X,
    ) -> Result<(), <B as Backend<X>>::Error>
    where
        B: Backend<X>,
        X: ?Sized,
    {
        let backend = self.backend_mut();
        let r = i64::from(radius);

        backend.set_pixel(x0, offset(y0, r), extra)?;
        backend.set_pixel(x0, offset(y0, -r), extra)?;
        backend.set_pixel(offset(x0, r), y0, extra)?;
        backend.set_pixel(offset(x0, -r), y0, extra)?;

        for (x, y) in Midpoint::new(radius) {
            backend.set_pixel(offset(x0, x), offset(y0, y), extra)?;
            backend.set_pixel(offset(x0, -x), offset(y0, y), extra)?;
            backend.set_pixel(offset(x0, x), offset(y0, -y), extra)?;
            backend.set_pixel(offset(x0, -x), offset(y0, -y), extra)?;
            backend.set_pixel(offset(x0, y), offset(y0, x), extra)?;
            backend.set_pixel(offset(x0, -y), offset(y0, x), extra)?;
            backend.set_pixel(offset(x0, y), offset(y0, -x), extra)?;
            backend.set_pixel(offset(x0, -y), offset(y0, -x), extra)?;
        }

        Ok(())
    }

    /// Draw a solid disk centred on `(x0, y0)` from vertical spans.
    ///
    /// The centre column comes first, then four columns per step of the same
    /// octant walk [`Canvas::circle`] uses.
    pub fn fill_circle<X>(
        &mut self,
        x0: i32,
        y0: i32,
        radius: i32,
        extra: &X,
    ) -> Result<(), <B as Backend<X>>::Error>
    where
        B: Backend<X>,
        X: ?Sized,
    {
        let r = i64::from(radius);
        self.vspan(x0, offset(y0, -r), saturate(2 * r + 1), extra)?;

        for (x, y) in Midpoint::new(radius) {
            self.vspan(offset(x0, x), offset(y0, -y), saturate(2 * y + 1), extra)?;
            self.vspan(offset(x0, y), offset(y0, -x), saturate(2 * x + 1), extra)?;
            self.vspan(offset(x0, -x), offset(y0, -y), saturate(2 * y + 1), extra)?;
            self.vspan(offset(x0, -y), offset(y0, -x), saturate(2 * x + 1), extra)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::geometry::{Extent, Point};
    use crate::recorder::{CallLog, DrawCall, PixelLog};

    /// Records calls until `left` runs out, then fails.
    struct Countdown {
        left: usize,
        calls: Vec<DrawCall<()>>,
    }

    impl Countdown {
        fn new(left: usize) -> Self {
            Self { left, calls: Vec::new() }
        }

        fn record(&mut self, call: DrawCall<()>) -> Result<(), usize> {
            if self.left == 0 {
                return Err(self.calls.len());
            }
            self.left -= 1;
            self.calls.push(call);
            Ok(())
        }
    }

    impl Backend<()> for Countdown {
        type Error = usize;

        fn set_pixel(&mut self, x: i32, y: i32, _extra: &()) -> Result<(), usize> {
            self.record(DrawCall::pixel(x, y, ()))
        }

        fn draw_vspan(
            &mut self,
            _bounds: Extent,
            x: i32,
            y: i32,
            length: i32,
            _extra: &(),
        ) -> Result<(), usize> {
            self.record(DrawCall::vspan(x, y, length, ()))
        }
    }

    fn outline(radius: i32) -> HashSet<Point> {
        let mut canvas = Canvas::new(64, 64, PixelLog::new());
        canvas.circle(0, 0, radius, &()).unwrap();
        canvas.backend().covered().into_iter().collect()
    }

    #[test]
    fn test_zero_radius_circle() {
        let mut canvas = Canvas::new(10, 10, PixelLog::new());
        canvas.circle(5, 5, 0, &'o').unwrap();

        assert_eq!(canvas.backend().calls(), vec![DrawCall::pixel(5, 5, 'o'); 4]);
    }

    #[test]
    fn test_midpoint_walk_radius_three() {
        let steps: Vec<_> = Midpoint::new(3).collect();
        assert_eq!(steps, vec![(1, 3), (2, 2)]);
    }

    #[test]
    fn test_circle_radius_one() {
        let points = outline(1);
        let expected: HashSet<Point> =
            [(0, 1), (0, -1), (1, 0), (-1, 0)].into_iter().map(Point::from).collect();
        // x = 0, y = 1: one step to (1, 0) which lands on the axis points again.
        assert!(expected.is_subset(&points));
        assert!(points.iter().all(|p| p.x.abs() <= 1 && p.y.abs() <= 1));
    }

    #[test]
    fn test_circle_axis_points_first() {
        let mut canvas = Canvas::new(64, 64, PixelLog::new());
        canvas.circle(10, 20, 4, &()).unwrap();

        let covered = canvas.backend().covered();
        assert_eq!(
            &covered[..4],
            &[Point::new(10, 24), Point::new(10, 16), Point::new(14, 20), Point::new(6, 20)]
        );
    }

    #[test]
    fn test_circle_eight_way_symmetry() {
        for radius in 1..24 {
            let points = outline(radius);
            for p in &points {
                for (x, y) in [
                    (p.x, -p.y),
                    (-p.x, p.y),
                    (-p.x, -p.y),
                    (p.y, p.x),
                    (-p.y, p.x),
                    (p.y, -p.x),
                    (-p.y, -p.x),
                ] {
                    assert!(points.contains(&Point::new(x, y)), "r={radius} missing ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_fill_circle_zero_radius() {
        let mut canvas = Canvas::new(10, 10, CallLog::new());
        canvas.fill_circle(3, 3, 0, &()).unwrap();
        assert_eq!(canvas.backend().calls(), &[DrawCall::vspan(3, 3, 1, ())]);
    }

    #[test]
    fn test_fill_circle_spans() {
        let mut canvas = Canvas::new(32, 32, CallLog::new());
        canvas.fill_circle(10, 10, 3, &()).unwrap();

        assert_eq!(
            canvas.backend().calls(),
            &[
                DrawCall::vspan(10, 7, 7, ()),
                DrawCall::vspan(11, 7, 7, ()),
                DrawCall::vspan(13, 9, 3, ()),
                DrawCall::vspan(9, 7, 7, ()),
                DrawCall::vspan(7, 9, 3, ()),
                DrawCall::vspan(12, 8, 5, ()),
                DrawCall::vspan(12, 8, 5, ()),
                DrawCall::vspan(8, 8, 5, ()),
                DrawCall::vspan(8, 8, 5, ()),
            ]
        );
    }

    #[test]
    fn test_fill_circle_contains_outline() {
        for radius in 0..20 {
            let mut canvas = Canvas::new(128, 128, CallLog::new());
            canvas.fill_circle(50, 50, radius, &()).unwrap();
            let disk: HashSet<Point> = canvas.backend().covered().into_iter().collect();

            let mut ring = Canvas::new(128, 128, PixelLog::new());
            ring.circle(50, 50, radius, &()).unwrap();
            for p in ring.backend().covered() {
                assert!(disk.contains(&p), "r={radius} outline pixel {p:?} not filled");
            }
        }
    }

    #[test]
    fn test_fill_circle_has_no_holes() {
        let radius = 12;
        let mut canvas = Canvas::new(64, 64, CallLog::new());
        canvas.fill_circle(0, 0, radius, &()).unwrap();
        let disk: HashSet<Point> = canvas.backend().covered().into_iter().collect();

        // Every column is one contiguous run symmetric about the centre row.
        for x in -radius..=radius {
            let column: Vec<i32> = disk.iter().filter(|p| p.x == x).map(|p| p.y).collect();
            let top = column.iter().copied().min().unwrap();
            let bottom = column.iter().copied().max().unwrap();
            assert_eq!(top, -bottom);
            assert_eq!(column.len() as i32, bottom - top + 1);
        }
    }

    #[test]
    fn test_fill_circle_area_monotonic() {
        let mut last = 0;
        for radius in 1..40 {
            let mut canvas = Canvas::new(256, 256, CallLog::new());
            canvas.fill_circle(100, 100, radius, &()).unwrap();
            let area = canvas.backend().coverage().len() as i64;

            let ideal = std::f64::consts::PI * f64::from(radius * radius);
            assert!((area as f64 - ideal).abs() <= 5.0 * f64::from(radius) + 5.0, "r={radius} area={area}");
            assert!(area >= last);
            last = area;
        }
    }

    #[test]
    fn test_circle_extreme_radius_does_not_overflow() {
        let mut canvas = Canvas::new(10, 10, Countdown::new(16));
        assert_eq!(canvas.circle(5, 5, i32::MAX, &()), Err(16));
        assert_eq!(
            &canvas.backend().calls[..4],
            &[
                DrawCall::pixel(5, i32::MAX, ()),
                DrawCall::pixel(5, 5 - i32::MAX, ()),
                DrawCall::pixel(i32::MAX, 5, ()),
                DrawCall::pixel(5 - i32::MAX, 5, ()),
            ]
        );

        let mut canvas = Canvas::new(10, 10, PixelLog::new());
        canvas.circle(5, 5, i32::MIN, &()).unwrap();
        assert_eq!(
            canvas.backend().calls(),
            &[
                DrawCall::pixel(5, 5 + i32::MIN, ()),
                DrawCall::pixel(5, i32::MAX, ()),
                DrawCall::pixel(5 + i32::MIN, 5, ()),
                DrawCall::pixel(i32::MAX, 5, ()),
            ]
        );
    }

    #[test]
    fn test_fill_circle_extreme_radius_does_not_overflow() {
        let mut canvas = Canvas::new(10, 10, Countdown::new(9));
        assert_eq!(canvas.fill_circle(0, 0, i32::MAX, &()), Err(9));
        assert_eq!(canvas.backend().calls[0], DrawCall::vspan(0, -i32::MAX, i32::MAX, ()));

        let mut canvas = Canvas::new(10, 10, CallLog::new());
        canvas.fill_circle(0, 0, i32::MIN, &()).unwrap();
        assert_eq!(canvas.backend().calls(), &[DrawCall::vspan(0, i32::MAX, i32::MIN, ())]);
    }
}
