//! Integer geometry shared by the rasterizers.
//!
//! All coordinates are signed pixel positions. Nothing here enforces a range;
//! bounds rejection is done per primitive.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// X coordinate (grows rightward).
    pub x: i32,
    /// Y coordinate (grows downward).
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Bounds of a drawing surface.
///
/// Zero or negative sizes are accepted; with such bounds every bounds-checked
/// primitive rejects its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extent {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Extent {
    /// Create new bounds.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether a horizontal run starting at `(x, y)` may touch the surface.
    ///
    /// The test accepts one row and one column past the far edges
    /// (`y == height`, `x == width`); backends are expected to clip those.
    #[must_use]
    pub fn admits_hspan(self, x: i32, y: i32, length: i32) -> bool {
        !(y < 0 || y > self.height || i64::from(x) < -i64::from(length) || x > self.width)
    }

    /// Whether a vertical run starting at `(x, y)` may touch the surface.
    ///
    /// Same one-past-the-edge inclusion as [`Extent::admits_hspan`].
    #[must_use]
    pub fn admits_vspan(self, x: i32, y: i32, length: i32) -> bool {
        !(i64::from(y) < -i64::from(length) || y > self.height || x < 0 || x > self.width)
    }

    /// Whether a `width` x `height` box at `(x, y)` may touch the surface.
    #[must_use]
    pub fn admits_rect(self, x: i32, y: i32, width: i32, height: i32) -> bool {
        !(i64::from(y) < -i64::from(height)
            || y > self.height
            || i64::from(x) < -i64::from(width)
            || x > self.width)
    }
}

/// Narrow a coordinate computed in `i64` back to `i32`, clamping at the
/// extremes. Clamped values lie far outside any surface.
pub(crate) fn saturate(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

/// Offset `start` by `delta`, clamped to `i32`.
pub(crate) fn offset(start: i32, delta: i64) -> i32 {
    saturate(i64::from(start) + delta)
}

/// Direction of a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Run grows rightward along a row.
    Horizontal,
    /// Run grows downward along a column.
    Vertical,
}

/// A run of `length` pixels sharing one row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    /// First pixel of the run.
    pub origin: Point,
    /// Number of pixels; zero or negative means an empty run.
    pub length: i32,
    /// Direction the run grows in.
    pub axis: Axis,
}

impl Span {
    /// A run growing rightward from `(x, y)`.
    #[must_use]
    pub const fn horizontal(x: i32, y: i32, length: i32) -> Self {
        Self { origin: Point::new(x, y), length, axis: Axis::Horizontal }
    }

    /// A run growing downward from `(x, y)`.
    #[must_use]
    pub const fn vertical(x: i32, y: i32, length: i32) -> Self {
        Self { origin: Point::new(x, y), length, axis: Axis::Vertical }
    }

    /// Iterate over the pixels of the run in ascending order.
    ///
    /// Pixels that would lie past `i32::MAX` are not produced.
    pub fn points(self) -> impl Iterator<Item = Point> {
        let Point { x, y } = self.origin;
        let start = match self.axis {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        };
        run(start, self.length).map(move |i| match self.axis {
            Axis::Horizontal => Point::new(i, y),
            Axis::Vertical => Point::new(x, i),
        })
    }
}

/// The `length` consecutive coordinates starting at `start`, stopping early
/// at `i32::MAX`. Empty when `length <= 0`.
pub(crate) fn run(start: i32, length: i32) -> impl Iterator<Item = i32> {
    let end = (i64::from(start) + i64::from(length)).min(i64::from(i32::MAX) + 1);
    (i64::from(start)..end).map(saturate)
}
