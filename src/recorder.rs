//! Backends that record the calls they receive.
//!
//! Useful for testing backends and primitives without a pixel buffer:
//! [`CallLog`] accepts spans natively, [`PixelLog`] only implements
//! `set_pixel` and therefore sees the fallback expansion of every span.

use std::collections::HashMap;
use std::convert::Infallible;

use crate::backend::Backend;
use crate::geometry::{Extent, Point, Span};

/// One backend call, with a copy of the extra parameter it carried.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DrawCall<X> {
    /// `set_pixel(x, y, extra)`.
    Pixel(Point, X),
    /// `draw_hspan` or `draw_vspan`.
    Span(Span, X),
}

impl<X> DrawCall<X> {
    /// A recorded pixel write.
    pub const fn pixel(x: i32, y: i32, extra: X) -> Self {
        Self::Pixel(Point::new(x, y), extra)
    }

    /// A recorded horizontal span.
    pub const fn hspan(x: i32, y: i32, length: i32, extra: X) -> Self {
        Self::Span(Span::horizontal(x, y, length), extra)
    }

    /// A recorded vertical span.
    pub const fn vspan(x: i32, y: i32, length: i32, extra: X) -> Self {
        Self::Span(Span::vertical(x, y, length), extra)
    }

    /// The extra parameter of this call.
    pub const fn extra(&self) -> &X {
        match self {
            Self::Pixel(_, extra) | Self::Span(_, extra) => extra,
        }
    }

    /// The pixels this call touches, in emission order.
    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::Pixel(point, _) => vec![*point],
            Self::Span(span, _) => span.points().collect(),
        }
    }
}

fn expand<X>(calls: &[DrawCall<X>]) -> Vec<Point> {
    calls.iter().flat_map(DrawCall::points).collect()
}

fn tally<X>(calls: &[DrawCall<X>]) -> HashMap<Point, usize> {
    let mut counts = HashMap::new();
    for point in expand(calls) {
        *counts.entry(point).or_insert(0) += 1;
    }
    counts
}

/// Records pixels and native spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallLog<X> {
    calls: Vec<DrawCall<X>>,
}

impl<X> Default for CallLog<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X> CallLog<X> {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Calls received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall<X>] {
        &self.calls
    }

    /// Forget all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Every pixel touched, spans expanded, in call order. Repeats are kept.
    #[must_use]
    pub fn covered(&self) -> Vec<Point> {
        expand(&self.calls)
    }

    /// How many times each pixel was touched.
    #[must_use]
    pub fn coverage(&self) -> HashMap<Point, usize> {
        tally(&self.calls)
    }
}

impl<X: Clone> Backend<X> for CallLog<X> {
    type Error = Infallible;

    fn set_pixel(&mut self, x: i32, y: i32, extra: &X) -> Result<(), Infallible> {
        self.calls.push(DrawCall::pixel(x, y, extra.clone()));
        Ok(())
    }

    fn draw_hspan(
        &mut self,
        _bounds: Extent,
        x: i32,
        y: i32,
        length: i32,
        extra: &X,
    ) -> Result<(), Infallible> {
        self.calls.push(DrawCall::hspan(x, y, length, extra.clone()));
        Ok(())
    }

    fn draw_vspan(
        &mut self,
        _bounds: Extent,
        x: i32,
        y: i32,
        length: i32,
        extra: &X,
    ) -> Result<(), Infallible> {
        self.calls.push(DrawCall::vspan(x, y, length, extra.clone()));
        Ok(())
    }
}

/// Records pixel writes only; spans reach it through the fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelLog<X> {
    calls: Vec<DrawCall<X>>,
}

impl<X> Default for PixelLog<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X> PixelLog<X> {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Calls received so far, oldest first. Always [`DrawCall::Pixel`].
    #[must_use]
    pub fn calls(&self) -> &[DrawCall<X>] {
        &self.calls
    }

    /// Forget all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Every pixel written, in call order. Repeats are kept.
    #[must_use]
    pub fn covered(&self) -> Vec<Point> {
        expand(&self.calls)
    }

    /// How many times each pixel was written.
    #[must_use]
    pub fn coverage(&self) -> HashMap<Point, usize> {
        tally(&self.calls)
    }
}

impl<X: Clone> Backend<X> for PixelLog<X> {
    type Error = Infallible;

    fn set_pixel(&mut self, x: i32, y: i32, extra: &X) -> Result<(), Infallible> {
        self.calls.push(DrawCall::pixel(x, y, extra.clone()));
        Ok(())
    }
}
