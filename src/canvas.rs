//! The drawing context shared by every primitive.

use log::debug;

use crate::backend::Backend;
use crate::geometry::Extent;
use crate::render::span;

/// Surface bounds plus the backend that receives pixel and span writes.
///
/// A canvas keeps no drawn state. Every primitive translates its geometry into
/// backend calls immediately and returns. The bounds never change after
/// construction; only the backend is mutated, through its own methods.
///
/// Primitives live in the [`render`](crate::render) submodules as
/// `impl Canvas` blocks.
#[derive(Debug, Clone)]
pub struct Canvas<B> {
    bounds: Extent,
    backend: B,
}

impl<B> Canvas<B> {
    /// Create a canvas of `width` x `height` pixels over `backend`.
    ///
    /// Any size is accepted. With zero or negative sizes the bounds-checked
    /// primitives draw nothing.
    pub fn new(width: i32, height: i32, backend: B) -> Self {
        Self::with_extent(Extent::new(width, height), backend)
    }

    /// Create a canvas from existing bounds.
    pub fn with_extent(bounds: Extent, backend: B) -> Self {
        debug!("canvas created: {}x{}", bounds.width, bounds.height);
        Self { bounds, backend }
    }

    /// Surface width in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.bounds.width
    }

    /// Surface height in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bounds.height
    }

    /// Surface bounds.
    #[must_use]
    pub const fn extent(&self) -> Extent {
        self.bounds
    }

    /// Shared access to the backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Exclusive access to the backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Release the backend.
    pub fn into_inner(self) -> B {
        self.backend
    }

    /// Set a single pixel through the backend, unchecked.
    pub fn pixel<X>(&mut self, x: i32, y: i32, extra: &X) -> Result<(), <B as Backend<X>>::Error>
    where
        B: Backend<X>,
        X: ?Sized,
    {
        self.backend.set_pixel(x, y, extra)
    }

    /// Draw a horizontal span using the backend's span operation.
    pub fn hspan<X>(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        extra: &X,
    ) -> Result<(), <B as Backend<X>>::Error>
    where
        B: Backend<X>,
        X: ?Sized,
    {
        self.backend.draw_hspan(self.bounds, x, y, length, extra)
    }

    /// Draw a vertical span using the backend's span operation.
    pub fn vspan<X>(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        extra: &X,
    ) -> Result<(), <B as Backend<X>>::Error>
    where
        B: Backend<X>,
        X: ?Sized,
    {
        self.backend.draw_vspan(self.bounds, x, y, length, extra)
    }

    /// Draw a horizontal span pixel by pixel, bypassing any backend override.
    ///
    /// See [`span::fallback_hspan`] for the rejection rule.
    pub fn fallback_hspan<X>(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        extra: &X,
    ) -> Result<(), <B as Backend<X>>::Error>
    where
        B: Backend<X>,
        X: ?Sized,
    {
        span::fallback_hspan(&mut self.backend, self.bounds, x, y, length, extra)
    }

    /// Draw a vertical span pixel by pixel, bypassing any backend override.
    ///
    /// See [`span::fallback_vspan`] for the rejection rule.
    pub fn fallback_vspan<X>(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        extra: &X,
    ) -> Result<(), <B as Backend<X>>::Error>
    where
        B: Backend<X>,
        X: ?Sized,
    {
        span::fallback_vspan(&mut self.backend, self.bounds, x, y, length, extra)
    }
}
