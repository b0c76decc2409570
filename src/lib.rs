//! # pixelgfx
//!
//! Hardware-agnostic 2D rasterization for displays that can only set pixels.
//!
//! A [`Canvas`] pairs surface bounds with a [`Backend`]. The backend must be
//! able to set one pixel; horizontal spans, vertical spans and rectangle fills
//! are optional and fall back to repeated pixel writes. Primitives translate
//! geometry into backend calls on the spot and keep no drawn state.
//!
//! ## Primitives
//!
//! - [`Canvas::line`]: integer Bresenham
//! - [`Canvas::rect`], [`Canvas::fill_rect`]: spans
//! - [`Canvas::circle`], [`Canvas::fill_circle`]: midpoint circle
//! - [`Canvas::triangle`], [`Canvas::fill_triangle`]: lines / scanline fill
//!
//! Every primitive takes a trailing `&X` that is forwarded untouched to each
//! backend call it makes, typically the color. Backend faults are returned
//! unmodified and stop the primitive.
//!
//! ## Quick Start
//!
//! ```rust
//! use pixelgfx::prelude::*;
//!
//! let fb = Framebuffer::new(64, 64)?;
//! let mut canvas = Canvas::with_extent(fb.extent(), fb);
//!
//! canvas.fill_circle(32, 32, 10, &Rgba::BLUE).unwrap();
//! canvas.triangle(4, 60, 32, 4, 60, 60, &Rgba::RED).unwrap();
//!
//! assert_eq!(canvas.backend().get_pixel(32, 32), Some(Rgba::BLUE));
//! let png = PngEncoder::to_bytes(canvas.backend())?;
//! assert!(!png.is_empty());
//! # Ok::<(), pixelgfx::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for geometry and color types
//!
//! ## Output
//!
//! Anything implementing [`output::Raster`] encodes to PNG. The bundled
//! framebuffer does, and [`output::CoverageMask`] turns a recorder's covered
//! cells into an image.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

// ============================================================================
// Core Modules
// ============================================================================

/// Backend capability trait.
pub mod backend;

/// Drawing context.
pub mod canvas;

/// Integer points, bounds and spans.
pub mod geometry;

/// Rasterization algorithms.
pub mod render;

// ============================================================================
// Backends and Output
// ============================================================================

/// RGBA color type.
pub mod color;

/// Reference RGBA framebuffer backend.
pub mod framebuffer;

/// Recording backends for tests and debugging.
pub mod recorder;

/// Image readback and PNG encoding.
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for buffer construction and output.
pub mod error;

pub use backend::Backend;
pub use canvas::Canvas;
pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use pixelgfx::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backend::Backend;
    pub use crate::canvas::Canvas;
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Axis, Extent, Point, Span};
    pub use crate::output::{CoverageMask, PngEncoder, Raster};
    pub use crate::recorder::{CallLog, DrawCall, PixelLog};
}
