//! Rasterization algorithms for geometric primitives.
//!
//! Each submodule adds primitives to [`Canvas`](crate::canvas::Canvas). All of
//! them end in the three backend operations: `set_pixel`, `draw_hspan` and
//! `draw_vspan`.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer error accumulation, one pixel per major-axis step
//! - **Midpoint Circle**: 8-way symmetric outline, vertical-span fill
//! - **Scanline Triangle Fill**: sorted vertices, two-phase edge interpolation
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae with a digital plotter."

mod circle;
mod line;
mod rect;
pub mod span;
mod triangle;

pub use line::bresenham;
pub use span::{fallback_hspan, fallback_vspan};
