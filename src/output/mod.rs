//! Image output for anything that can be sampled over an [`Extent`](crate::geometry::Extent).

mod png_encoder;
mod raster;

pub use png_encoder::PngEncoder;
pub use raster::{CoverageMask, Raster};
