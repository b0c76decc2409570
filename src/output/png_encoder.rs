//! PNG output for any [`Raster`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use super::raster::Raster;
use crate::error::{Error, Result};
use crate::geometry::Extent;

/// 8-bit RGBA PNG encoder.
pub struct PngEncoder;

impl PngEncoder {
    /// Encode `raster` into `writer`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if the raster's extent is empty or
    /// negative, otherwise any I/O or encoding failure.
    pub fn encode<R, W>(raster: &R, writer: W) -> Result<()>
    where
        R: Raster + ?Sized,
        W: Write,
    {
        let (width, height) = image_size(raster.extent())?;
        debug!("encoding {width}x{height} PNG");

        let mut encoder = png::Encoder::new(writer, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&raster.rgba_bytes())?;
        writer.finish()?;
        Ok(())
    }

    /// Encode `raster` to PNG bytes.
    ///
    /// # Errors
    ///
    /// See [`PngEncoder::encode`].
    pub fn to_bytes<R: Raster + ?Sized>(raster: &R) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(raster, &mut buffer)?;
        Ok(buffer)
    }

    /// Write `raster` to a PNG file at `path`.
    ///
    /// # Errors
    ///
    /// See [`PngEncoder::encode`]; file creation failures are [`Error::Io`].
    pub fn write_to_file<R, P>(raster: &R, path: P) -> Result<()>
    where
        R: Raster + ?Sized,
        P: AsRef<Path>,
    {
        let file = File::create(path)?;
        Self::encode(raster, BufWriter::new(file))
    }
}

fn image_size(extent: Extent) -> Result<(u32, u32)> {
    match (u32::try_from(extent.width), u32::try_from(extent.height)) {
        (Ok(width), Ok(height)) if width > 0 && height > 0 => Ok((width, height)),
        _ => Err(Error::InvalidDimensions {
            width: extent.width.into(),
            height: extent.height.into(),
        }),
    }
}
