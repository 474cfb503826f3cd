//! Raster conversion and thumbnail resizing
use crate::error::RasterError;
use image::{imageops::FilterType, io::Reader as ImageReader, ImageFormat};
use std::path::Path;

/// Re-encodes the image at `src` as a PNG at `dest`. The source format is
/// detected from the file contents rather than the file extension.
pub fn to_png(src: &Path, dest: &Path) -> Result<(), RasterError> {
    let img = ImageReader::open(src)
        .map_err(|err| RasterError::FileIO(err.to_string()))?
        .with_guessed_format()
        .map_err(|err| RasterError::FileIO(err.to_string()))?
        .decode()?;
    img.save_with_format(dest, ImageFormat::Png)?;

    Ok(())
}

/// Writes an `edge`x`edge` PNG thumbnail of `src` to `dest`.
pub fn resize(src: &Path, dest: &Path, edge: u32) -> Result<(), RasterError> {
    let img = image::open(src)?;
    img.resize_exact(edge, edge, FilterType::Lanczos3)
        .save_with_format(dest, ImageFormat::Png)?;

    Ok(())
}
