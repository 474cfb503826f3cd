//! Raster to vector tracing
use crate::error::TraceError;
use std::path::Path;
use vtracer::Config;

/// Traces the raster image at `src` into an SVG written to `dest`, using
/// vtracer's default clustering parameters.
pub fn to_svg(src: &Path, dest: &Path) -> Result<(), TraceError> {
    vtracer::convert_image_to_svg(src, dest, Config::default()).map_err(TraceError::Vectorize)
}
