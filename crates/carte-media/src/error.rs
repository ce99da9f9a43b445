use thiserror::Error;

/// Errors produced by the normalization pipeline.
#[derive(Error, Debug)]
pub enum MediaError {
    /// Raster decode or PNG encode failure.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// SVG markup could not be parsed.
    #[error("SVG parse error: {0}")]
    Svg(#[from] usvg::Error),

    /// The source reports no visible area to rasterize.
    #[error("Source image has a zero dimension")]
    EmptySource,

    /// Target pixel buffer could not be allocated.
    #[error("Could not allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MediaError>;
