//! The decode → fit → re-encode pipeline.

use std::io::Cursor;

use image::{imageops, DynamicImage, ImageFormat, Rgba, RgbaImage};
use tracing::debug;

use crate::error::Result;
use crate::fit::{fit_dimensions, FitBounds};
use crate::svg;

/// What kind of pixel source a payload is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// An already-rasterized image (PNG, JPEG, WebP).
    Raster,
    /// SVG markup that must be rendered first.
    Vector,
}

impl SourceKind {
    /// Guess the kind from the attachment file name and the payload's
    /// leading bytes. An XML declaration may precede the `<svg>` tag, so
    /// both openings count as vector.
    pub fn infer(file_name: &str, data: &[u8]) -> Self {
        if file_name.to_ascii_lowercase().ends_with(".svg") {
            return Self::Vector;
        }
        let head = data.get(..256).unwrap_or(data);
        let head = String::from_utf8_lossy(head);
        let head = head.trim_start();
        if head.starts_with("<svg") || head.starts_with("<?xml") {
            Self::Vector
        } else {
            Self::Raster
        }
    }
}

/// Normalize an arbitrary source image into a bounded PNG.
///
/// Vector sources are rasterized directly at the target size; raster
/// sources are decoded, scaled into the bound and composited over white so
/// transparent regions render correctly against light UI chrome.
pub fn normalize_to_png(data: &[u8], kind: SourceKind, bounds: FitBounds) -> Result<Vec<u8>> {
    let canvas = match kind {
        SourceKind::Vector => svg::render_svg(data, bounds)?,
        SourceKind::Raster => normalize_raster(data, bounds)?,
    };

    debug!(
        width = canvas.width(),
        height = canvas.height(),
        "image normalized"
    );

    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(canvas).write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

fn normalize_raster(data: &[u8], bounds: FitBounds) -> Result<RgbaImage> {
    let source = image::load_from_memory(data)?.to_rgba8();
    let (target_w, target_h) = fit_dimensions(source.width(), source.height(), bounds);

    let scaled = if (target_w, target_h) == source.dimensions() {
        source
    } else {
        imageops::resize(&source, target_w, target_h, imageops::FilterType::Lanczos3)
    };

    let mut canvas = RgbaImage::from_pixel(target_w, target_h, Rgba([255, 255, 255, 255]));
    imageops::overlay(&mut canvas, &scaled, 0, 0);
    Ok(canvas)
}
