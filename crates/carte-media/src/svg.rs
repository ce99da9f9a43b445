//! Vector source rasterization.
//!
//! Parses SVG markup with `usvg` and renders it with `resvg` onto a
//! white-filled pixmap at the fitted target size.

use image::RgbaImage;
use resvg::tiny_skia;

use crate::error::{MediaError, Result};
use crate::fit::{fit_dimensions, FitBounds};

/// Render SVG markup onto a white canvas at the fitted size.
pub fn render_svg(data: &[u8], bounds: FitBounds) -> Result<RgbaImage> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())?;

    let size = tree.size();
    let natural_w = size.width().round() as u32;
    let natural_h = size.height().round() as u32;
    if natural_w == 0 || natural_h == 0 {
        return Err(MediaError::EmptySource);
    }

    let (target_w, target_h) = fit_dimensions(natural_w, natural_h, bounds);
    let mut pixmap = tiny_skia::Pixmap::new(target_w, target_h).ok_or(MediaError::Canvas {
        width: target_w,
        height: target_h,
    })?;

    // QR SVGs commonly leave the background transparent; it must read as
    // white in the output.
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(
        target_w as f32 / size.width(),
        target_h as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // Fully opaque after the white fill, so the premultiplied buffer is
    // already straight RGBA.
    RgbaImage::from_raw(target_w, target_h, pixmap.take()).ok_or(MediaError::Canvas {
        width: target_w,
        height: target_h,
    })
}
