//! Aspect-preserving fit arithmetic.
//!
//! QR sources arrive at wildly different sizes (vector markup with a tiny
//! viewBox, oversized raster exports). The fit policy maps any natural size
//! into a band the UI and the download both work well with.

/// Upper edge bound: a source larger than this on either axis is scaled down.
pub const MAX_EDGE: u32 = 512;

/// Lower edge bound: a source smaller than this on both axes is scaled up.
pub const MIN_EDGE: u32 = 256;

/// Two-sided bound for [`fit_dimensions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitBounds {
    /// Downscale trigger: neither source dimension may exceed this.
    pub max: u32,
    /// Upscale trigger: sources below this on both axes are scaled up.
    pub min: u32,
}

impl FitBounds {
    /// Fixed square canvas, the degenerate `min == max` case.
    pub fn square(edge: u32) -> Self {
        Self { max: edge, min: edge }
    }
}

impl Default for FitBounds {
    fn default() -> Self {
        Self {
            max: MAX_EDGE,
            min: MIN_EDGE,
        }
    }
}

/// Compute output dimensions for a `width` x `height` source.
///
/// Downscale is checked first and short-circuits. Upscale applies the
/// larger of the two per-axis ratios so the smaller axis reaches `min`,
/// which may push the longer edge past `max`: the two policies are
/// mutually exclusive, not chained.
pub fn fit_dimensions(width: u32, height: u32, bounds: FitBounds) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width.max(1), height.max(1));
    }

    let (w, h) = (f64::from(width), f64::from(height));

    if width > bounds.max || height > bounds.max {
        let scale = (f64::from(bounds.max) / w).min(f64::from(bounds.max) / h);
        return scaled(w, h, scale);
    }

    if width < bounds.min && height < bounds.min {
        let scale = (f64::from(bounds.min) / w).max(f64::from(bounds.min) / h);
        return scaled(w, h, scale);
    }

    (width, height)
}

fn scaled(w: f64, h: f64, scale: f64) -> (u32, u32) {
    ((w * scale).round() as u32, (h * scale).round() as u32)
}
