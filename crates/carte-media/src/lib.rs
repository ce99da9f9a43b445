//! # carte-media
//!
//! Image normalization for QR attachments: decode a raster or vector
//! source, fit it into a two-sided dimension bound while preserving aspect
//! ratio, composite it over a white background and re-encode it as PNG.
//!
//! Every failure in the pipeline surfaces as a [`MediaError`] so the
//! caller can fall back to offering the unmodified original bytes instead
//! of blocking the user.

pub mod error;
pub mod fit;
pub mod normalize;
pub mod svg;

pub use error::MediaError;
pub use fit::{fit_dimensions, FitBounds};
pub use normalize::{normalize_to_png, SourceKind};
