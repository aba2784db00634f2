//! Inktrace - raster images to SVG line art
//!
//! This library decodes an image, binarizes it against a luma
//! threshold, hands the bitmap to a contour tracer, and serializes the
//! traced outlines as a flat-black SVG document.
//!
//! The tracer is a collaborator, not part of this crate: anything
//! implementing [`Trace`] can be plugged in (a potrace binding, a
//! marching-squares extractor, a scripted stub in tests). Everything
//! around it lives here: normalization, path emission, document
//! writing, and the batch driver.
//!
//! # Example
//!
//! ```rust
//! use inktrace::{convert_bitmap, Bitmap, Curve, Point, Segment, Trace, TraceError};
//!
//! /// A tracer that outlines a fixed triangle, standing in for a real
//! /// contour-tracing backend.
//! struct Stub;
//!
//! impl Trace for Stub {
//!     fn trace(&self, _bitmap: &Bitmap) -> Result<Vec<Curve>, TraceError> {
//!         let start = Point::new(0.0, 0.0);
//!         Ok(vec![Curve::new(
//!             start,
//!             vec![
//!                 Segment::Corner { c: Point::new(2.0, 0.0), end: Point::new(4.0, 0.0) },
//!                 Segment::Corner { c: Point::new(2.0, 2.0), end: Point::new(2.0, 4.0) },
//!                 Segment::Corner { c: Point::new(1.0, 2.0), end: start },
//!             ],
//!         )])
//!     }
//! }
//!
//! let bitmap = Bitmap::new(4, 4);
//! let document = convert_bitmap(&bitmap, &Stub).unwrap();
//! assert!(document.to_svg().contains("<path d=\"M 0 0"));
//! ```

pub mod batch;
pub mod bitmap;
pub mod config;
pub mod error;
pub mod normalize;
pub mod render;
pub mod tracer;

pub use batch::{convert_file, run, BatchReport};
pub use bitmap::{Bitmap, Pixel};
pub use config::{Config, ConfigError, DEFAULT_THRESHOLD};
pub use error::{Error, TraceError};
pub use render::{emit, SvgDocument};
pub use tracer::{Curve, Point, Segment, Trace};

use image::DynamicImage;

/// Convert a decoded image into an SVG document.
///
/// This is the in-memory pipeline: binarize the image, trace it, emit
/// one path per traced curve. Nothing touches the filesystem; see
/// [`convert_file`] and [`run`] for the file-level drivers.
pub fn convert_image<T: Trace>(
    image: &DynamicImage,
    tracer: &T,
    config: &Config,
) -> Result<SvgDocument, Error> {
    let bitmap = normalize::binarize(image, config);
    convert_bitmap(&bitmap, tracer)
}

/// Convert an already-binarized bitmap into an SVG document.
pub fn convert_bitmap<T: Trace>(bitmap: &Bitmap, tracer: &T) -> Result<SvgDocument, Error> {
    let curves = tracer
        .trace(bitmap)
        .map_err(|source| Error::Trace { source })?;

    let mut document = SvgDocument::new(bitmap.width(), bitmap.height());
    for curve in &curves {
        document.push_path(render::emit(curve)?);
    }
    Ok(document)
}
