//! Image loading and binarization

use std::path::Path;

use image::DynamicImage;
use tracing::debug;

use crate::bitmap::{Bitmap, Pixel};
use crate::config::Config;
use crate::error::Error;

/// Decode an image file into pixel data.
pub fn load_image(path: &Path) -> Result<DynamicImage, Error> {
    image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Reduce a decoded image to a binary bitmap.
///
/// Any pixel format goes through the `image` crate's luma conversion
/// first. Luma values strictly above `config.threshold` become
/// foreground (the region the tracer outlines and the output fills);
/// values at or below it become background. With `config.invert` the
/// classes are swapped after thresholding.
pub fn binarize(image: &DynamicImage, config: &Config) -> Bitmap {
    let gray = image.to_luma8();
    let (width, height) = gray.dimensions();

    let mut bitmap = Bitmap::new(width, height);
    for (x, y, pixel) in gray.enumerate_pixels() {
        if pixel.0[0] > config.threshold {
            bitmap.set(x, y, Pixel::Foreground);
        }
    }
    if config.invert {
        bitmap.invert();
    }

    debug!(
        width,
        height,
        foreground = bitmap.foreground_count(),
        "binarized image"
    );
    bitmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    fn gray_pixel(luma: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(1, 1, Luma([luma])))
    }

    #[test]
    fn threshold_boundary_is_strictly_greater() {
        let config = Config::default();
        let at = binarize(&gray_pixel(127), &config);
        let above = binarize(&gray_pixel(128), &config);
        assert_eq!(at.get(0, 0), Pixel::Background);
        assert_eq!(above.get(0, 0), Pixel::Foreground);
    }

    #[test]
    fn custom_threshold_moves_the_boundary() {
        let config = Config::new().with_threshold(200);
        let bitmap = binarize(&gray_pixel(150), &config);
        assert_eq!(bitmap.get(0, 0), Pixel::Background);
    }

    #[test]
    fn invert_swaps_the_classes() {
        let config = Config::new().with_invert(true);
        let bitmap = binarize(&gray_pixel(255), &config);
        assert_eq!(bitmap.get(0, 0), Pixel::Background);
    }

    #[test]
    fn rgb_input_is_reduced_to_luma_first() {
        let white = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([255, 255, 255])));
        let black = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([0, 0, 0])));
        let config = Config::default();
        assert_eq!(binarize(&white, &config).foreground_count(), 4);
        assert_eq!(binarize(&black, &config).foreground_count(), 0);
    }

    #[test]
    fn dimensions_match_the_source_image() {
        let image = DynamicImage::ImageLuma8(GrayImage::new(7, 3));
        let bitmap = binarize(&image, &Config::default());
        assert_eq!(bitmap.width(), 7);
        assert_eq!(bitmap.height(), 3);
    }
}
