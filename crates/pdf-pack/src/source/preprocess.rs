//! Image preprocessing
//!
//! Every image is flattened to RGB, optionally cropped to its content and
//! re-encoded as JPEG so the renderer can embed it directly.

use crate::constants::BACKGROUND_RGB;
use crate::types::*;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, Rgb, RgbImage, imageops};

/// Result of preprocessing one image
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedImage {
    /// Baseline JPEG bytes
    pub jpeg: Vec<u8>,
    /// Pixel width after cropping
    pub width: u32,
    /// Pixel height after cropping
    pub height: u32,
}

/// Decode, flatten, crop and re-encode an image.
pub fn preprocess_image(bytes: &[u8], quality: u8, auto_crop: bool) -> Result<ProcessedImage> {
    let decoded = image::load_from_memory(bytes)?;
    let mut rgb = flatten_onto_background(&decoded);

    if auto_crop {
        if let Some((x, y, width, height)) = content_bounds(&rgb) {
            rgb = imageops::crop_imm(&rgb, x, y, width, height).to_image();
        }
    }

    let jpeg = encode_jpeg(&rgb, quality)?;
    Ok(ProcessedImage {
        jpeg,
        width: rgb.width(),
        height: rgb.height(),
    })
}

/// Composite transparent pixels onto the background color.
pub fn flatten_onto_background(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let alpha = a as u16;
        let blend = |channel: u8, background: u8| -> u8 {
            ((channel as u16 * alpha + background as u16 * (255 - alpha) + 127) / 255) as u8
        };
        Rgb([
            blend(r, BACKGROUND_RGB[0]),
            blend(g, BACKGROUND_RGB[1]),
            blend(b, BACKGROUND_RGB[2]),
        ])
    })
}

/// Bounding box `(x, y, width, height)` of pixels that differ from the
/// background, or `None` when the image is entirely background.
pub fn content_bounds(image: &RgbImage) -> Option<(u32, u32, u32, u32)> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0 != BACKGROUND_RGB {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    found.then(|| (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100));
        encoder.encode_image(image)?;
    }
    Ok(bytes)
}
