//! Image sizing
//!
//! Turns natural pixel dimensions into a placement rectangle that fits the
//! usable page width. Aspect ratio is preserved and images are never
//! upscaled. Scaled heights are rounded half-up to whole points.

use crate::types::{PackError, Result};

use super::{PageSpec, SizedImage, SourceImage};

/// Size an image to fit the usable width of a page.
pub fn size_image(image: &SourceImage, spec: &PageSpec) -> Result<SizedImage> {
    size_image_to_width(image, spec.usable_width())
}

/// Size an image so its width does not exceed `max_width`.
///
/// Images narrower than `max_width` keep their natural size. Wider images
/// are scaled down to exactly `max_width`.
pub fn size_image_to_width(image: &SourceImage, max_width: f32) -> Result<SizedImage> {
    if image.width == 0 || image.height == 0 {
        return Err(PackError::DegenerateImage {
            name: image.name.clone(),
            width: image.width,
            height: image.height,
        });
    }
    if max_width.is_nan() || max_width <= 0.0 {
        return Err(PackError::Config(format!(
            "Target width for '{}' must be positive, got {}",
            image.name, max_width
        )));
    }

    let natural_width = image.width as f32;
    let natural_height = image.height as f32;

    let (width, height) = if natural_width <= max_width {
        (natural_width, natural_height)
    } else {
        let factor = max_width / natural_width;
        let height = (natural_height * factor).round().max(1.0);
        (max_width, height)
    };

    Ok(SizedImage {
        source: image.clone(),
        width,
        height,
    })
}

/// Width at which `image` is as tall as `max_height`, rounded down to a
/// whole point.
///
/// Used to retry sizing for images that are too tall for a page. Scaled
/// heights never drop below 1pt, so on a page with less than 1pt of usable
/// height the result still does not fit and packing reports `ItemTooTall`.
pub fn width_for_height(image: &SourceImage, max_height: f32) -> f32 {
    let target_height = max_height.floor().max(1.0);
    target_height * image.width as f32 / image.height as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u32, height: u32) -> SourceImage {
        SourceImage {
            index: 0,
            name: "test.png".to_string(),
            path: "test.png".into(),
            width,
            height,
        }
    }

    fn spec() -> PageSpec {
        PageSpec::new(600.0, 800.0, 20.0, 10.0).unwrap()
    }

    #[test]
    fn test_small_image_keeps_natural_size() {
        let sized = size_image(&image(300, 400), &spec()).unwrap();
        assert_eq!(sized.width, 300.0);
        assert_eq!(sized.height, 400.0);
    }

    #[test]
    fn test_exact_usable_width_is_not_scaled() {
        let sized = size_image(&image(560, 100), &spec()).unwrap();
        assert_eq!(sized.width, 560.0);
        assert_eq!(sized.height, 100.0);
    }

    #[test]
    fn test_wide_image_scaled_to_usable_width() {
        // 1120 wide → factor 0.5
        let sized = size_image(&image(1120, 301), &spec()).unwrap();
        assert_eq!(sized.width, 560.0);
        // 150.5 rounds half-up
        assert_eq!(sized.height, 151.0);
    }

    #[test]
    fn test_extreme_aspect_ratio_keeps_positive_height() {
        let sized = size_image(&image(100_000, 1), &spec()).unwrap();
        assert_eq!(sized.width, 560.0);
        assert_eq!(sized.height, 1.0);
    }

    #[test]
    fn test_degenerate_image_rejected() {
        let result = size_image(&image(0, 10), &spec());
        assert!(matches!(result, Err(PackError::DegenerateImage { .. })));
    }

    #[test]
    fn test_width_for_height_fits() {
        let img = image(1000, 3000);
        let width = width_for_height(&img, 760.0);
        let sized = size_image_to_width(&img, width).unwrap();
        assert!(sized.height <= 760.0);
        assert!(sized.height > 750.0);
    }
}
