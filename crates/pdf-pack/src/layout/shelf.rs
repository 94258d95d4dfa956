//! Next-Fit Decreasing Height shelf packing
//!
//! Images are sorted tallest first and laid out left to right on shelves.
//! When an image does not fit on the current shelf a new shelf is opened
//! below it; when the new shelf would run past the bottom margin a new page
//! is started. Earlier shelves and pages are never revisited.

use crate::types::{PackError, Result};
use log::debug;

use super::{PackingResult, PageSpec, PlacedItem, Shelf, SizedImage};

/// Slack allowed when comparing against page bounds, absorbs float error
/// from margins that are not whole points.
const FIT_EPSILON: f32 = 1e-3;

/// Pack sized images onto pages.
///
/// Items are sorted by height, tallest first. The sort is stable so images
/// of equal height keep the order they were given in. An empty input yields
/// a result with zero pages.
pub fn pack_shelves(images: &[SizedImage], spec: &PageSpec) -> Result<PackingResult> {
    spec.validate()?;

    let mut sorted: Vec<&SizedImage> = images.iter().collect();
    sorted.sort_by(|a, b| b.height.total_cmp(&a.height));

    let mut items = Vec::with_capacity(sorted.len());
    let mut page_index = 0;
    let mut shelf = Shelf::new(spec.margin, spec.margin);

    for image in sorted {
        check_fits_page(image, spec)?;

        let (x, y) = if shelf.is_empty() {
            // First item on the page, always fits after the check above
            shelf.height = image.height;
            (shelf.cursor_x, shelf.top_y)
        } else if shelf.cursor_x + image.width <= spec.right_bound() + FIT_EPSILON {
            (shelf.cursor_x, shelf.top_y)
        } else {
            let new_top = shelf.top_y + shelf.height + spec.spacing;
            if new_top + image.height <= spec.bottom_bound() + FIT_EPSILON {
                debug!("Opening shelf at y={} on page {}", new_top, page_index);
                shelf = Shelf::new(new_top, spec.margin);
            } else {
                page_index += 1;
                debug!("Starting page {}", page_index);
                shelf = Shelf::new(spec.margin, spec.margin);
            }
            shelf.height = image.height;
            (shelf.cursor_x, shelf.top_y)
        };

        shelf.cursor_x = x + image.width + spec.spacing;

        debug!(
            "Placed '{}' ({}x{}) on page {} at ({}, {})",
            image.source.name, image.width, image.height, page_index, x, y
        );

        items.push(PlacedItem {
            source: image.source.clone(),
            page_index,
            x,
            y,
            width: image.width,
            height: image.height,
        });
    }

    let page_count = if items.is_empty() { 0 } else { page_index + 1 };

    Ok(PackingResult { items, page_count })
}

/// Reject items that could not fit even alone on a fresh page.
fn check_fits_page(image: &SizedImage, spec: &PageSpec) -> Result<()> {
    let finite = image.width.is_finite() && image.height.is_finite();
    if !finite || image.width <= 0.0 || image.height <= 0.0 {
        return Err(PackError::DegenerateImage {
            name: image.source.name.clone(),
            width: image.source.width,
            height: image.source.height,
        });
    }
    if image.width > spec.usable_width() + FIT_EPSILON {
        return Err(PackError::Config(format!(
            "Image '{}' was sized {}pt wide but the usable width is {}pt",
            image.source.name,
            image.width,
            spec.usable_width()
        )));
    }
    if image.height > spec.usable_height() + FIT_EPSILON {
        return Err(PackError::ItemTooTall {
            name: image.source.name.clone(),
            required: image.height,
            available: spec.usable_height(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SourceImage;

    fn sized(index: usize, width: f32, height: f32) -> SizedImage {
        SizedImage {
            source: SourceImage {
                index,
                name: format!("img{}.png", index),
                path: format!("img{}.png", index).into(),
                width: width as u32,
                height: height as u32,
            },
            width,
            height,
        }
    }

    fn spec() -> PageSpec {
        PageSpec::new(600.0, 800.0, 20.0, 10.0).unwrap()
    }

    #[test]
    fn test_overflow_to_new_shelf() {
        let images = vec![
            sized(0, 300.0, 400.0),
            sized(1, 250.0, 380.0),
            sized(2, 100.0, 100.0),
        ];
        let result = pack_shelves(&images, &spec()).unwrap();

        assert_eq!(result.page_count, 1);
        let positions: Vec<_> = result
            .items
            .iter()
            .map(|item| (item.page_index, item.x, item.y))
            .collect();
        // 330 + 250 = 580 fits exactly; the third item would end at 690
        assert_eq!(
            positions,
            vec![(0, 20.0, 20.0), (0, 330.0, 20.0), (0, 20.0, 430.0)]
        );
    }

    #[test]
    fn test_overflow_to_new_page() {
        let images = vec![
            sized(0, 500.0, 400.0),
            sized(1, 500.0, 380.0),
            sized(2, 500.0, 100.0),
        ];
        let result = pack_shelves(&images, &spec()).unwrap();

        // Shelf 1 at 20..420, shelf 2 would be 430..810 > 780
        assert_eq!(result.page_count, 2);
        assert_eq!(result.items[1].page_index, 1);
        assert_eq!((result.items[1].x, result.items[1].y), (20.0, 20.0));
        // The short item follows on page 1, never back on page 0
        assert_eq!(result.items[2].page_index, 1);
        assert_eq!(result.items[2].y, 410.0);
    }

    #[test]
    fn test_sorted_by_height_descending() {
        let images = vec![
            sized(0, 50.0, 10.0),
            sized(1, 50.0, 30.0),
            sized(2, 50.0, 20.0),
        ];
        let result = pack_shelves(&images, &spec()).unwrap();
        let order: Vec<_> = result.items.iter().map(|i| i.source.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_equal_heights_keep_input_order() {
        let images = vec![
            sized(3, 50.0, 20.0),
            sized(1, 60.0, 20.0),
            sized(2, 70.0, 20.0),
        ];
        let result = pack_shelves(&images, &spec()).unwrap();
        let order: Vec<_> = result.items.iter().map(|i| i.source.index).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_item_too_tall() {
        let images = vec![sized(0, 100.0, 761.0)];
        match pack_shelves(&images, &spec()) {
            Err(PackError::ItemTooTall {
                name,
                required,
                available,
            }) => {
                assert_eq!(name, "img0.png");
                assert_eq!(required, 761.0);
                assert_eq!(available, 760.0);
            }
            other => panic!("Expected ItemTooTall, got {:?}", other),
        }
    }

    #[test]
    fn test_item_exactly_page_height_fits() {
        let images = vec![sized(0, 100.0, 760.0), sized(1, 100.0, 760.0)];
        let result = pack_shelves(&images, &spec()).unwrap();
        assert_eq!(result.page_count, 1);
        assert_eq!(result.items[1].x, 130.0);
    }

    #[test]
    fn test_too_wide_is_contract_violation() {
        let images = vec![sized(0, 561.0, 10.0)];
        assert!(matches!(
            pack_shelves(&images, &spec()),
            Err(PackError::Config(_))
        ));
    }

    #[test]
    fn test_non_finite_size_rejected() {
        for (width, height) in [(10.0, f32::NAN), (f32::NAN, 10.0), (10.0, f32::INFINITY)] {
            let images = vec![sized(0, 50.0, 50.0), sized(1, width, height)];
            match pack_shelves(&images, &spec()) {
                Err(PackError::DegenerateImage { name, .. }) => assert_eq!(name, "img1.png"),
                other => panic!("Expected DegenerateImage, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let result = pack_shelves(&[], &spec()).unwrap();
        assert_eq!(result.page_count, 0);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_invalid_spec_rejected_before_packing() {
        let bad = PageSpec {
            width: 100.0,
            height: 100.0,
            margin: 50.0,
            spacing: 0.0,
        };
        assert!(matches!(
            pack_shelves(&[sized(0, 1.0, 1.0)], &bad),
            Err(PackError::Config(_))
        ));
    }
}
