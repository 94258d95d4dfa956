use pdf_pack::*;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(128);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

fn arb_spec() -> impl Strategy<Value = PageSpec> {
    (200u32..1200, 200u32..1600, 0u32..40, 0u32..20).prop_map(|(w, h, m, s)| {
        PageSpec::new(w as f32, h as f32, m as f32, s as f32).expect("valid generated spec")
    })
}

fn arb_sources(max: usize) -> impl Strategy<Value = Vec<SourceImage>> {
    prop::collection::vec((1u32..3000, 1u32..3000), 0..max).prop_map(|dims| {
        dims.into_iter()
            .enumerate()
            .map(|(index, (w, h))| {
                SourceImage::new(index, format!("img{}.png", index), "img.png", w, h)
                    .expect("non-zero dimensions")
            })
            .collect()
    })
}

/// Size everything, shrinking images that are too tall for the page.
/// Generated pages always have well over 1pt of usable height.
fn layout(sources: &[SourceImage], spec: &PageSpec) -> PackingResult {
    layout_images(sources, spec, TooTallPolicy::Shrink)
        .expect("shrink policy always fits")
        .result
}

const EPS: f32 = 1e-2;

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn sizing_preserves_aspect_ratio(sources in arb_sources(2), spec in arb_spec()) {
        for image in &sources {
            let sized = size_image(image, &spec).unwrap();
            prop_assert!(sized.width <= spec.usable_width() + EPS);
            prop_assert!(sized.height >= 1.0);
            prop_assert!(sized.width <= image.width as f32);

            // Height is rounded to whole points, so allow half a point of error
            let expected_height = sized.width / image.aspect_ratio();
            prop_assert!(
                (sized.height - expected_height).abs() <= 0.5 + EPS
                    || sized.height == 1.0,
                "{:?} sized to {}x{}", image, sized.width, sized.height
            );
        }
    }

    #[test]
    fn placements_stay_in_bounds(sources in arb_sources(40), spec in arb_spec()) {
        let result = layout(&sources, &spec);
        for item in &result.items {
            prop_assert!(item.x >= spec.margin - EPS);
            prop_assert!(item.y >= spec.margin - EPS);
            prop_assert!(item.right() <= spec.right_bound() + EPS, "{:?}", item);
            prop_assert!(item.bottom() <= spec.bottom_bound() + EPS, "{:?}", item);
            prop_assert!(item.page_index < result.page_count);
        }
    }

    #[test]
    fn placements_never_overlap(sources in arb_sources(40), spec in arb_spec()) {
        let result = layout(&sources, &spec);
        for (i, a) in result.items.iter().enumerate() {
            for b in &result.items[i + 1..] {
                prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn every_image_is_placed_once(sources in arb_sources(40), spec in arb_spec()) {
        let result = layout(&sources, &spec);
        let mut indices: Vec<_> = result.items.iter().map(|i| i.source.index).collect();
        indices.sort_unstable();
        let expected: Vec<_> = (0..sources.len()).collect();
        prop_assert_eq!(indices, expected);
        if sources.is_empty() {
            prop_assert_eq!(result.page_count, 0);
        }
    }

    #[test]
    fn pages_grow_monotonically(sources in arb_sources(40), spec in arb_spec()) {
        let result = layout(&sources, &spec);
        for pair in result.items.windows(2) {
            prop_assert!(pair[0].page_index <= pair[1].page_index);
        }
        if let Some(last) = result.items.last() {
            prop_assert_eq!(result.page_count, last.page_index + 1);
        }
    }

    #[test]
    fn heights_descend_and_shelves_fill_left_to_right(
        sources in arb_sources(40),
        spec in arb_spec(),
    ) {
        let result = layout(&sources, &spec);
        for pair in result.items.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.height >= b.height);
            if a.page_index == b.page_index && a.y == b.y {
                // Same shelf: b continues to the right and is no taller
                prop_assert!(b.x >= a.right());
            }
        }
    }

    #[test]
    fn packing_is_deterministic(sources in arb_sources(30), spec in arb_spec()) {
        prop_assert_eq!(layout(&sources, &spec), layout(&sources, &spec));
    }
}
