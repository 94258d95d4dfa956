use crate::layout::{PackingResult, PageSpec};
use crate::types::*;
use std::collections::BTreeSet;

/// Calculate statistics for a packing result
pub fn calculate_statistics(result: &PackingResult, spec: &PageSpec) -> PackingStatistics {
    let pages = result.page_count;
    let usable_per_page = spec.usable_width() * spec.usable_height();

    let mut used_per_page = vec![0.0f32; pages];
    for item in &result.items {
        if let Some(used) = used_per_page.get_mut(item.page_index) {
            *used += item.width * item.height;
        }
    }

    // A shelf is identified by its page and top edge
    let shelves: BTreeSet<(usize, u32)> = result
        .items
        .iter()
        .map(|item| (item.page_index, item.y.to_bits()))
        .collect();

    let used_area: f32 = used_per_page.iter().sum();
    let usable_area = usable_per_page * pages as f32;
    let fill_ratio = if usable_area > 0.0 {
        used_area / usable_area
    } else {
        0.0
    };

    let per_page_fill = used_per_page
        .iter()
        .map(|used| used / usable_per_page)
        .collect();

    PackingStatistics {
        images: result.items.len(),
        pages,
        shelves: shelves.len(),
        used_area,
        usable_area,
        fill_ratio,
        per_page_fill,
    }
}
