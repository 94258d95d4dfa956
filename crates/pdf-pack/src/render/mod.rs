//! PDF rendering modules for packing
//!
//! This module handles all PDF-specific operations:
//! - Embedding prepared images as Image XObjects
//! - Building one output page per page index
//! - Assembling the page tree and catalog

mod page;
mod xobject;

pub use page::render_page;
pub use xobject::create_image_xobject;

use crate::layout::{PackingResult, PageSpec, PlacedItem};
use crate::source::PreparedImage;
use crate::types::*;
use log::info;
use lopdf::{Dictionary, Document, Object};
use std::collections::HashMap;

/// Render a packing result to a PDF document.
///
/// Emits exactly `result.page_count` pages; each placed item is drawn at its
/// assigned rectangle using the JPEG data of the matching prepared image.
pub fn render_pdf(
    images: &[PreparedImage],
    result: &PackingResult,
    spec: &PageSpec,
) -> Result<Document> {
    let by_index: HashMap<usize, &PreparedImage> =
        images.iter().map(|img| (img.source.index, img)).collect();

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::with_capacity(result.page_count);
    let mut xobject_cache = HashMap::new();

    for page_index in 0..result.page_count {
        let placements: Vec<&PlacedItem> = result.items_on_page(page_index).collect();
        info!(
            "Rendering page {}/{} with {} images",
            page_index + 1,
            result.page_count,
            placements.len()
        );

        let page_id = render_page(
            &mut output,
            &by_index,
            &placements,
            spec,
            pages_tree_id,
            &mut xobject_cache,
        )?;
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(output)
}
