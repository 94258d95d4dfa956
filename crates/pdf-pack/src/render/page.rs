//! Output page rendering
//!
//! Layout coordinates are measured from the top-left corner of the page,
//! PDF user space from the bottom-left. The flip happens here and nowhere
//! else.

use crate::layout::{PageSpec, PlacedItem};
use crate::source::PreparedImage;
use crate::types::{PackError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::xobject::create_image_xobject;

// =============================================================================
// Public API
// =============================================================================

/// Render one output page holding the given placements.
///
/// # Arguments
/// * `output` - The output document
/// * `images` - Prepared images keyed by discovery index
/// * `placements` - Items placed on this page
/// * `spec` - Page geometry
/// * `parent_pages_id` - The parent Pages object ID
/// * `xobject_cache` - Already embedded images, shared across pages
pub fn render_page(
    output: &mut Document,
    images: &HashMap<usize, &PreparedImage>,
    placements: &[&PlacedItem],
    spec: &PageSpec,
    parent_pages_id: ObjectId,
    xobject_cache: &mut HashMap<usize, ObjectId>,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(spec.width),
            Object::Real(spec.height),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();

    for placement in placements {
        let index = placement.source.index;
        let image = images.get(&index).ok_or_else(|| {
            PackError::Config(format!(
                "No image data for '{}' (index {})",
                placement.source.name, index
            ))
        })?;

        let xobject_name = format!("Im{}", index);
        let xobject_id = create_image_xobject(output, image, xobject_cache);
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        content_ops.push(generate_placement_command(&xobject_name, placement, spec));
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Generate the content stream command that draws an image.
///
/// Image XObjects occupy the unit square, so the matrix scales it to the
/// placed size and moves it to the bottom-left corner of the placement.
fn generate_placement_command(xobject_name: &str, item: &PlacedItem, spec: &PageSpec) -> String {
    let pdf_y = spec.height - item.y - item.height;
    format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        item.width, item.height, item.x, pdf_y, xobject_name
    )
}
