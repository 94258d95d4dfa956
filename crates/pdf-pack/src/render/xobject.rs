//! Image XObject creation
//!
//! Each prepared image is embedded once as a DCT-encoded Image XObject,
//! which output pages then reference by name.

use crate::source::PreparedImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

// =============================================================================
// XObject Creation
// =============================================================================

/// Create an Image XObject for a prepared image.
///
/// Results are cached by discovery index so an image is embedded only once
/// no matter how often it is referenced.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `image` - The prepared image holding JPEG bytes
/// * `cache` - Discovery index to already embedded XObject
pub fn create_image_xobject(
    output: &mut Document,
    image: &PreparedImage,
    cache: &mut HashMap<usize, ObjectId>,
) -> ObjectId {
    if let Some(&id) = cache.get(&image.source.index) {
        return id;
    }

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Image".to_vec()));
    xobject_dict.set("Width", Object::Integer(image.source.width as i64));
    xobject_dict.set("Height", Object::Integer(image.source.height as i64));
    xobject_dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    xobject_dict.set("BitsPerComponent", Object::Integer(8));
    xobject_dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

    // Already JPEG compressed, keep lopdf from deflating it again
    let stream = Stream::new(xobject_dict, image.jpeg.clone()).with_compression(false);
    let id = output.add_object(stream);
    cache.insert(image.source.index, id);
    id
}
