pub mod constants;
pub mod layout;
mod options;
pub mod pack;
mod preview;
pub mod render;
pub mod source;
mod stats;
mod types;

pub use layout::{
    PackingResult, PageSpec, PlacedItem, SizedImage, SourceImage, pack_shelves, size_image,
};
pub use options::*;
pub use pack::{
    LayoutOutcome, PackReport, generate_pdf, layout_images, pack_folder, save_pdf,
};
pub use preview::generate_preview;
pub use source::{PreparedImage, load_images};
pub use stats::calculate_statistics;
pub use types::*;
