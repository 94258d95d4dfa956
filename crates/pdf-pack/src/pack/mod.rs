//! Image packing - arranging images onto PDF pages
//!
//! This module orchestrates the packing process:
//! 1. Load and preprocess source images
//! 2. Size each image to the usable page width
//! 3. Shelf-pack the sized images onto pages
//! 4. Render to output PDF

mod io;

pub use io::save_pdf;

use crate::layout::{
    PackingResult, PageSpec, SizedImage, SourceImage, pack_shelves, size_image,
    size_image_to_width, width_for_height,
};
use crate::options::PackOptions;
use crate::render::render_pdf;
use crate::source::{PreparedImage, load_images};
use crate::stats::calculate_statistics;
use crate::types::*;
use log::{info, warn};
use lopdf::Document;

/// Packing result plus the images that were left out of it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutOutcome {
    pub result: PackingResult,
    /// Images dropped under `TooTallPolicy::Skip`
    pub skipped: Vec<SourceImage>,
}

/// Summary of a complete folder-to-PDF run
#[derive(Debug, Clone, PartialEq)]
pub struct PackReport {
    pub statistics: PackingStatistics,
    /// File names of images left out of the document
    pub skipped: Vec<String>,
}

/// Size and pack images onto pages.
///
/// Images too tall for a single page are handled according to `policy`.
/// The packer itself never drops an image; skipping and shrinking happen
/// here, before packing.
pub fn layout_images(
    images: &[SourceImage],
    spec: &PageSpec,
    policy: TooTallPolicy,
) -> Result<LayoutOutcome> {
    spec.validate()?;

    let mut sized = Vec::with_capacity(images.len());
    let mut skipped = Vec::new();

    for image in images {
        let candidate = size_image(image, spec)?;
        if candidate.height <= spec.usable_height() {
            sized.push(candidate);
            continue;
        }

        match policy {
            TooTallPolicy::Fail => {
                return Err(PackError::ItemTooTall {
                    name: image.name.clone(),
                    required: candidate.height,
                    available: spec.usable_height(),
                });
            }
            TooTallPolicy::Skip => {
                warn!(
                    "Skipping '{}': {}pt tall, page fits {}pt",
                    image.name,
                    candidate.height,
                    spec.usable_height()
                );
                skipped.push(image.clone());
            }
            TooTallPolicy::Shrink => {
                let shrunk = shrink_to_page(image, spec)?;
                info!(
                    "Shrinking '{}' to {}x{} to fit the page height",
                    image.name, shrunk.width, shrunk.height
                );
                sized.push(shrunk);
            }
        }
    }

    let result = pack_shelves(&sized, spec)?;
    info!(
        "Packed {} images into {} pages",
        result.items.len(),
        result.page_count
    );

    Ok(LayoutOutcome { result, skipped })
}

fn shrink_to_page(image: &SourceImage, spec: &PageSpec) -> Result<SizedImage> {
    let width = width_for_height(image, spec.usable_height()).min(spec.usable_width());
    size_image_to_width(image, width)
}

/// Render a packing result to a PDF document off the async runtime
pub async fn generate_pdf(
    images: &[PreparedImage],
    result: &PackingResult,
    spec: &PageSpec,
) -> Result<Document> {
    let images = images.to_vec();
    let result = result.clone();
    let spec = *spec;

    tokio::task::spawn_blocking(move || render_pdf(&images, &result, &spec)).await?
}

/// Run the whole pipeline: load the input folder, pack, render and save.
pub async fn pack_folder(options: &PackOptions) -> Result<PackReport> {
    options.validate()?;
    let spec = options.page_spec()?;

    let images = load_images(options).await?;
    if images.is_empty() {
        return Err(PackError::NoImages(options.input_folder.clone()));
    }

    let sources: Vec<SourceImage> = images.iter().map(|img| img.source.clone()).collect();
    let outcome = layout_images(&sources, &spec, options.too_tall)?;
    let statistics = calculate_statistics(&outcome.result, &spec);

    info!("Generating PDF: {}", options.output_file.display());
    let document = generate_pdf(&images, &outcome.result, &spec).await?;
    save_pdf(document, &options.output_file).await?;
    info!("PDF saved successfully: {}", options.output_file.display());

    Ok(PackReport {
        statistics,
        skipped: outcome.skipped.into_iter().map(|img| img.name).collect(),
    })
}
