//! Image loading
//!
//! Reads every supported image from the input folder and prepares it for
//! layout and rendering:
//! 1. Discover files in a stable order
//! 2. Flatten transparency and crop to content
//! 3. Re-encode as JPEG at the configured quality

mod discover;
mod preprocess;

pub use discover::{discover_images, is_supported_image};
pub use preprocess::{ProcessedImage, content_bounds, flatten_onto_background, preprocess_image};

use crate::constants::PROCESSED_SUFFIX;
use crate::layout::SourceImage;
use crate::options::PackOptions;
use crate::types::*;
use log::{info, warn};
use std::path::Path;

/// A discovered image together with its re-encoded pixel data
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedImage {
    pub source: SourceImage,
    pub jpeg: Vec<u8>,
}

/// Load and preprocess every image in the configured input folder.
///
/// Images that fail to decode are logged and left out, as are images that
/// end up with a zero dimension.
pub async fn load_images(options: &PackOptions) -> Result<Vec<PreparedImage>> {
    info!("Loading images from {}", options.input_folder.display());

    let paths = discover_images(&options.input_folder).await?;

    if let Some(dir) = &options.processed_dir {
        tokio::fs::create_dir_all(dir).await?;
    }

    let mut images = Vec::with_capacity(paths.len());
    for (index, path) in paths.into_iter().enumerate() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let bytes = tokio::fs::read(&path).await?;
        let quality = options.quality;
        let auto_crop = options.auto_crop;
        let processed =
            tokio::task::spawn_blocking(move || preprocess_image(&bytes, quality, auto_crop))
                .await?;

        let processed = match processed {
            Ok(processed) => processed,
            Err(e) => {
                warn!("Error processing {}: {}", path.display(), e);
                continue;
            }
        };

        let source =
            match SourceImage::new(index, name, path.clone(), processed.width, processed.height) {
                Ok(source) => source,
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

        if let Some(dir) = &options.processed_dir {
            write_processed_copy(dir, &path, &processed.jpeg).await?;
        }

        images.push(PreparedImage {
            source,
            jpeg: processed.jpeg,
        });
    }

    info!("Loaded {} images", images.len());
    Ok(images)
}

async fn write_processed_copy(dir: &Path, original: &Path, jpeg: &[u8]) -> Result<()> {
    let stem = original
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let target = dir.join(format!("{}{}", stem, PROCESSED_SUFFIX));
    tokio::fs::write(target, jpeg).await?;
    Ok(())
}
