//! Writing the packed document to disk

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Save the packed document, creating missing parent folders.
///
/// Page content streams are deflated before writing. Embedded JPEGs opt out
/// of compression and are written as they are.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let bytes = tokio::task::spawn_blocking(move || {
        doc.compress();
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok::<_, PackError>(buffer)
    })
    .await??;

    tokio::fs::write(path, bytes).await?;
    Ok(())
}
