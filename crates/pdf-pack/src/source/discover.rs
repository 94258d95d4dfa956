//! Input folder discovery

use crate::constants::SUPPORTED_EXTENSIONS;
use crate::types::*;
use log::warn;
use std::path::{Path, PathBuf};

/// List the supported image files in `folder`, sorted by file name.
///
/// The sort fixes the discovery order, which in turn decides how images of
/// equal height are ordered on a shelf.
pub async fn discover_images(folder: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let folder = folder.as_ref();

    let mut entries = tokio::fs::read_dir(folder).await.map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Input folder not readable: {}: {}", folder.display(), e),
        )
    })?;

    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !is_supported_image(&path) {
            continue;
        }
        // Follows symlinks, unlike DirEntry::file_type
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    if paths.is_empty() {
        return Err(PackError::NoImages(folder.to_owned()));
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Whether the file extension is one we load (case-insensitive)
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_image(Path::new("a.png")));
        assert!(is_supported_image(Path::new("b.JPG")));
        assert!(is_supported_image(Path::new("dir/c.Jpeg")));
        assert!(is_supported_image(Path::new("d.gif")));
        assert!(!is_supported_image(Path::new("e.bmp")));
        assert!(!is_supported_image(Path::new("png")));
        assert!(!is_supported_image(Path::new("notes.txt")));
    }
}
