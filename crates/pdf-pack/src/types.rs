use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Image '{name}' has degenerate dimensions {width}x{height}")]
    DegenerateImage {
        name: String,
        width: u32,
        height: u32,
    },
    #[error("Image '{name}' is too tall: needs {required}pt but only {available}pt fit on a page")]
    ItemTooTall {
        name: String,
        required: f32,
        available: f32,
    },
    #[error("No images found in {}", .0.display())]
    NoImages(PathBuf),
}

pub type Result<T> = std::result::Result<T, PackError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// What the pipeline does with an image that cannot fit on a page even alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TooTallPolicy {
    /// Abort the whole run with `PackError::ItemTooTall`
    #[default]
    Fail,
    /// Leave the image out and keep going
    Skip,
    /// Re-size the image so its height fits the usable page height.
    /// Fails with `ItemTooTall` when the usable height is under 1pt.
    Shrink,
}

/// Statistics about a packing run
#[derive(Debug, Clone, PartialEq)]
pub struct PackingStatistics {
    /// Number of images placed
    pub images: usize,
    /// Number of output pages
    pub pages: usize,
    /// Number of shelves opened across all pages
    pub shelves: usize,
    /// Area covered by images, summed over all pages (square points)
    pub used_area: f32,
    /// Usable area (inside margins) summed over all pages (square points)
    pub usable_area: f32,
    /// `used_area / usable_area`, 0.0 when there are no pages
    pub fill_ratio: f32,
    /// Fill ratio of each page, indexed by page
    pub per_page_fill: Vec<f32>,
}
