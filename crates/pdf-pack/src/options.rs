use crate::constants::*;
use crate::layout::PageSpec;
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete packing configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PackOptions {
    // Input / output
    pub input_folder: PathBuf,
    pub output_file: PathBuf,
    /// Where to write the re-encoded JPEGs, if anywhere
    pub processed_dir: Option<PathBuf>,

    // Page geometry
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub margin_mm: f32,
    pub spacing_mm: f32,

    // Preprocessing
    pub quality: u8,
    pub auto_crop: bool,

    // Oversize handling
    pub too_tall: TooTallPolicy,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            input_folder: PathBuf::from(DEFAULT_INPUT_FOLDER),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            processed_dir: None,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            margin_mm: DEFAULT_MARGIN_MM,
            spacing_mm: DEFAULT_SPACING_MM,
            quality: DEFAULT_JPEG_QUALITY,
            auto_crop: true,
            too_tall: TooTallPolicy::Fail,
        }
    }
}

impl PackOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| PackError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PackError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.quality == 0 || self.quality > 100 {
            return Err(PackError::Config(format!(
                "JPEG quality must be between 1 and 100, got {}",
                self.quality
            )));
        }

        if let PaperSize::Custom {
            width_mm,
            height_mm,
        } = self.paper_size
        {
            if width_mm <= 0.0 || height_mm <= 0.0 {
                return Err(PackError::Config(format!(
                    "Custom paper size must be positive, got {}x{}mm",
                    width_mm, height_mm
                )));
            }
        }

        self.page_spec().map(|_| ())
    }

    /// Page geometry in points
    pub fn page_spec(&self) -> Result<PageSpec> {
        let (width_mm, height_mm) = self
            .paper_size
            .dimensions_with_orientation(self.orientation);
        PageSpec::new(
            mm_to_pt(width_mm),
            mm_to_pt(height_mm),
            mm_to_pt(self.margin_mm),
            mm_to_pt(self.spacing_mm),
        )
    }
}
