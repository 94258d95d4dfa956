//! Shared constants for image packing
//!
//! This module centralizes magic numbers and constants used throughout
//! the packing process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Default Options
// =============================================================================

/// Default margin around the page (millimeters)
pub const DEFAULT_MARGIN_MM: f32 = 10.0;

/// Default gap between neighbouring images (millimeters)
pub const DEFAULT_SPACING_MM: f32 = 5.0;

/// Default JPEG quality for re-encoded images
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// Default input folder
pub const DEFAULT_INPUT_FOLDER: &str = "input_images";

/// Default output file
pub const DEFAULT_OUTPUT_FILE: &str = "output.pdf";

// =============================================================================
// Image Source
// =============================================================================

/// File extensions picked up from the input folder (compared lowercase)
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Background that transparent pixels are flattened onto
pub const BACKGROUND_RGB: [u8; 3] = [255, 255, 255];

/// Suffix appended to the file stem of processed copies
pub const PROCESSED_SUFFIX: &str = "_processed.jpg";
