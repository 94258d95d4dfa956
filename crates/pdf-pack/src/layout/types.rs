//! Layout data types for packing
//!
//! These types carry an image from discovery, through sizing, to its final
//! position on a page. All lengths are in points; a source pixel counts as
//! one point.

use crate::types::{PackError, Result};
use std::path::PathBuf;

/// Page geometry the packer works against
///
/// `width` and `height` are the full page size. The usable area is the page
/// inset by `margin` on all four sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSpec {
    /// Full page width
    pub width: f32,
    /// Full page height
    pub height: f32,
    /// Inset from every page edge
    pub margin: f32,
    /// Gap between neighbouring images and between shelves
    pub spacing: f32,
}

impl PageSpec {
    /// Create a page spec, rejecting non-positive or inconsistent dimensions
    pub fn new(width: f32, height: f32, margin: f32, spacing: f32) -> Result<Self> {
        let spec = Self {
            width,
            height,
            margin,
            spacing,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check the page invariants
    pub fn validate(&self) -> Result<()> {
        let all_finite = [self.width, self.height, self.margin, self.spacing]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(PackError::Config(format!(
                "Page dimensions must be finite: {:?}",
                self
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(PackError::Config(format!(
                "Page size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.margin < 0.0 {
            return Err(PackError::Config(format!(
                "Margin must not be negative, got {}",
                self.margin
            )));
        }
        if self.spacing < 0.0 {
            return Err(PackError::Config(format!(
                "Spacing must not be negative, got {}",
                self.spacing
            )));
        }
        if self.usable_width() <= 0.0 || self.usable_height() <= 0.0 {
            return Err(PackError::Config(format!(
                "Margin {} leaves no usable area on a {}x{} page",
                self.margin, self.width, self.height
            )));
        }
        Ok(())
    }

    /// Width inside the margins
    pub fn usable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Height inside the margins
    pub fn usable_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }

    /// Rightmost x an item may extend to
    pub fn right_bound(&self) -> f32 {
        self.width - self.margin
    }

    /// Lowest y (measured from the top) an item may extend to
    pub fn bottom_bound(&self) -> f32 {
        self.height - self.margin
    }
}

/// An image as discovered in the input folder
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    /// Position in discovery order; breaks height ties during sorting
    pub index: usize,
    /// File name, used when reporting problems
    pub name: String,
    /// Where the image was read from
    pub path: PathBuf,
    /// Natural width in pixels
    pub width: u32,
    /// Natural height in pixels
    pub height: u32,
}

impl SourceImage {
    pub fn new(
        index: usize,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let name = name.into();
        if width == 0 || height == 0 {
            return Err(PackError::DegenerateImage {
                name,
                width,
                height,
            });
        }
        Ok(Self {
            index,
            name,
            path: path.into(),
            width,
            height,
        })
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// A source image scaled for placement, not yet positioned
#[derive(Debug, Clone, PartialEq)]
pub struct SizedImage {
    pub source: SourceImage,
    pub width: f32,
    pub height: f32,
}

/// Final placement of an image on an output page
///
/// `x` and `y` locate the top-left corner, measured from the top-left
/// corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub source: SourceImage,
    pub page_index: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PlacedItem {
    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate (measured from the top)
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether the two items share interior area on the same page
    pub fn overlaps(&self, other: &PlacedItem) -> bool {
        self.page_index == other.page_index
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// A horizontal band of images on the current page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shelf {
    /// Vertical start of the band
    pub top_y: f32,
    /// Height of the first (tallest) item, 0 while empty
    pub height: f32,
    /// Next free x offset
    pub cursor_x: f32,
}

impl Shelf {
    pub fn new(top_y: f32, left: f32) -> Self {
        Self {
            top_y,
            height: 0.0,
            cursor_x: left,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0.0
    }
}

/// Output of one packing pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PackingResult {
    /// Placements in packing order
    pub items: Vec<PlacedItem>,
    /// Number of pages used; 0 when nothing was packed
    pub page_count: usize,
}

impl PackingResult {
    /// Items placed on the given page, in packing order
    pub fn items_on_page(&self, page_index: usize) -> impl Iterator<Item = &PlacedItem> {
        self.items
            .iter()
            .filter(move |item| item.page_index == page_index)
    }
}
