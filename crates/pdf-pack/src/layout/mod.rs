//! Layout calculation modules for packing
//!
//! This module handles all the geometric calculations:
//! - Sizing source images to the usable page width
//! - Shelf packing sized images onto pages

mod shelf;
mod sizer;
mod types;

pub use shelf::*;
pub use sizer::*;
pub use types::*;
