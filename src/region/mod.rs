//! Region extraction from footprint graphs
//!
//! This module holds the core pipeline: rasterize the wall segments of a
//! planar graph onto a fixed 256x256 canvas, flood-fill every enclosed
//! background component with a unique tag, and turn each surviving tag into
//! a binary mask, a tight bounding box and a class label.

mod bbox;
mod extractor;
mod fill;
mod mask;
mod rasterizer;
mod tests;

use image::GrayImage;
use log::debug;

use crate::annotation::PlanarGraph;

// Public exports
pub use bbox::PixelBounds;
pub use extractor::{extract_regions, ExtractedRegions};
pub use fill::fill_regions;
pub use mask::RegionMask;
pub use rasterizer::rasterize_edges;

/// Side length of the annotation canvas in pixels
pub const CANVAS_SIZE: u32 = 256;

/// Grid value of an untouched background pixel
pub const BACKGROUND_VALUE: u8 = 0;

/// Grid value of a rasterized wall pixel (also the tag-counter ceiling)
pub const EDGE_VALUE: u8 = 255;

/// First tag handed out by the region filler; 0 and 1 stay reserved
pub const FIRST_REGION_TAG: u8 = 2;

/// Class label attached to every extracted region
pub const REGION_LABEL: u32 = 1;

/// Run the full pipeline for one footprint graph
///
/// Rasterizes the graph, fills the background components and extracts the
/// surviving regions. The intermediate grid is transient; nothing is cached
/// between calls.
///
/// # Arguments
/// * `graph` - The footprint graph to process
///
/// # Returns
/// Masks, boxes and labels for every extracted region
pub fn graph_regions(graph: &PlanarGraph) -> ExtractedRegions {
    let mut grid: GrayImage = rasterize_edges(graph);
    let components = fill_regions(&mut grid);
    debug!("Flood fill tagged {} components", components);
    extract_regions(&grid)
}
