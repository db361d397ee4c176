//! Region extraction from a filled grid

use image::GrayImage;
use log::debug;
use std::collections::BTreeMap;

use super::{PixelBounds, RegionMask, EDGE_VALUE, FIRST_REGION_TAG, REGION_LABEL};

/// Masks, boxes and labels for every extracted region
///
/// The three vectors run in parallel: index i holds the mask, box and label
/// of the same region. Regions are ordered by ascending tag value, which
/// follows the filler's raster-scan assignment order.
#[derive(Debug, Clone, Default)]
pub struct ExtractedRegions {
    /// One binary mask per region
    pub masks: Vec<RegionMask>,
    /// One tight bounding box per region, (x1, y1, x2, y2) inclusive
    pub boxes: Vec<PixelBounds>,
    /// One class label per region (always the foreground class)
    pub labels: Vec<u32>,
}

impl ExtractedRegions {
    /// Number of extracted regions
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// True if no region survived extraction
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}

/// Extract mask/box/label triples from a filled grid
///
/// Only tags strictly between 2 and 255 survive: the edge value is not a
/// region, and tag 2's component - the one containing the first scanned
/// background pixel, normally the exterior of the footprint - is dropped
/// entirely. That exclusion is deliberate dataset behavior, not an
/// off-by-one.
///
/// # Arguments
/// * `grid` - A grid previously processed by `fill_regions`
///
/// # Returns
/// Parallel masks, boxes and labels in ascending tag order
pub fn extract_regions(grid: &GrayImage) -> ExtractedRegions {
    let (width, height) = grid.dimensions();
    let mut found: BTreeMap<u8, (RegionMask, PixelBounds)> = BTreeMap::new();

    for y in 0..height {
        for x in 0..width {
            let value = grid.get_pixel(x, y)[0];
            if value > FIRST_REGION_TAG && value < EDGE_VALUE {
                found
                    .entry(value)
                    .and_modify(|(mask, bounds)| {
                        mask.set(x, y);
                        bounds.expand(x, y);
                    })
                    .or_insert_with(|| {
                        (RegionMask::with_pixel(width, height, x, y), PixelBounds::at(x, y))
                    });
            }
        }
    }

    debug!("Extracted {} regions", found.len());

    let mut regions = ExtractedRegions::default();
    for (_tag, (mask, bounds)) in found {
        regions.masks.push(mask);
        regions.boxes.push(bounds);
        regions.labels.push(REGION_LABEL);
    }
    regions
}
