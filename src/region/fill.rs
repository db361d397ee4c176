//! Flood filling of enclosed background regions

use image::{GrayImage, Luma};
use log::warn;
use std::collections::VecDeque;

use super::{BACKGROUND_VALUE, EDGE_VALUE, FIRST_REGION_TAG};

/// 4-connected neighborhood offsets (right, left, down, up)
const NEIGHBORS_4: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Tag every background component of an edge mask
///
/// Scans the grid in row-major order (top-to-bottom, left-to-right). Each
/// time an untagged background pixel is found, its whole 4-connected
/// component is filled with the next tag, starting at 2 and incrementing
/// once per component. Tag assignment order therefore depends on scan
/// order and is stable across runs. Edge pixels are left untouched, and no
/// pixel remains 0 once the scan completes.
///
/// The grid stores tags as u8, so the counter saturates at the edge value:
/// components past the 254th are filled with 255 and later dropped by the
/// extractor's range filter. That data loss is inherited behavior; a
/// warning is logged when it happens.
///
/// # Arguments
/// * `grid` - Edge mask to fill, modified in place
///
/// # Returns
/// The number of components found
pub fn fill_regions(grid: &mut GrayImage) -> u32 {
    let (width, height) = grid.dimensions();
    let mut next_tag: u32 = FIRST_REGION_TAG as u32;
    let mut saturated = false;

    for y in 0..height {
        for x in 0..width {
            if grid.get_pixel(x, y)[0] != BACKGROUND_VALUE {
                continue;
            }
            let tag = if next_tag > EDGE_VALUE as u32 {
                if !saturated {
                    warn!(
                        "Region tag space exhausted after {} components; \
                         further components collapse into the edge value",
                        next_tag - FIRST_REGION_TAG as u32
                    );
                    saturated = true;
                }
                EDGE_VALUE
            } else {
                next_tag as u8
            };
            flood_fill(grid, x, y, tag);
            next_tag += 1;
        }
    }

    next_tag - FIRST_REGION_TAG as u32
}

/// Fill one 4-connected background component from a seed pixel
///
/// Breadth-first with an explicit FIFO queue; no recursion, so large flat
/// components cannot exhaust the stack. Each pixel is tagged when enqueued,
/// so it enters the queue at most once and the fill runs in O(component
/// size).
fn flood_fill(grid: &mut GrayImage, x0: u32, y0: u32, tag: u8) {
    let (width, height) = grid.dimensions();
    let mut queue: VecDeque<(i64, i64)> = VecDeque::new();

    grid.put_pixel(x0, y0, Luma([tag]));
    queue.push_back((x0 as i64, y0 as i64));

    while let Some((x, y)) = queue.pop_front() {
        for (dx, dy) in NEIGHBORS_4 {
            let (nx, ny) = (x + dx, y + dy);
            if nx < 0 || ny < 0 || nx as u32 >= width || ny as u32 >= height {
                continue;
            }
            if grid.get_pixel(nx as u32, ny as u32)[0] == BACKGROUND_VALUE {
                grid.put_pixel(nx as u32, ny as u32, Luma([tag]));
                queue.push_back((nx, ny));
            }
        }
    }
}
