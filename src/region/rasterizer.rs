//! Graph rasterization onto the annotation canvas
//!
//! Every directed pair listed in the footprint graph is drawn as a
//! 1-pixel-wide line segment. Symmetric edges stored in both directions are
//! simply drawn twice; the result is identical either way.

use image::{GrayImage, Luma};

use crate::annotation::PlanarGraph;

use super::{CANVAS_SIZE, EDGE_VALUE};

/// Rasterize a footprint graph into an edge mask
///
/// Produces a 256x256 single-channel grid: background pixels are 0, wall
/// pixels carry the foreground value. Coordinates are rounded to the
/// nearest pixel before drawing. The rasterizer is a pure function of the
/// graph; calling it twice yields identical grids.
///
/// # Arguments
/// * `graph` - The footprint graph to draw
///
/// # Returns
/// The rasterized edge mask
pub fn rasterize_edges(graph: &PlanarGraph) -> GrayImage {
    let mut canvas = GrayImage::new(CANVAS_SIZE, CANVAS_SIZE);

    for node in graph.nodes() {
        for neighbor in &node.neighbors {
            draw_line(
                &mut canvas,
                node.vertex.x.round() as i64,
                node.vertex.y.round() as i64,
                neighbor.x.round() as i64,
                neighbor.y.round() as i64,
            );
        }
    }

    canvas
}

/// Draw a 1-pixel Bresenham line between two grid points
///
/// Coordinates outside the canvas are legal: the walk covers the whole
/// segment and only the pixels that land inside the canvas are plotted.
/// Clamping instead would bend the segment, so partial edges are clipped,
/// never reshaped.
fn draw_line(canvas: &mut GrayImage, x0: i64, y0: i64, x1: i64, y1: i64) {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    let mut x = x0;
    let mut y = y0;

    loop {
        plot(canvas, x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

/// Set a single pixel to the foreground value if it lies on the canvas
fn plot(canvas: &mut GrayImage, x: i64, y: i64) {
    let (width, height) = canvas.dimensions();
    if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
        canvas.put_pixel(x as u32, y as u32, Luma([EDGE_VALUE]));
    }
}
