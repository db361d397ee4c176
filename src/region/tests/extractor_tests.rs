//! Tests for the region extractor

extern crate std;

use image::{GrayImage, Luma};

use crate::annotation::{PlanarGraph, Vertex};
use crate::region::{extract_regions, fill_regions, graph_regions, rasterize_edges, EDGE_VALUE};

fn square_graph(x1: f64, y1: f64, x2: f64, y2: f64) -> PlanarGraph {
    let mut graph = PlanarGraph::new();
    graph.add_edge(Vertex::new(x1, y1), Vertex::new(x2, y1));
    graph.add_edge(Vertex::new(x2, y1), Vertex::new(x2, y2));
    graph.add_edge(Vertex::new(x2, y2), Vertex::new(x1, y2));
    graph.add_edge(Vertex::new(x1, y2), Vertex::new(x1, y1));
    graph
}

#[test]
fn test_empty_graph_extracts_nothing() {
    // The whole canvas becomes one component with the first tag, which the
    // range filter drops, so nothing is extracted.
    let regions = graph_regions(&PlanarGraph::new());

    std::assert!(regions.is_empty());
    std::assert_eq!(regions.boxes.len(), 0);
    std::assert_eq!(regions.labels.len(), 0);
}

#[test]
fn test_square_extracts_one_tight_region() {
    let regions = graph_regions(&square_graph(50.0, 60.0, 100.0, 90.0));

    std::assert_eq!(regions.len(), 1);
    std::assert_eq!(regions.boxes[0].to_xyxy(), [51, 61, 99, 89]);
    std::assert_eq!(regions.labels[0], 1);

    let mask = &regions.masks[0];
    std::assert_eq!(mask.area(), 49 * 29);
    std::assert_eq!(mask.get(51, 61), Some(1));
    std::assert_eq!(mask.get(99, 89), Some(1));
    // Wall and exterior pixels stay out of the mask
    std::assert_eq!(mask.get(50, 60), Some(0));
    std::assert_eq!(mask.get(0, 0), Some(0));
}

#[test]
fn test_two_squares_extract_in_scan_order() {
    let mut graph = square_graph(10.0, 10.0, 40.0, 40.0);
    for node in square_graph(100.0, 10.0, 130.0, 40.0).nodes() {
        for neighbor in &node.neighbors {
            graph.add_edge(node.vertex, *neighbor);
        }
    }

    let regions = graph_regions(&graph);

    std::assert_eq!(regions.len(), 2);
    // Ascending tag order mirrors raster-scan discovery order
    std::assert_eq!(regions.boxes[0].to_xyxy(), [11, 11, 39, 39]);
    std::assert_eq!(regions.boxes[1].to_xyxy(), [101, 11, 129, 39]);
    std::assert_eq!(regions.labels, vec![1, 1]);
}

#[test]
fn test_parallel_sequences_have_equal_length() {
    let regions = graph_regions(&square_graph(30.0, 30.0, 220.0, 220.0));

    std::assert_eq!(regions.masks.len(), regions.boxes.len());
    std::assert_eq!(regions.boxes.len(), regions.labels.len());
}

#[test]
fn test_edge_value_is_never_a_region() {
    let mut grid = GrayImage::new(4, 4);
    for y in 0..4 {
        for x in 0..4 {
            grid.put_pixel(x, y, Luma([EDGE_VALUE]));
        }
    }
    // A lone surviving tag amid edge pixels
    grid.put_pixel(2, 2, Luma([7]));

    let regions = extract_regions(&grid);

    std::assert_eq!(regions.len(), 1);
    std::assert_eq!(regions.boxes[0].to_xyxy(), [2, 2, 2, 2]);
}

#[test]
fn test_first_tag_component_is_excluded() {
    let mut grid = rasterize_edges(&square_graph(50.0, 60.0, 100.0, 90.0));
    fill_regions(&mut grid);

    let regions = extract_regions(&grid);

    // Two components exist, but tag 2 (the exterior) is filtered out
    std::assert_eq!(regions.len(), 1);
}

#[test]
fn test_saturated_components_are_excluded() {
    // Isolated single-pixel cells at every odd/odd coordinate: 16384
    // components for 253 usable tags. Tags 3..=254 survive extraction; the
    // first cell (tag 2) and everything at the 255 ceiling are dropped.
    let mut grid = GrayImage::new(256, 256);
    for y in 0..256u32 {
        for x in 0..256u32 {
            if x % 2 == 0 || y % 2 == 0 {
                grid.put_pixel(x, y, Luma([EDGE_VALUE]));
            }
        }
    }
    fill_regions(&mut grid);

    let regions = extract_regions(&grid);

    std::assert_eq!(regions.len(), 252);
    for mask in &regions.masks {
        std::assert_eq!(mask.area(), 1);
    }
}
