//! Tests for rotation and flip transforms

extern crate std;

use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::annotation::{PlanarGraph, Vertex};
use crate::augment::{augment_graph, augment_image, rotate_and_flip, rotate_point, AugmentParams};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_identity_leaves_coordinates_unchanged() {
    let params = AugmentParams::identity();
    let v = rotate_and_flip(Vertex::new(10.0, 20.0), &params);

    std::assert_eq!(v, Vertex::new(10.0, 20.0));
}

#[test]
fn test_quarter_turn_around_center() {
    let (x, y) = rotate_point(10.0, 20.0, 90.0);

    // (10, 20) is (-117.5, -107.5) from the center; a 90-degree turn maps
    // it to (-107.5, 117.5), i.e. the pixel (20, 245)
    std::assert!(close(x, 20.0));
    std::assert!(close(y, 245.0));
}

#[test]
fn test_center_is_a_fixed_point() {
    for angle in AugmentParams::ROTATIONS {
        let (x, y) = rotate_point(127.5, 127.5, angle);
        std::assert!(close(x, 127.5));
        std::assert!(close(y, 127.5));
    }
}

#[test]
fn test_flip_folds_around_axis() {
    let params = AugmentParams {
        rotation: 0.0,
        flip: true,
    };

    let v = rotate_and_flip(Vertex::new(200.0, 50.0), &params);
    std::assert!(close(v.x, 56.0));
    std::assert!(close(v.y, 50.0));

    let v = rotate_and_flip(Vertex::new(56.0, 50.0), &params);
    std::assert!(close(v.x, 200.0));

    // The fold axis itself does not move
    let v = rotate_and_flip(Vertex::new(128.0, 50.0), &params);
    std::assert!(close(v.x, 128.0));
}

#[test]
fn test_fixed_params_are_deterministic() {
    let params = AugmentParams {
        rotation: 270.0,
        flip: true,
    };
    let v = Vertex::new(33.0, 77.0);

    let first = rotate_and_flip(v, &params);
    let second = rotate_and_flip(v, &params);

    std::assert_eq!(first, second);
}

#[test]
fn test_seeded_sampling_is_reproducible() {
    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);

    for _ in 0..16 {
        std::assert_eq!(
            AugmentParams::sample(&mut rng_a),
            AugmentParams::sample(&mut rng_b)
        );
    }
}

#[test]
fn test_graph_transform_preserves_edge_count() {
    let mut graph = PlanarGraph::new();
    graph.add_edge(Vertex::new(10.0, 10.0), Vertex::new(40.0, 10.0));
    graph.add_edge(Vertex::new(40.0, 10.0), Vertex::new(40.0, 40.0));
    graph.add_edge(Vertex::new(40.0, 40.0), Vertex::new(10.0, 10.0));

    let params = AugmentParams {
        rotation: 180.0,
        flip: false,
    };
    let augmented = augment_graph(&graph, &params);

    std::assert_eq!(augmented.edge_count(), graph.edge_count());
    std::assert_eq!(augmented.vertex_count(), graph.vertex_count());
}

#[test]
fn test_image_identity_augmentation() {
    let mut raw = RgbaImage::new(4, 4);
    raw.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    let image = DynamicImage::ImageRgba8(raw);

    let out = augment_image(&image, &AugmentParams::identity());

    std::assert_eq!(out.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
}

#[test]
fn test_image_quarter_turn_is_counter_clockwise() {
    let mut raw = RgbaImage::new(4, 4);
    raw.put_pixel(3, 0, Rgba([255, 0, 0, 255]));
    let image = DynamicImage::ImageRgba8(raw);

    let params = AugmentParams {
        rotation: 90.0,
        flip: false,
    };
    let out = augment_image(&image, &params);

    // A counter-clockwise turn carries the top-right corner to the top-left
    std::assert_eq!(out.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
}

#[test]
fn test_image_flip_mirrors_left_right() {
    let mut raw = RgbaImage::new(4, 4);
    raw.put_pixel(0, 2, Rgba([0, 255, 0, 255]));
    let image = DynamicImage::ImageRgba8(raw);

    let params = AugmentParams {
        rotation: 0.0,
        flip: true,
    };
    let out = augment_image(&image, &params);

    std::assert_eq!(out.get_pixel(3, 2), Rgba([0, 255, 0, 255]));
}
