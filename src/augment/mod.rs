//! Training-time augmentation
//!
//! Footprint samples are augmented by quarter-turn rotation and an optional
//! horizontal flip, applied to the image and to every graph vertex. The
//! random choices come from a caller-supplied random source, never from a
//! hidden process global, so seeded runs reproduce exactly.

mod tests;
mod transform;

// Public exports
pub use transform::{
    augment_graph, augment_image, rotate_and_flip, rotate_point, AugmentParams,
};
