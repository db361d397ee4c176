//! Footprint annotation loading
//!
//! This module provides the planar-graph representation of a building
//! footprint (corner points and wall segments) and the reader for the
//! NPY edge-array files the annotations are stored in.

mod graph;
mod npy;
mod tests;

// Public exports
pub use graph::{GraphNode, PlanarGraph, Vertex};
pub use npy::AnnotationReader;
