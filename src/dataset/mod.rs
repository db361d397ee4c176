//! Building-footprint dataset adapter
//!
//! This module glues the annotation reader, the augmentation transforms and
//! the region pipeline into a dataset usable by a detection training loop:
//! indexable samples, each carrying an image, boxes, masks and labels.

mod buildings;
mod config;
mod target;
mod tests;
mod transforms;

// Public exports
pub use buildings::BuildingsDataset;
pub use config::DatasetConfig;
pub use target::{DetectionTarget, ImageInfo, Sample};
pub use transforms::SampleTransform;
