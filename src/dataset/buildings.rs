//! The building-footprint dataset

use log::{debug, info};
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

use crate::annotation::AnnotationReader;
use crate::augment::{augment_graph, augment_image, AugmentParams};
use crate::errors::{DatasetError, DatasetResult};
use crate::region::{graph_regions, CANVAS_SIZE};
use crate::utils::logger::Logger;

use super::config::DatasetConfig;
use super::target::{DetectionTarget, ImageInfo, Sample};
use super::transforms::SampleTransform;

/// Indexable dataset of building footprints
///
/// Construction reads the identifier list once; everything else - image,
/// annotation, edge mask, region map - is loaded and computed fresh on each
/// sample access and discarded afterwards. Apart from that read-only list
/// the dataset holds no mutable state, so separate instances can serve
/// parallel workers safely.
pub struct BuildingsDataset<'a> {
    /// Directory holding `{id}.jpg` images
    img_dir: PathBuf,
    /// Directory holding `{id}.npy` annotations
    ann_dir: PathBuf,
    /// Split tag; containing "train" enables augmentation
    split: String,
    /// Sample identifiers, in file order
    building_ids: Vec<String>,
    /// Optional framework preprocessing hook
    transforms: Option<Box<dyn SampleTransform>>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> BuildingsDataset<'a> {
    /// Open a dataset
    ///
    /// Reads the identifier list eagerly (one ID per line, trimmed, blank
    /// lines skipped); a missing list file fails construction.
    ///
    /// # Arguments
    /// * `img_dir` - Directory of footprint images
    /// * `ann_dir` - Directory of graph annotations
    /// * `id_file` - File listing the sample identifiers
    /// * `split` - Split tag ("train", "val", ...)
    /// * `transforms` - Optional preprocessing hook
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// The opened dataset or an error
    pub fn new(
        img_dir: &Path,
        ann_dir: &Path,
        id_file: &Path,
        split: &str,
        transforms: Option<Box<dyn SampleTransform>>,
        logger: &'a Logger,
    ) -> DatasetResult<Self> {
        if !id_file.exists() {
            return Err(DatasetError::MissingFile(id_file.display().to_string()));
        }

        let content = fs::read_to_string(id_file)?;
        let building_ids: Vec<String> = content
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        info!(
            "Opened footprint dataset: {} samples, split '{}'",
            building_ids.len(),
            split
        );
        let _ = logger.log(&format!(
            "Dataset opened from {} ({} ids)",
            id_file.display(),
            building_ids.len()
        ));

        Ok(BuildingsDataset {
            img_dir: img_dir.to_path_buf(),
            ann_dir: ann_dir.to_path_buf(),
            split: split.to_string(),
            building_ids,
            transforms,
            logger,
        })
    }

    /// Open a dataset from a manifest
    pub fn from_config(
        config: &DatasetConfig,
        transforms: Option<Box<dyn SampleTransform>>,
        logger: &'a Logger,
    ) -> DatasetResult<Self> {
        Self::new(
            &config.img_dir,
            &config.ann_dir,
            &config.id_file,
            &config.split,
            transforms,
            logger,
        )
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.building_ids.len()
    }

    /// True if the identifier list is empty
    pub fn is_empty(&self) -> bool {
        self.building_ids.is_empty()
    }

    /// The sample identifiers, in order
    pub fn ids(&self) -> &[String] {
        &self.building_ids
    }

    /// The split tag this dataset was opened with
    pub fn split(&self) -> &str {
        &self.split
    }

    /// Image metadata for batch bucketing
    ///
    /// Always 256x256, independent of the file on disk.
    pub fn img_info(&self, _idx: usize) -> ImageInfo {
        ImageInfo::fixed()
    }

    /// Load and assemble one sample
    ///
    /// Loads the image and annotation fresh, augments them when the split
    /// asks for it (drawing rotation and flip from the supplied random
    /// source), runs the region pipeline and applies the optional transform
    /// hook. Failures propagate immediately; there is no skip-and-continue.
    ///
    /// # Arguments
    /// * `idx` - Sample index in the identifier list
    /// * `rng` - Random source for the augmentation draw
    ///
    /// # Returns
    /// The assembled sample or an error
    pub fn sample<R: Rng>(&self, idx: usize, rng: &mut R) -> DatasetResult<Sample> {
        let id = self
            .building_ids
            .get(idx)
            .ok_or(DatasetError::IndexOutOfRange(idx))?;

        let img_path = self.img_dir.join(format!("{}.jpg", id));
        if !img_path.exists() {
            return Err(DatasetError::MissingFile(img_path.display().to_string()));
        }
        let image = image::open(&img_path)?;

        let ann_path = self.ann_dir.join(format!("{}.npy", id));
        let graph = AnnotationReader::new(self.logger).load(&ann_path)?;

        let (image, graph) = if self.split.contains("train") {
            let params = AugmentParams::sample(rng);
            debug!(
                "Sample {}: rotation {} flip {}",
                id, params.rotation, params.flip
            );
            (augment_image(&image, &params), augment_graph(&graph, &params))
        } else {
            (image, graph)
        };

        let regions = graph_regions(&graph);
        debug!("Sample {}: {} regions", id, regions.len());

        let target = DetectionTarget::from_regions(regions, (CANVAS_SIZE, CANVAS_SIZE));

        let (image, target) = match &self.transforms {
            Some(hook) => hook.apply(image, target)?,
            None => (image, target),
        };

        Ok(Sample {
            image,
            target,
            index: idx,
        })
    }
}
