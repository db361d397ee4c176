use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;

use crate::dataset::{BuildingsDataset, DatasetConfig};
use crate::errors::DatasetResult;
use crate::utils::logger::Logger;

/// Main interface to the FootprintKit library
pub struct FootprintKit {
    logger: Logger,
}

impl FootprintKit {
    /// Create a new FootprintKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "footprintkit.log"
    ///
    /// # Returns
    /// A FootprintKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> DatasetResult<Self> {
        let log_path = log_file.unwrap_or("footprintkit.log");
        let logger = Logger::new(log_path)?;
        Ok(FootprintKit { logger })
    }

    /// Open a dataset described by a manifest
    ///
    /// # Arguments
    /// * `config` - Dataset description (directories, id file, split)
    ///
    /// # Returns
    /// The opened dataset, borrowing this instance's logger
    pub fn dataset(&self, config: &DatasetConfig) -> DatasetResult<BuildingsDataset<'_>> {
        BuildingsDataset::from_config(config, None, &self.logger)
    }

    /// Summarize a dataset as human-readable text
    ///
    /// # Arguments
    /// * `config` - Dataset description
    ///
    /// # Returns
    /// String containing the summary or an error
    pub fn describe(&self, config: &DatasetConfig) -> DatasetResult<String> {
        let dataset = self.dataset(config)?;
        let info = dataset.img_info(0);

        let mut result = "Footprint Dataset Summary:\n".to_string();
        result.push_str(&format!("  Samples: {}\n", dataset.len()));
        result.push_str(&format!("  Split: {}\n", dataset.split()));
        result.push_str(&format!("  Augmentation: {}\n", config.is_training()));
        result.push_str(&format!("  Sample size: {}x{}\n", info.width, info.height));
        result.push_str(&format!("  Image dir: {}\n", config.img_dir.display()));
        result.push_str(&format!("  Annotation dir: {}\n", config.ann_dir.display()));
        Ok(result)
    }

    /// Extract one sample's regions to disk
    ///
    /// Writes one PNG per region mask plus a CSV of boxes into the output
    /// directory, the same artifacts the CLI export command produces.
    ///
    /// # Arguments
    /// * `config` - Dataset description
    /// * `idx` - Sample index to export
    /// * `seed` - Optional seed for the augmentation draw
    /// * `output_dir` - Directory for the artifacts
    ///
    /// # Returns
    /// The number of regions written, or an error
    pub fn export_regions(
        &self,
        config: &DatasetConfig,
        idx: usize,
        seed: Option<u64>,
        output_dir: &Path,
    ) -> DatasetResult<usize> {
        fs::create_dir_all(output_dir)?;

        let dataset = self.dataset(config)?;
        let mut rng: StdRng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let sample = dataset.sample(idx, &mut rng)?;
        let id = &dataset.ids()[idx];

        for (i, mask) in sample.target.masks.iter().enumerate() {
            let path = output_dir.join(format!("{}_region_{:02}.png", id, i));
            mask.to_image().save(&path)?;
        }
        info!(
            "Exported {} regions for sample {} to {}",
            sample.target.len(),
            id,
            output_dir.display()
        );
        Ok(sample.target.len())
    }
}
