//! Dataset inspection command
//!
//! This module implements the command for summarizing a footprint dataset
//! and, optionally, one of its samples: identifier count, graph size,
//! extracted regions and their boxes.

use clap::ArgMatches;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::annotation::AnnotationReader;
use crate::commands::command_traits::Command;
use crate::commands::{config_from_args, parse_optional_u64};
use crate::dataset::{BuildingsDataset, DatasetConfig};
use crate::errors::{DatasetError, DatasetResult};
use crate::utils::logger::Logger;

/// Command for inspecting a footprint dataset
pub struct InspectCommand<'a> {
    /// Dataset description
    config: DatasetConfig,
    /// Optional sample index to report in detail
    index: Option<usize>,
    /// Optional seed for the augmentation draw
    seed: Option<u64>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InspectCommand<'a> {
    /// Create a new inspect command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new InspectCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> DatasetResult<Self> {
        let config = config_from_args(args)?;

        let index = match args.get_one::<String>("index") {
            Some(raw) => Some(raw.parse::<usize>().map_err(|_| {
                DatasetError::GenericError(format!("Invalid --index value: {}", raw))
            })?),
            None => None,
        };

        let seed = parse_optional_u64(args, "seed")?;

        Ok(InspectCommand {
            config,
            index,
            seed,
            logger,
        })
    }

    /// Report one sample in detail
    fn inspect_sample(&self, dataset: &BuildingsDataset, idx: usize) -> DatasetResult<()> {
        let id = dataset
            .ids()
            .get(idx)
            .ok_or(DatasetError::IndexOutOfRange(idx))?
            .clone();

        // Raw annotation stats, before any augmentation
        let ann_path = self.config.ann_dir.join(format!("{}.npy", id));
        let graph = AnnotationReader::new(self.logger).load(&ann_path)?;
        info!("Sample #{} ({})", idx, id);
        info!(
            "  Graph: {} vertices, {} directed edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let mut rng: StdRng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sample = dataset.sample(idx, &mut rng)?;

        info!("  Regions: {}", sample.target.len());
        for (i, bounds) in sample.target.boxes.iter().enumerate() {
            info!(
                "    #{}: box ({}, {}, {}, {}), {}x{} px, area {}",
                i,
                bounds.min_x,
                bounds.min_y,
                bounds.max_x,
                bounds.max_y,
                bounds.width(),
                bounds.height(),
                sample.target.masks[i].area()
            );
        }
        Ok(())
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> DatasetResult<()> {
        self.logger.banner("inspect")?;

        let dataset = BuildingsDataset::from_config(&self.config, None, self.logger)?;

        let info = dataset.img_info(0);
        info!("Dataset: {} samples", dataset.len());
        info!("  Split: {}", dataset.split());
        info!("  Image dir: {}", self.config.img_dir.display());
        info!("  Annotation dir: {}", self.config.ann_dir.display());
        info!("  Sample size: {}x{}", info.width, info.height);

        if let Some(idx) = self.index {
            self.inspect_sample(&dataset, idx)?;
        }

        Ok(())
    }
}
