//! Region export command
//!
//! This module implements the command for exporting the extracted regions
//! of one sample (or the whole dataset) to disk: one PNG per region mask
//! plus a CSV of boxes and labels per sample.

use clap::ArgMatches;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::commands::command_traits::Command;
use crate::commands::{config_from_args, parse_optional_u64};
use crate::dataset::{BuildingsDataset, DatasetConfig, Sample};
use crate::errors::{DatasetError, DatasetResult};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for exporting region masks and boxes
pub struct ExportCommand<'a> {
    /// Dataset description
    config: DatasetConfig,
    /// Optional sample index; None exports every sample
    index: Option<usize>,
    /// Directory the artifacts are written into
    output_dir: PathBuf,
    /// Optional seed for the augmentation draw
    seed: Option<u64>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExportCommand<'a> {
    /// Create a new export command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExportCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> DatasetResult<Self> {
        let config = config_from_args(args)?;

        let index = match args.get_one::<String>("index") {
            Some(raw) => Some(raw.parse::<usize>().map_err(|_| {
                DatasetError::GenericError(format!("Invalid --index value: {}", raw))
            })?),
            None => None,
        };

        let output_dir = args
            .get_one::<String>("output")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("regions"));

        let seed = parse_optional_u64(args, "seed")?;

        Ok(ExportCommand {
            config,
            index,
            output_dir,
            seed,
            logger,
        })
    }

    /// Write one sample's masks and boxes into the output directory
    fn export_sample(&self, sample: &Sample, id: &str) -> DatasetResult<()> {
        for (i, mask) in sample.target.masks.iter().enumerate() {
            let mask_path = self.output_dir.join(format!("{}_region_{:02}.png", id, i));
            mask.to_image().save(&mask_path)?;
            debug!("Wrote {}", mask_path.display());
        }

        let csv_path = self.output_dir.join(format!("{}_boxes.csv", id));
        self.write_boxes_csv(&csv_path, sample)?;
        debug!("Wrote {}", csv_path.display());
        Ok(())
    }

    /// Write the boxes CSV for one sample
    fn write_boxes_csv(&self, path: &Path, sample: &Sample) -> DatasetResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "region,x1,y1,x2,y2,label")?;
        for (i, bounds) in sample.target.boxes.iter().enumerate() {
            writeln!(
                writer,
                "{},{},{},{},{},{}",
                i,
                bounds.min_x,
                bounds.min_y,
                bounds.max_x,
                bounds.max_y,
                sample.target.labels[i]
            )?;
        }
        Ok(())
    }
}

impl<'a> Command for ExportCommand<'a> {
    fn execute(&self) -> DatasetResult<()> {
        self.logger.banner("export")?;
        fs::create_dir_all(&self.output_dir)?;

        let dataset = BuildingsDataset::from_config(&self.config, None, self.logger)?;
        let mut rng: StdRng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let indices: Vec<usize> = match self.index {
            Some(idx) => {
                if idx >= dataset.len() {
                    return Err(DatasetError::IndexOutOfRange(idx));
                }
                vec![idx]
            }
            None => (0..dataset.len()).collect(),
        };

        let progress = if indices.len() > 1 {
            Some(ProgressTracker::new(
                indices.len() as u64,
                "Exporting regions",
            ))
        } else {
            None
        };

        let mut region_total = 0usize;
        for idx in indices.iter() {
            let sample = dataset.sample(*idx, &mut rng)?;
            let id = &dataset.ids()[*idx];
            self.export_sample(&sample, id)?;
            region_total += sample.target.len();
            if let Some(bar) = &progress {
                bar.increment(1);
            }
        }
        if let Some(bar) = &progress {
            bar.finish();
        }

        info!(
            "Exported {} regions from {} samples to {}",
            region_total,
            indices.len(),
            self.output_dir.display()
        );
        Ok(())
    }
}
