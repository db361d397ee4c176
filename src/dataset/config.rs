//! Dataset manifest parsing
//!
//! A dataset is described by a small TOML manifest:
//!
//! ```toml
//! [dataset]
//! img_dir = "data/images"
//! ann_dir = "data/annotations"
//! id_file = "data/train_ids.txt"
//! split = "train"
//! ```
//!
//! The CLI accepts either this manifest or the equivalent individual flags.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{DatasetError, DatasetResult};

/// Paths and split tag describing one dataset
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Directory holding `{id}.jpg` images
    pub img_dir: PathBuf,
    /// Directory holding `{id}.npy` annotations
    pub ann_dir: PathBuf,
    /// File listing one sample identifier per line
    pub id_file: PathBuf,
    /// Split tag; a value containing "train" enables augmentation
    pub split: String,
}

impl DatasetConfig {
    /// Create a config from explicit paths
    pub fn new(img_dir: PathBuf, ann_dir: PathBuf, id_file: PathBuf, split: String) -> Self {
        DatasetConfig {
            img_dir,
            ann_dir,
            id_file,
            split,
        }
    }

    /// Load a config from a TOML manifest file
    ///
    /// # Arguments
    /// * `path` - Path to the manifest
    ///
    /// # Returns
    /// The parsed config or an error
    pub fn from_file(path: &Path) -> DatasetResult<Self> {
        if !path.exists() {
            return Err(DatasetError::MissingFile(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a config from manifest text
    pub fn from_toml_str(content: &str) -> DatasetResult<Self> {
        let value: toml::Value = content
            .parse()
            .map_err(|e| DatasetError::MalformedConfig(format!("{}", e)))?;

        let table = value
            .get("dataset")
            .and_then(|v| v.as_table())
            .ok_or_else(|| {
                DatasetError::MalformedConfig("missing [dataset] table".to_string())
            })?;

        let get_path = |key: &str| -> DatasetResult<PathBuf> {
            table
                .get(key)
                .and_then(|v| v.as_str())
                .map(PathBuf::from)
                .ok_or_else(|| {
                    DatasetError::MalformedConfig(format!("missing '{}' entry", key))
                })
        };

        let split = table
            .get("split")
            .and_then(|v| v.as_str())
            .unwrap_or("train")
            .to_string();

        Ok(DatasetConfig {
            img_dir: get_path("img_dir")?,
            ann_dir: get_path("ann_dir")?,
            id_file: get_path("id_file")?,
            split,
        })
    }

    /// True if this config's split enables augmentation
    pub fn is_training(&self) -> bool {
        self.split.contains("train")
    }
}
