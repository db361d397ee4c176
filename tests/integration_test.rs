//! Integration tests for the footprint dataset

extern crate std;

use std::fs;
use std::path::PathBuf;

use image::{DynamicImage, GenericImageView, RgbImage};
use rand::rngs::StdRng;
use rand::SeedableRng;

use footprintkit::dataset::{BuildingsDataset, DatasetConfig};
use footprintkit::errors::DatasetError;
use footprintkit::utils::logger::Logger;
use footprintkit::FootprintKit;

/// Build an NPY v1 byte buffer holding f64 edge rows, the same container
/// layout the annotation pipeline writes
fn npy_edge_file(rows: &[[f64; 4]]) -> Vec<u8> {
    let mut buffer = Vec::new();

    // NPY format magic string and version
    buffer.extend_from_slice(b"\x93NUMPY");
    buffer.extend_from_slice(&[0x01, 0x00]);

    // Create header string
    let header_str = format!(
        "{{'descr': '<f8', 'fortran_order': False, 'shape': ({}, 4), }}",
        rows.len()
    );

    // Calculate padding to make header + length marker divisible by 64
    let header_len = header_str.len() + 1;
    let padding_len = (64 - ((header_len + 10) % 64)) % 64;
    let padded_header = format!("{}{}\n", header_str, " ".repeat(padding_len));

    buffer.extend_from_slice(&(padded_header.len() as u16).to_le_bytes());
    buffer.extend_from_slice(padded_header.as_bytes());

    for row in rows {
        for value in row {
            buffer.extend_from_slice(&value.to_le_bytes());
        }
    }
    buffer
}

/// Directed edge rows for a closed axis-aligned square
fn square_rows(x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<[f64; 4]> {
    vec![
        [x1, y1, x2, y1],
        [x2, y1, x2, y2],
        [x2, y2, x1, y2],
        [x1, y2, x1, y1],
    ]
}

/// Write a complete single-sample dataset fixture under a fresh temp dir
fn write_fixture(name: &str, id: &str, rows: &[[f64; 4]]) -> (PathBuf, DatasetConfig) {
    let root = std::env::temp_dir().join(format!("footprintkit_{}", name));
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(root.join("img")).unwrap();
    fs::create_dir_all(root.join("ann")).unwrap();

    fs::write(root.join("ids.txt"), format!("{}\n", id)).unwrap();
    fs::write(root.join("ann").join(format!("{}.npy", id)), npy_edge_file(rows)).unwrap();

    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(256, 256, image::Rgb([200, 180, 160])));
    image
        .save(root.join("img").join(format!("{}.jpg", id)))
        .unwrap();

    let config = DatasetConfig::new(
        root.join("img"),
        root.join("ann"),
        root.join("ids.txt"),
        "val".to_string(),
    );
    (root, config)
}

fn test_logger(name: &str) -> Logger {
    let path = std::env::temp_dir().join(format!("footprintkit_{}.log", name));
    Logger::new(&path.to_string_lossy()).unwrap()
}

#[test]
fn test_complete_dataset_workflow() {
    let (_root, config) = write_fixture(
        "workflow",
        "square_001",
        &square_rows(50.0, 60.0, 100.0, 90.0),
    );

    let logger = test_logger("workflow");
    let dataset = BuildingsDataset::from_config(&config, None, &logger).unwrap();

    std::assert_eq!(dataset.len(), 1);
    std::assert_eq!(dataset.ids()[0], "square_001");

    let info = dataset.img_info(0);
    std::assert_eq!((info.width, info.height), (256, 256));

    let mut rng = StdRng::seed_from_u64(0);
    let sample = dataset.sample(0, &mut rng).unwrap();

    std::assert_eq!(sample.index, 0);
    std::assert_eq!(sample.image.width(), 256);
    std::assert_eq!(sample.target.len(), 1);
    std::assert_eq!(sample.target.boxes_xyxy(), vec![[51, 61, 99, 89]]);
    std::assert_eq!(sample.target.labels, vec![1]);

    let mask = &sample.target.masks[0];
    std::assert_eq!(mask.get(75, 75), Some(1));
    std::assert_eq!(mask.get(50, 60), Some(0));
    std::assert_eq!(mask.get(0, 0), Some(0));
}

#[test]
fn test_train_split_augmentation_is_seed_reproducible() {
    let (root, _) = write_fixture(
        "train_seed",
        "square_002",
        &square_rows(40.0, 40.0, 120.0, 80.0),
    );
    let config = DatasetConfig::new(
        root.join("img"),
        root.join("ann"),
        root.join("ids.txt"),
        "train".to_string(),
    );

    let logger = test_logger("train_seed");
    let dataset = BuildingsDataset::from_config(&config, None, &logger).unwrap();

    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    let first = dataset.sample(0, &mut rng_a).unwrap();
    let second = dataset.sample(0, &mut rng_b).unwrap();

    std::assert_eq!(first.target.boxes_xyxy(), second.target.boxes_xyxy());
    std::assert_eq!(first.target.len(), 1);
    // The augmented square still encloses the same number of pixels
    std::assert_eq!(
        first.target.masks[0].area(),
        second.target.masks[0].area()
    );
}

#[test]
fn test_empty_graph_sample_has_no_regions() {
    let (_root, config) = write_fixture("empty", "blank_001", &[]);

    let logger = test_logger("empty");
    let dataset = BuildingsDataset::from_config(&config, None, &logger).unwrap();

    let mut rng = StdRng::seed_from_u64(0);
    let sample = dataset.sample(0, &mut rng).unwrap();

    std::assert!(sample.target.is_empty());
}

#[test]
fn test_missing_annotation_fails_fast() {
    let (root, config) = write_fixture(
        "missing_ann",
        "square_003",
        &square_rows(10.0, 10.0, 60.0, 60.0),
    );
    fs::remove_file(root.join("ann").join("square_003.npy")).unwrap();

    let logger = test_logger("missing_ann");
    let dataset = BuildingsDataset::from_config(&config, None, &logger).unwrap();

    let mut rng = StdRng::seed_from_u64(0);
    let result = dataset.sample(0, &mut rng);

    std::assert!(matches!(result, Err(DatasetError::MissingFile(_))));
}

#[test]
fn test_out_of_range_index_fails() {
    let (_root, config) = write_fixture(
        "bad_index",
        "square_004",
        &square_rows(10.0, 10.0, 60.0, 60.0),
    );

    let logger = test_logger("bad_index");
    let dataset = BuildingsDataset::from_config(&config, None, &logger).unwrap();

    let mut rng = StdRng::seed_from_u64(0);
    let result = dataset.sample(5, &mut rng);

    std::assert!(matches!(result, Err(DatasetError::IndexOutOfRange(5))));
}

#[test]
fn test_facade_describe_and_export() {
    let (root, config) = write_fixture(
        "facade",
        "square_005",
        &square_rows(30.0, 30.0, 90.0, 70.0),
    );

    let log_path = std::env::temp_dir().join("footprintkit_facade_api.log");
    let kit = FootprintKit::new(Some(&log_path.to_string_lossy())).unwrap();

    let summary = kit.describe(&config).unwrap();
    std::assert!(summary.contains("Samples: 1"));
    std::assert!(summary.contains("Split: val"));

    let out_dir = root.join("export");
    let written = kit
        .export_regions(&config, 0, Some(7), &out_dir)
        .unwrap();

    std::assert_eq!(written, 1);
    std::assert!(out_dir.join("square_005_region_00.png").exists());
}
