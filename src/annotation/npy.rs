//! NPY annotation file reading
//!
//! Each footprint annotation lives at `{ann_dir}/{id}.npy` and holds a
//! little-endian float array of shape (N, 4): one directed edge per row as
//! (x1, y1, x2, y2). This module parses the NPY container (magic, version,
//! python-dict header) and converts the rows into a `PlanarGraph`.

use byteorder::{LittleEndian, ReadBytesExt};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::errors::{DatasetError, DatasetResult};
use crate::utils::logger::Logger;

use super::graph::PlanarGraph;

/// Magic string opening every NPY file
pub const NPY_MAGIC: &[u8; 6] = b"\x93NUMPY";

lazy_static! {
    static ref DESCR_RE: Regex = Regex::new(r"'descr'\s*:\s*'([^']+)'").unwrap();
    static ref FORTRAN_RE: Regex = Regex::new(r"'fortran_order'\s*:\s*(True|False)").unwrap();
    static ref SHAPE_RE: Regex = Regex::new(r"'shape'\s*:\s*\(([^)]*)\)").unwrap();
}

/// Reader for NPY edge-array annotations
pub struct AnnotationReader<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnnotationReader<'a> {
    /// Create a new annotation reader
    ///
    /// # Arguments
    /// * `logger` - Logger for recording operations
    pub fn new(logger: &'a Logger) -> Self {
        AnnotationReader { logger }
    }

    /// Load a footprint graph from an annotation file
    ///
    /// # Arguments
    /// * `path` - Path to the `.npy` annotation file
    ///
    /// # Returns
    /// The parsed planar graph, or an error describing the fault
    pub fn load(&self, path: &Path) -> DatasetResult<PlanarGraph> {
        if !path.exists() {
            return Err(DatasetError::MissingFile(path.display().to_string()));
        }

        let _ = self.logger.log(&format!("Reading annotation: {}", path.display()));
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read(&mut reader)
    }

    /// Parse a footprint graph from an NPY byte stream
    ///
    /// # Arguments
    /// * `reader` - Source positioned at the start of the NPY container
    ///
    /// # Returns
    /// The parsed planar graph, or an error describing the fault
    pub fn read(&self, reader: &mut impl Read) -> DatasetResult<PlanarGraph> {
        let mut magic = [0u8; 6];
        reader.read_exact(&mut magic)?;
        if &magic != NPY_MAGIC {
            return Err(DatasetError::InvalidNpyMagic);
        }

        let major = reader.read_u8()?;
        let minor = reader.read_u8()?;
        // Version 1 carries a u16 header length, version 2 widens it to u32
        let header_len = match major {
            1 => reader.read_u16::<LittleEndian>()? as usize,
            2 => reader.read_u32::<LittleEndian>()? as usize,
            _ => return Err(DatasetError::UnsupportedNpyVersion(major, minor)),
        };

        let mut header_bytes = vec![0u8; header_len];
        reader.read_exact(&mut header_bytes)?;
        let header = String::from_utf8_lossy(&header_bytes);
        debug!("NPY header: {}", header.trim_end());

        let descr = DESCR_RE
            .captures(&header)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| DatasetError::MalformedHeader("missing 'descr' field".to_string()))?;

        let fortran = FORTRAN_RE
            .captures(&header)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str() == "True")
            .ok_or_else(|| {
                DatasetError::MalformedHeader("missing 'fortran_order' field".to_string())
            })?;
        if fortran {
            return Err(DatasetError::MalformedHeader(
                "fortran-ordered arrays are not supported".to_string(),
            ));
        }

        let shape = Self::parse_shape(&header)?;
        if shape.len() != 2 || shape[1] != 4 {
            return Err(DatasetError::MalformedGraph(format!(
                "edge array must have shape (N, 4), got {:?}",
                shape
            )));
        }
        let rows = shape[0];

        let mut edges = Vec::with_capacity(rows);
        for _ in 0..rows {
            let mut row = [0.0f64; 4];
            for value in row.iter_mut() {
                *value = match descr.as_str() {
                    "<f8" => reader.read_f64::<LittleEndian>()?,
                    "<f4" => reader.read_f32::<LittleEndian>()? as f64,
                    other => return Err(DatasetError::UnsupportedDtype(other.to_string())),
                };
            }
            edges.push(row);
        }

        let graph = PlanarGraph::from_edges(&edges);
        debug!(
            "Parsed graph: {} vertices, {} directed edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Parse the 'shape' tuple out of the header dict
    fn parse_shape(header: &str) -> DatasetResult<Vec<usize>> {
        let inner = SHAPE_RE
            .captures(header)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| DatasetError::MalformedHeader("missing 'shape' field".to_string()))?;

        let mut dims = Vec::new();
        for part in inner.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let dim = part.parse::<usize>().map_err(|_| {
                DatasetError::MalformedHeader(format!("invalid shape dimension: {}", part))
            })?;
            dims.push(dim);
        }
        Ok(dims)
    }
}
