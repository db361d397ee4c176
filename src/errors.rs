//! Custom error types for dataset processing

use std::fmt;
use std::io;

/// Dataset-specific error types
#[derive(Debug)]
pub enum DatasetError {
    /// I/O error
    IoError(io::Error),
    /// Image decoding or encoding error
    ImageError(image::ImageError),
    /// A required file is missing on disk
    MissingFile(String),
    /// Annotation file does not start with the NPY magic string
    InvalidNpyMagic,
    /// Unsupported NPY format version
    UnsupportedNpyVersion(u8, u8),
    /// NPY header could not be parsed
    MalformedHeader(String),
    /// Unsupported NPY element type
    UnsupportedDtype(String),
    /// Annotation payload does not describe a valid edge list
    MalformedGraph(String),
    /// Dataset manifest could not be parsed
    MalformedConfig(String),
    /// Sample index is outside the identifier list
    IndexOutOfRange(usize),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::IoError(e) => write!(f, "I/O error: {}", e),
            DatasetError::ImageError(e) => write!(f, "Image error: {}", e),
            DatasetError::MissingFile(path) => write!(f, "Missing file: {}", path),
            DatasetError::InvalidNpyMagic => write!(f, "Invalid NPY magic string"),
            DatasetError::UnsupportedNpyVersion(major, minor) => {
                write!(f, "Unsupported NPY version: {}.{}", major, minor)
            }
            DatasetError::MalformedHeader(msg) => write!(f, "Malformed NPY header: {}", msg),
            DatasetError::UnsupportedDtype(descr) => write!(f, "Unsupported NPY dtype: {}", descr),
            DatasetError::MalformedGraph(msg) => write!(f, "Malformed graph annotation: {}", msg),
            DatasetError::MalformedConfig(msg) => write!(f, "Malformed dataset config: {}", msg),
            DatasetError::IndexOutOfRange(idx) => write!(f, "Sample index out of range: {}", idx),
            DatasetError::GenericError(msg) => write!(f, "Dataset error: {}", msg),
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<io::Error> for DatasetError {
    fn from(error: io::Error) -> Self {
        DatasetError::IoError(error)
    }
}

impl From<image::ImageError> for DatasetError {
    fn from(error: image::ImageError) -> Self {
        DatasetError::ImageError(error)
    }
}

impl From<String> for DatasetError {
    fn from(msg: String) -> Self {
        DatasetError::GenericError(msg)
    }
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
