//! Custom error types for region capture and export
//!
//! Every failure the core can produce is one variant of [`QInfraError`].
//! A user declining to pick an output file is not an error and is
//! reported through `ExportOutcome::Cancelled` instead.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error kinds raised by the capture/export core
#[derive(Debug)]
pub enum QInfraError {
    /// Catalog or programming bug (unknown service, malformed catalog entry)
    Configuration(String),
    /// A remote source reference failed to validate
    SourceUnavailable {
        /// Label of the layer that could not be loaded
        label: String,
    },
    /// Requested pixel dimensions exceed the hard ceiling
    ExportTooLarge {
        width: u32,
        height: u32,
        limit: u32,
    },
    /// The render collaborator failed or returned an unusable image
    RenderFailed(String),
    /// Writing the image or the world file failed
    WriteFailed {
        path: PathBuf,
        source: io::Error,
    },
    /// No project region has been captured yet
    NoRegion,
    /// The captured rectangle has zero area
    DegenerateRegion,
    /// No conversion is known between the two frames
    UnsupportedTransform {
        from: String,
        to: String,
    },
    /// I/O error outside of the export write step
    IoError(io::Error),
    /// Malformed user input (bounding box strings, world files, XML)
    InvalidInput(String),
}

impl fmt::Display for QInfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QInfraError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            QInfraError::SourceUnavailable { label } => write!(f, "Could not load {}", label),
            QInfraError::ExportTooLarge { width, height, limit } => write!(
                f,
                "Export too large: {} x {} px exceeds the limit of {} px per side",
                width, height, limit
            ),
            QInfraError::RenderFailed(msg) => write!(f, "Render failed: {}", msg),
            QInfraError::WriteFailed { path, source } => {
                write!(f, "Could not write {}: {}", path.display(), source)
            }
            QInfraError::NoRegion => write!(f, "No region defined. Draw a rectangle first."),
            QInfraError::DegenerateRegion => write!(f, "Region has zero area"),
            QInfraError::UnsupportedTransform { from, to } => {
                write!(f, "Unsupported coordinate transformation from {} to {}", from, to)
            }
            QInfraError::IoError(e) => write!(f, "I/O error: {}", e),
            QInfraError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for QInfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QInfraError::WriteFailed { source, .. } => Some(source),
            QInfraError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for QInfraError {
    fn from(error: io::Error) -> Self {
        QInfraError::IoError(error)
    }
}

impl From<image::ImageError> for QInfraError {
    fn from(error: image::ImageError) -> Self {
        QInfraError::RenderFailed(error.to_string())
    }
}

impl From<String> for QInfraError {
    fn from(msg: String) -> Self {
        QInfraError::InvalidInput(msg)
    }
}

/// Result type for capture and export operations
pub type QInfraResult<T> = Result<T, QInfraError>;
