//! Configuration for an extraction run

use crate::transform::OutputTransform;
use std::path::{Path, PathBuf};

/// Default extension of reconstructed room files
pub const DEFAULT_EXTENSION: &str = "LFL";

/// Configuration for an extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Transform applied to every written byte
    pub transform: OutputTransform,

    /// Directory the artifacts are written to
    pub output_dir: PathBuf,

    /// Artifact file extension
    pub extension: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            transform: OutputTransform::Plain,
            output_dir: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ExtractConfig {
    /// Create a configuration writing into `output_dir`
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Set the output transform
    #[must_use]
    pub const fn with_transform(mut self, transform: OutputTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn with_output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = path.as_ref().to_path_buf();
        self
    }

    /// Set the artifact extension
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// File name for a room's artifact (`NN.LFL`)
    pub fn artifact_name(&self, room: u8) -> String {
        format!("{room:02}.{}", self.extension)
    }
}
