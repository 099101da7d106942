//! Source configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::builder::LineSourceBuilder;
use crate::error::{LineSourceError, Result};
use crate::source::LineSource;

/// Errors that can occur while loading a `SourceConfig` document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file extension does not name an enabled config format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[cfg(feature = "json")]
    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error("YAML config error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration for a single file-backed source.
///
/// ```yaml
/// path: corpus/train.txt
/// encoding: windows-1252
/// buffer_capacity: 131072
/// skip: 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    /// File to read
    pub path: PathBuf,
    /// Encoding label, "utf-8" when omitted
    #[serde(default = "default_encoding")]
    pub encoding: String,
    /// Read buffer size in bytes
    #[serde(default)]
    pub buffer_capacity: Option<usize>,
    /// Lines skipped once right after opening (e.g. a header). A rewind
    /// still goes back to the very first line.
    #[serde(default)]
    pub skip: u64,
}

fn default_encoding() -> String {
    LineSourceBuilder::DEFAULT_ENCODING.to_string()
}

impl SourceConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            encoding: default_encoding(),
            buffer_capacity: None,
            skip: 0,
        }
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = Some(capacity);
        self
    }

    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> std::result::Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> std::result::Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load a configuration file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            #[cfg(feature = "json")]
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// A builder carrying this configuration's encoding and capacity.
    pub fn builder(&self) -> LineSourceBuilder {
        let builder = LineSourceBuilder::new().with_encoding(self.encoding.clone());
        match self.buffer_capacity {
            Some(capacity) => builder.with_buffer_capacity(capacity),
            None => builder,
        }
    }

    /// Open the configured file and apply the initial skip.
    pub fn open(&self) -> Result<LineSource<'static>> {
        let skip = i64::try_from(self.skip).map_err(|_| {
            LineSourceError::InvalidArgument(format!("skip count {} is too large", self.skip))
        })?;
        let mut source = self.builder().open_path(&self.path)?;
        source.skip_line(skip)?;
        Ok(source)
    }
}
