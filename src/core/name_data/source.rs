//! Dataset Sources
//!
//! A [`NameDataSource`] hands back the raw text of the dataset addressed by a
//! `(category, generator)` pair. Parsing happens in the loader, so sources
//! only deal with locating and reading bytes.
//!
//! - [`FileSource`] reads `<root>/<category>/<generator>.{json,yaml,yml}`
//! - [`MemorySource`] serves datasets registered in memory
//!
//! CRITICAL: [`FileSource`] uses `tokio::fs` for all file I/O to avoid blocking
//! the async runtime.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::config::AppConfig;

use super::errors::{NameDataError, Result};
use super::types::NameData;

// ============================================================================
// Raw Datasets
// ============================================================================

/// Serialization format of a dataset document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// File extensions probed by [`FileSource`], in priority order.
    pub const EXTENSIONS: [&'static str; 3] = ["json", "yaml", "yml"];

    /// Detect the format from a file extension.
    ///
    /// Only the exact lowercase extensions [`FileSource`] probes are
    /// recognized, so `elf.JSON` is not a dataset.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Unparsed dataset text plus the format it is written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDataset {
    pub content: String,
    pub format: DataFormat,
}

impl RawDataset {
    pub fn json(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            format: DataFormat::Json,
        }
    }

    pub fn yaml(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            format: DataFormat::Yaml,
        }
    }
}

/// Identifier of a dataset: `<category>/<generator>`.
pub fn resource_id(category: &str, generator: &str) -> String {
    format!("{}/{}", category, generator)
}

// ============================================================================
// Source Trait
// ============================================================================

/// Somewhere datasets can be fetched from.
#[async_trait]
pub trait NameDataSource: Send + Sync {
    /// Fetch the raw dataset for `(category, generator)`.
    ///
    /// Returns [`NameDataError::NotFound`] when no such dataset exists.
    async fn fetch(&self, category: &str, generator: &str) -> Result<RawDataset>;
}

// ============================================================================
// File Source
// ============================================================================

/// Datasets stored as `<root>/<category>/<generator>.<ext>` files.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Source rooted at the configured dataset directory.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.data_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate paths for a dataset, in probe order.
    fn candidate_paths(&self, category: &str, generator: &str) -> Vec<PathBuf> {
        let dir = self.root.join(category);
        DataFormat::EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}.{}", generator, ext)))
            .collect()
    }
}

#[async_trait]
impl NameDataSource for FileSource {
    async fn fetch(&self, category: &str, generator: &str) -> Result<RawDataset> {
        validate_identifier(category)?;
        validate_identifier(generator)?;

        for path in self.candidate_paths(category, generator) {
            match fs::read_to_string(&path).await {
                Ok(content) => {
                    let format = DataFormat::from_path(&path).unwrap_or(DataFormat::Json);
                    log::debug!("Read name dataset from {}", path.display());
                    return Ok(RawDataset { content, format });
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(NameDataError::read_failed(path, e)),
            }
        }

        Err(NameDataError::not_found(resource_id(category, generator)))
    }
}

/// Reject identifiers that would address anything but a single path segment.
fn validate_identifier(identifier: &str) -> Result<()> {
    if identifier.trim().is_empty() {
        return Err(NameDataError::invalid_identifier(identifier, "identifier is empty"));
    }
    if identifier.contains(&['/', '\\'][..]) {
        return Err(NameDataError::invalid_identifier(
            identifier,
            "identifier contains a path separator",
        ));
    }
    if identifier == "." || identifier == ".." {
        return Err(NameDataError::invalid_identifier(
            identifier,
            "identifier is a relative path component",
        ));
    }
    Ok(())
}

// ============================================================================
// Memory Source
// ============================================================================

/// Datasets registered in memory, keyed by `(category, generator)`.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    datasets: HashMap<(String, String), RawDataset>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw dataset, replacing any previous one.
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        generator: impl Into<String>,
        dataset: RawDataset,
    ) {
        self.datasets
            .insert((category.into(), generator.into()), dataset);
    }

    /// Builder form of [`MemorySource::insert`].
    pub fn with_dataset(
        mut self,
        category: impl Into<String>,
        generator: impl Into<String>,
        dataset: RawDataset,
    ) -> Self {
        self.insert(category, generator, dataset);
        self
    }

    /// Register an already-built dataset by serializing it to JSON.
    pub fn insert_data(
        &mut self,
        category: impl Into<String>,
        generator: impl Into<String>,
        data: &NameData,
    ) -> std::result::Result<(), serde_json::Error> {
        let content = serde_json::to_string(data)?;
        self.insert(category, generator, RawDataset::json(content));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

#[async_trait]
impl NameDataSource for MemorySource {
    async fn fetch(&self, category: &str, generator: &str) -> Result<RawDataset> {
        self.datasets
            .get(&(category.to_string(), generator.to_string()))
            .cloned()
            .ok_or_else(|| NameDataError::not_found(resource_id(category, generator)))
    }
}

// ============================================================================
// Tests
// ============================================================================
