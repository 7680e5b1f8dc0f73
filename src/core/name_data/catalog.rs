//! Generator Catalog Discovery
//!
//! Lists the generators available under a dataset root laid out as
//! `<root>/<category>/<generator>.<ext>`. Each entry can be loaded through a
//! [`FileSource`](super::source::FileSource) rooted at the same directory.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;

use super::errors::{NameDataError, Result};
use super::source::DataFormat;

/// Address of one generator's dataset.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GeneratorId {
    pub category: String,
    pub generator: String,
}

impl GeneratorId {
    pub fn new(category: impl Into<String>, generator: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            generator: generator.into(),
        }
    }
}

impl fmt::Display for GeneratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.generator)
    }
}

/// Sorted set of generators found under a dataset root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorCatalog {
    root: PathBuf,
    generators: BTreeSet<GeneratorId>,
}

impl GeneratorCatalog {
    /// Scan `root` for datasets.
    ///
    /// A missing root gives an empty catalog. A generator present in several
    /// formats is listed once.
    pub async fn scan(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut catalog = Self {
            root: root.to_path_buf(),
            generators: BTreeSet::new(),
        };

        // Use async metadata check instead of blocking exists()/is_dir()
        match fs::metadata(root).await {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("Dataset directory not found: {}", root.display());
                return Ok(catalog);
            }
            Err(e) => return Err(NameDataError::scan_failed(root, e)),
            Ok(meta) if !meta.is_dir() => {
                return Err(NameDataError::scan_failed(
                    root,
                    std::io::Error::new(std::io::ErrorKind::NotADirectory, "Not a directory"),
                ));
            }
            Ok(_) => {}
        }

        let mut categories = fs::read_dir(root)
            .await
            .map_err(|e| NameDataError::scan_failed(root, e))?;

        while let Some(entry) = categories
            .next_entry()
            .await
            .map_err(|e| NameDataError::scan_failed(root, e))?
        {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| NameDataError::scan_failed(&path, e))?;
            if !file_type.is_dir() {
                continue;
            }
            if let Some(category) = file_name(&path) {
                scan_category(&path, &category, &mut catalog.generators).await?;
            }
        }

        log::debug!(
            "Found {} generators in {}",
            catalog.generators.len(),
            root.display()
        );

        Ok(catalog)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All generators, sorted by category then generator.
    pub fn generators(&self) -> impl Iterator<Item = &GeneratorId> {
        self.generators.iter()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self
            .generators
            .iter()
            .map(|id| id.category.as_str())
            .collect();
        categories.dedup();
        categories
    }

    /// Generators within one category, sorted.
    pub fn generators_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.generators
            .iter()
            .filter(move |id| id.category == category)
            .map(|id| id.generator.as_str())
    }

    pub fn contains(&self, category: &str, generator: &str) -> bool {
        self.generators.contains(&GeneratorId::new(category, generator))
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

async fn scan_category(dir: &Path, category: &str, found: &mut BTreeSet<GeneratorId>) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| NameDataError::scan_failed(dir, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| NameDataError::scan_failed(dir, e))?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| NameDataError::scan_failed(&path, e))?;

        if !file_type.is_file() || DataFormat::from_path(&path).is_none() {
            continue;
        }
        if let Some(generator) = path.file_stem().and_then(|s| s.to_str()) {
            found.insert(GeneratorId::new(category, generator));
        }
    }

    Ok(())
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
