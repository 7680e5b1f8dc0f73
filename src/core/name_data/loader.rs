//! Dataset loading.
//!
//! [`load_name_data`] never fails: any problem locating or parsing a dataset
//! is logged and replaced by the empty character dataset. Callers that need
//! the error use [`try_load_name_data`].
//!
//! The fallback is a character dataset even when the requested generator is
//! a location generator, so a failed location load classifies as character
//! data.

use tracing::instrument;

use super::errors::{NameDataError, Result};
use super::source::{resource_id, DataFormat, NameDataSource, RawDataset};
use super::types::NameData;

/// Load and parse the dataset for `(category, generator)`.
///
/// Every call fetches from the source again; nothing is cached.
#[instrument(level = "debug", skip(source))]
pub async fn try_load_name_data<S>(source: &S, category: &str, generator: &str) -> Result<NameData>
where
    S: NameDataSource + ?Sized,
{
    let raw = source.fetch(category, generator).await?;
    parse_dataset(&resource_id(category, generator), &raw)
}

/// Load the dataset for `(category, generator)`, falling back to an empty
/// character dataset on any failure.
pub async fn load_name_data<S>(source: &S, category: &str, generator: &str) -> NameData
where
    S: NameDataSource + ?Sized,
{
    match try_load_name_data(source, category, generator).await {
        Ok(data) => {
            log::debug!(
                "Loaded {} dataset {}",
                if data.is_character() { "character" } else { "location" },
                resource_id(category, generator)
            );
            data
        }
        Err(e) => {
            log::warn!("Error loading name data: {}", e);
            NameData::default()
        }
    }
}

/// Parse raw dataset text according to its format.
pub fn parse_dataset(resource: &str, raw: &RawDataset) -> Result<NameData> {
    match raw.format {
        DataFormat::Json => serde_json::from_str(&raw.content)
            .map_err(|e| NameDataError::parse_json(resource, e)),
        DataFormat::Yaml => serde_yaml_ng::from_str(&raw.content)
            .map_err(|e| NameDataError::parse_yaml(resource, e)),
    }
}
