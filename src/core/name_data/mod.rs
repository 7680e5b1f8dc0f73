//! Name Datasets
//!
//! Loading, classification, sampling, and lookup for the pre-written name
//! lists behind each themed generator.
//!
//! # Caller-facing operations
//!
//! | Operation | Module |
//! |-----------|--------|
//! | [`load_name_data`] | `loader` |
//! | [`is_character_name_data`] / [`is_location_name_data`] | `types` |
//! | [`generate_character_names`] / [`generate_location_names`] / [`generate_names`] | `sampler` |
//! | [`get_name_description`] | `lookup` |
//!
//! [`GeneratorSession`] ties them together for one generator view, and
//! [`GeneratorCatalog`] lists the generators present in a dataset directory.

pub mod catalog;
pub mod errors;
pub mod loader;
pub mod lookup;
pub mod sampler;
pub mod session;
pub mod source;
pub mod types;

pub use catalog::{GeneratorCatalog, GeneratorId};
pub use errors::{NameDataError, Result};
pub use loader::{load_name_data, parse_dataset, try_load_name_data};
pub use lookup::{get_name_description, NO_DESCRIPTION};
pub use sampler::{generate_character_names, generate_location_names, generate_names, NameSampler};
pub use session::{GeneratorSession, LoadState};
pub use source::{resource_id, DataFormat, FileSource, MemorySource, NameDataSource, RawDataset};
pub use types::{
    is_character_name_data, is_location_name_data, CharacterNameData, Gender, GenerateOptions,
    LocationCategory, LocationNameData, NameData, NameEntry,
};
