//! Name Dataset Data Models
//!
//! Defines the shapes a themed name dataset can take:
//! - Character datasets: gendered first-name pools plus a last-name pool
//! - Location datasets: any number of keyed place-name pools
//!
//! # Architecture
//!
//! ```text
//! NameData
//!   +-- Character(CharacterNameData)
//!   |     +-- male: Vec<NameEntry>
//!   |     +-- female: Vec<NameEntry>
//!   |     +-- last_names: Vec<NameEntry>   ("lastNames" on disk)
//!   +-- Location(LocationNameData)
//!         +-- pools: IndexMap<String, Vec<NameEntry>>
//!               ("cityNames", "districtNames", "landmarkNames", "regionNames", ...)
//! ```
//!
//! The variant is decided once, while deserializing: an object carrying all
//! of `male`, `female` and `lastNames` is a character dataset, anything else
//! is a location dataset.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Dataset Keys
// ============================================================================

/// Key of the male first-name pool.
pub const MALE_KEY: &str = "male";
/// Key of the female first-name pool.
pub const FEMALE_KEY: &str = "female";
/// Key of the last-name pool.
pub const LAST_NAMES_KEY: &str = "lastNames";

// ============================================================================
// Name Entry
// ============================================================================

/// A single pre-written name and its flavor text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    /// Display name
    pub name: String,

    /// Free-text description, possibly empty
    #[serde(default)]
    pub description: String,
}

impl NameEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Read a pool that may be written as `null` (a bare `key:` in YAML) as an
/// empty pool.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<NameEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<NameEntry>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Find the first entry in `pool` whose name equals `name`.
pub(crate) fn find_entry<'a>(pool: &'a [NameEntry], name: &str) -> Option<&'a NameEntry> {
    pool.iter().find(|entry| entry.name == name)
}

// ============================================================================
// Gender
// ============================================================================

/// Which first-name pool a character name is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => MALE_KEY,
            Self::Female => FEMALE_KEY,
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(format!("unknown gender '{}'", other)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Location Category
// ============================================================================

/// Pool key of a location dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocationCategory {
    City,
    District,
    Landmark,
    Region,
    /// Any other pool key, used verbatim
    Other(String),
}

impl LocationCategory {
    /// The dataset key this category reads from.
    pub fn key(&self) -> &str {
        match self {
            Self::City => "cityNames",
            Self::District => "districtNames",
            Self::Landmark => "landmarkNames",
            Self::Region => "regionNames",
            Self::Other(key) => key,
        }
    }

    /// Parse either the short form (`city`) or the pool key (`cityNames`).
    ///
    /// Unrecognized input becomes [`LocationCategory::Other`] so datasets
    /// with custom pools stay addressable.
    pub fn from_key(s: &str) -> Self {
        match s {
            "city" | "cityNames" => Self::City,
            "district" | "districtNames" => Self::District,
            "landmark" | "landmarkNames" => Self::Landmark,
            "region" | "regionNames" => Self::Region,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// Character Dataset
// ============================================================================

/// First-name/last-name generator data for personal names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterNameData {
    #[serde(deserialize_with = "null_as_empty")]
    pub male: Vec<NameEntry>,
    #[serde(deserialize_with = "null_as_empty")]
    pub female: Vec<NameEntry>,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_names: Vec<NameEntry>,
}

impl CharacterNameData {
    pub fn new(male: Vec<NameEntry>, female: Vec<NameEntry>, last_names: Vec<NameEntry>) -> Self {
        Self {
            male,
            female,
            last_names,
        }
    }

    /// First-name pool for a gender.
    pub fn first_names(&self, gender: Gender) -> &[NameEntry] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Male then female first names, in pool order.
    pub fn all_first_names(&self) -> impl Iterator<Item = &NameEntry> {
        self.male.iter().chain(self.female.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.male.is_empty() && self.female.is_empty() && self.last_names.is_empty()
    }
}

// ============================================================================
// Location Dataset
// ============================================================================

/// Place-name generator data, one pool per category key.
///
/// Pools keep the order they appear in the source document. A pool declared
/// without a value is kept as an empty pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocationNameData {
    pools: IndexMap<String, Vec<NameEntry>>,
}

impl LocationNameData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a pool.
    pub fn with_pool(mut self, category: LocationCategory, entries: Vec<NameEntry>) -> Self {
        self.pools.insert(category.key().to_string(), entries);
        self
    }

    /// Entries of a pool, if the dataset defines it.
    pub fn pool(&self, category: &LocationCategory) -> Option<&[NameEntry]> {
        self.pools.get(category.key()).map(Vec::as_slice)
    }

    /// All pools as `(key, entries)` in document order.
    pub fn pools(&self) -> impl Iterator<Item = (&str, &[NameEntry])> {
        self.pools
            .iter()
            .map(|(key, entries)| (key.as_str(), entries.as_slice()))
    }

    /// Categories of every defined pool, in document order.
    pub fn categories(&self) -> Vec<LocationCategory> {
        self.pools.keys().map(|k| LocationCategory::from_key(k)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.values().all(Vec::is_empty)
    }
}

impl<'de> Deserialize<'de> for LocationNameData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Option<Vec<NameEntry>>>::deserialize(deserializer)?;
        let pools = raw
            .into_iter()
            .map(|(key, entries)| (key, entries.unwrap_or_default()))
            .collect();
        Ok(Self { pools })
    }
}

// ============================================================================
// Name Data
// ============================================================================

/// A loaded dataset of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NameData {
    Character(CharacterNameData),
    Location(LocationNameData),
}

impl NameData {
    /// Classify and deserialize an untyped JSON value.
    ///
    /// An object with all of `male`, `female` and `lastNames` is a character
    /// dataset; every other value is parsed as a location dataset.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        if has_character_shape(&value) {
            serde_json::from_value(value).map(Self::Character)
        } else {
            serde_json::from_value(value).map(Self::Location)
        }
    }

    pub fn is_character(&self) -> bool {
        matches!(self, Self::Character(_))
    }

    pub fn is_location(&self) -> bool {
        !self.is_character()
    }

    pub fn as_character(&self) -> Option<&CharacterNameData> {
        match self {
            Self::Character(data) => Some(data),
            Self::Location(_) => None,
        }
    }

    pub fn as_location(&self) -> Option<&LocationNameData> {
        match self {
            Self::Location(data) => Some(data),
            Self::Character(_) => None,
        }
    }
}

/// The empty character dataset, which is also the loader fallback.
impl Default for NameData {
    fn default() -> Self {
        Self::Character(CharacterNameData::default())
    }
}

impl From<CharacterNameData> for NameData {
    fn from(data: CharacterNameData) -> Self {
        Self::Character(data)
    }
}

impl From<LocationNameData> for NameData {
    fn from(data: LocationNameData) -> Self {
        Self::Location(data)
    }
}

impl<'de> Deserialize<'de> for NameData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

/// Structural test on raw data: does it carry every character pool key?
pub fn has_character_shape(value: &serde_json::Value) -> bool {
    value.as_object().is_some_and(|obj| {
        [MALE_KEY, FEMALE_KEY, LAST_NAMES_KEY]
            .iter()
            .all(|key| obj.contains_key(*key))
    })
}

/// Whether `data` is a character dataset.
pub fn is_character_name_data(data: &NameData) -> bool {
    data.is_character()
}

/// Whether `data` is a location dataset.
pub fn is_location_name_data(data: &NameData) -> bool {
    !is_character_name_data(data)
}

// ============================================================================
// Generation Options
// ============================================================================

/// What to generate from a dataset of unknown kind.
///
/// Character datasets read `gender`; location datasets read `name_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub gender: Option<Gender>,
    pub name_type: Option<LocationCategory>,
}

impl GenerateOptions {
    pub fn for_gender(gender: Gender) -> Self {
        Self {
            gender: Some(gender),
            name_type: None,
        }
    }

    pub fn for_category(category: LocationCategory) -> Self {
        Self {
            gender: None,
            name_type: Some(category),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
