//! Random name sampling over loaded datasets.
//!
//! Every draw is uniform over the pool and made with replacement, so a batch
//! may repeat names. Requests that cannot be served (empty pool, options that
//! do not fit the dataset kind) yield an empty batch instead of an error.

use rand::prelude::*;
use rand::rngs::StdRng;

use super::types::{CharacterNameData, Gender, GenerateOptions, LocationCategory, LocationNameData, NameData};

/// Draw `count` full names (`"<first> <last>"`) from a character dataset.
///
/// Returns an empty vec when either the gender's first-name pool or the
/// last-name pool is empty, whatever `count` is.
pub fn generate_character_names(
    data: &CharacterNameData,
    gender: Gender,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<String> {
    let first_names = data.first_names(gender);
    if first_names.is_empty() || data.last_names.is_empty() {
        log::debug!(
            "No {} or last names available, generating nothing",
            gender
        );
        return Vec::new();
    }

    // Both pools are non-empty, so choose always yields an entry
    (0..count)
        .filter_map(|_| {
            let first = first_names.choose(rng)?;
            let last = data.last_names.choose(rng)?;
            Some(format!("{} {}", first.name, last.name))
        })
        .collect()
}

/// Draw `count` place names from one pool of a location dataset.
///
/// Returns an empty vec when the pool is absent or empty.
pub fn generate_location_names(
    data: &LocationNameData,
    category: &LocationCategory,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<String> {
    let pool = match data.pool(category) {
        Some(pool) if !pool.is_empty() => pool,
        _ => {
            log::debug!("Pool '{}' is missing or empty, generating nothing", category);
            return Vec::new();
        }
    };

    (0..count)
        .filter_map(|_| pool.choose(rng))
        .map(|entry| entry.name.clone())
        .collect()
}

/// Draw `count` names from a dataset of either kind.
///
/// Character datasets need `options.gender`, location datasets need
/// `options.name_type`. Any other combination yields an empty vec.
pub fn generate_names(
    data: &NameData,
    options: &GenerateOptions,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<String> {
    match (data, options) {
        (
            NameData::Character(character),
            GenerateOptions {
                gender: Some(gender),
                ..
            },
        ) => generate_character_names(character, *gender, count, rng),
        (
            NameData::Location(location),
            GenerateOptions {
                name_type: Some(category),
                ..
            },
        ) => generate_location_names(location, category, count, rng),
        _ => {
            log::debug!("Generate options {:?} do not apply to this dataset", options);
            Vec::new()
        }
    }
}

// ============================================================================
// Name Sampler
// ============================================================================

/// Owns a random source and draws batches from datasets.
pub struct NameSampler {
    rng: StdRng,
}

impl NameSampler {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, entropy-seeded otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map(Self::with_seed).unwrap_or_default()
    }

    pub fn character_names(
        &mut self,
        data: &CharacterNameData,
        gender: Gender,
        count: usize,
    ) -> Vec<String> {
        generate_character_names(data, gender, count, &mut self.rng)
    }

    pub fn location_names(
        &mut self,
        data: &LocationNameData,
        category: &LocationCategory,
        count: usize,
    ) -> Vec<String> {
        generate_location_names(data, category, count, &mut self.rng)
    }

    pub fn names(&mut self, data: &NameData, options: &GenerateOptions, count: usize) -> Vec<String> {
        generate_names(data, options, count, &mut self.rng)
    }
}

impl Default for NameSampler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
