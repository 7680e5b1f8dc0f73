//! Generator Session
//!
//! One generator view's lifecycle: created in the loading state, loaded once
//! from a source, then serving generate and describe requests until dropped.
//! While loading, requests produce nothing.

use crate::config::GeneratorConfig;

use super::catalog::GeneratorId;
use super::loader::load_name_data;
use super::lookup::get_name_description;
use super::sampler::NameSampler;
use super::source::NameDataSource;
use super::types::{Gender, GenerateOptions, NameData};

/// Load state of a session's dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready(NameData),
}

/// A single generator view over one dataset.
pub struct GeneratorSession {
    id: GeneratorId,
    state: LoadState,
    sampler: NameSampler,
    default_count: usize,
}

impl GeneratorSession {
    pub fn new(id: GeneratorId) -> Self {
        Self::with_sampler(id, NameSampler::new())
    }

    /// Create with an explicit sampler, e.g. a seeded one.
    pub fn with_sampler(id: GeneratorId, sampler: NameSampler) -> Self {
        Self {
            id,
            state: LoadState::Loading,
            sampler,
            default_count: GeneratorConfig::default().default_count,
        }
    }

    /// Create with the configured seed and batch size.
    pub fn from_config(id: GeneratorId, config: &GeneratorConfig) -> Self {
        let mut session = Self::with_sampler(id, NameSampler::from_seed_option(config.seed));
        session.default_count = config.default_count;
        session
    }

    pub fn id(&self) -> &GeneratorId {
        &self.id
    }

    /// Fetch the dataset. Load failures leave the session ready with the
    /// empty character dataset.
    pub async fn load<S>(&mut self, source: &S)
    where
        S: NameDataSource + ?Sized,
    {
        let data = load_name_data(source, &self.id.category, &self.id.generator).await;
        self.state = LoadState::Ready(data);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn data(&self) -> Option<&NameData> {
        match &self.state {
            LoadState::Ready(data) => Some(data),
            LoadState::Loading => None,
        }
    }

    /// Options a view starts with: male names for character datasets, the
    /// first pool for location datasets.
    pub fn default_options(&self) -> GenerateOptions {
        match self.data() {
            Some(NameData::Character(_)) => GenerateOptions::for_gender(Gender::Male),
            Some(NameData::Location(location)) => location
                .categories()
                .into_iter()
                .next()
                .map(GenerateOptions::for_category)
                .unwrap_or_default(),
            None => GenerateOptions::default(),
        }
    }

    /// Draw a batch of names. Empty while loading.
    pub fn generate(&mut self, options: &GenerateOptions, count: usize) -> Vec<String> {
        match &self.state {
            LoadState::Ready(data) => self.sampler.names(data, options, count),
            LoadState::Loading => Vec::new(),
        }
    }

    /// One generate action: the default options and the configured batch size.
    pub fn generate_default(&mut self) -> Vec<String> {
        let options = self.default_options();
        self.generate(&options, self.default_count)
    }

    /// Describe a generated name. `None` while loading or when unknown.
    pub fn describe(&self, name: &str) -> Option<String> {
        self.data().and_then(|data| get_name_description(data, name))
    }
}
