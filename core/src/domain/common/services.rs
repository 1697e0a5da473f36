use std::sync::Arc;

use crate::domain::{
    allergen::registry::AllergenRegistry,
    common::ScanConfig,
    ingredient_check::classifier::IngredientClassifier,
    ingredient_index::keywords::{KeywordIndex, build_keyword_index},
    scan::{cache::ScanCache, ports::LLMClient},
};

/// Application service wiring the allergen registry and the model client together.
///
/// Domain services are implemented as traits on this type in their own modules.
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) registry: Arc<AllergenRegistry>,
    pub(crate) keyword_index: Arc<KeywordIndex>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) scan_cache: Arc<ScanCache>,
    pub(crate) scan_config: ScanConfig,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(registry: Arc<AllergenRegistry>, llm_client: LLM, scan_config: ScanConfig) -> Self {
        let keyword_index = Arc::new(build_keyword_index(&registry));
        let scan_cache = Arc::new(ScanCache::new(scan_config.cache_capacity));

        Self {
            registry,
            keyword_index,
            llm_client: Arc::new(llm_client),
            scan_cache,
            scan_config,
        }
    }

    pub fn registry(&self) -> &AllergenRegistry {
        &self.registry
    }

    pub fn scan_cache(&self) -> &ScanCache {
        &self.scan_cache
    }

    pub fn classifier(&self) -> IngredientClassifier<'_> {
        IngredientClassifier::new(&self.registry)
    }
}

impl<LLM> Clone for Service<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            keyword_index: Arc::clone(&self.keyword_index),
            llm_client: Arc::clone(&self.llm_client),
            scan_cache: Arc::clone(&self.scan_cache),
            scan_config: self.scan_config.clone(),
        }
    }
}
