use std::{sync::Arc, time::Duration};

use crate::{
    domain::{
        allergen::registry::AllergenRegistry,
        common::{AlphagoConfig, services::Service},
    },
    infrastructure::llm::GeminiLLMClient,
};

pub type AlphagoService = Service<GeminiLLMClient>;

pub fn create_service(config: AlphagoConfig) -> Result<AlphagoService, anyhow::Error> {
    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
        Duration::from_secs(config.llm.request_timeout_secs),
    )?;
    let llm_client = match config.llm.base_url {
        Some(base_url) => llm_client.with_base_url(base_url),
        None => llm_client,
    };

    let registry = Arc::new(AllergenRegistry::builtin()?);
    tracing::info!(allergens = registry.len(), "allergen registry loaded");

    Ok(Service::new(registry, llm_client, config.scan))
}
