use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    scan::{cache::ScanCacheStats, entities::ScanReport, value_objects::AnalyzeLabelInput},
};

/// Multimodal model able to answer with JSON following a schema.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ScanService: Send + Sync {
    /// Reads a label through the model, checks the answer against the registry and
    /// builds the report shown to the user.
    fn analyze_label(
        &self,
        input: AnalyzeLabelInput,
    ) -> impl Future<Output = Result<ScanReport, CoreError>> + Send;

    fn scan_cache_stats(&self) -> impl Future<Output = ScanCacheStats> + Send;

    /// Drops every cached report; the next scan of any label calls the model again.
    fn clear_scan_cache(&self) -> impl Future<Output = ()> + Send;
}
