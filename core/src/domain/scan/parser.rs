use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{common::entities::app_errors::CoreError, scan::entities::ScanAnalysis};

static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid json object regex"));

/// Pulls the outermost `{...}` out of a model reply and validates it.
///
/// Models sometimes wrap the object in prose or code fences; everything between the
/// first `{` and the last `}` is kept. Without braces the trimmed reply is parsed as is.
pub fn parse_scan_analysis(raw: &str) -> Result<ScanAnalysis, CoreError> {
    let trimmed = raw.trim();
    let candidate = JSON_OBJECT
        .find(trimmed)
        .map(|m| m.as_str())
        .unwrap_or(trimmed);

    serde_json::from_str(candidate).map_err(|e| {
        tracing::error!("Failed to parse model response: {}", e);
        CoreError::MalformedResponse(e.to_string())
    })
}
