use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::scan::{cache::DEFAULT_SCAN_CACHE_CAPACITY, value_objects::OutputLanguage};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct AlphagoConfig {
    pub llm: LLMConfig,
    pub scan: ScanConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub request_timeout_secs: u64,
    /// Overrides the public Gemini endpoint, mostly for local proxies.
    pub base_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Total attempts against the model, first call included.
    pub max_attempts: u32,
    /// Base delay; attempt `n` waits `n * retry_delay_ms` before the next try.
    pub retry_delay_ms: u64,
    pub cross_check_enabled: bool,
    pub fallback_enabled: bool,
    pub default_language: OutputLanguage,
    /// Model reports kept for identical scans; zero disables the cache.
    pub cache_capacity: usize,
}

impl ScanConfig {
    /// Wait before the attempt following `attempt`, saturating on overflow.
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.retry_delay_ms.saturating_mul(u64::from(attempt)))
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            retry_delay_ms: 1000,
            cross_check_enabled: true,
            fallback_enabled: true,
            default_language: OutputLanguage::English,
            cache_capacity: DEFAULT_SCAN_CACHE_CAPACITY,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
