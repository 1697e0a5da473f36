use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;
use utoipa::ToSchema;

use crate::domain::scan::{
    entities::ScanReport,
    value_objects::{LabelInput, OutputLanguage},
};

pub const DEFAULT_SCAN_CACHE_CAPACITY: usize = 50;

/// SHA-256 over the label content, the selected allergen ids and the output language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScanCacheKey(String);

impl ScanCacheKey {
    pub fn new(label: &LabelInput, allergen_ids: &[String], language: OutputLanguage) -> Self {
        let mut hasher = Sha256::new();

        match label {
            LabelInput::Image { data, mime_type } => {
                hasher.update(b"image\0");
                hasher.update(mime_type.as_bytes());
                hasher.update([0u8]);
                hasher.update(data);
            }
            LabelInput::Text(text) => {
                hasher.update(b"text\0");
                hasher.update(text.trim().as_bytes());
            }
        }

        for id in allergen_ids {
            hasher.update([0u8]);
            hasher.update(id.as_bytes());
        }
        hasher.update([0u8]);
        hasher.update(language.code().as_bytes());

        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanCacheStats {
    pub entries: usize,
    pub capacity: usize,
}

/// Bounded first-in, first-out store of model scan reports.
///
/// When full, inserting a new key evicts the oldest entry. Re-inserting a known key
/// replaces its report in place. A capacity of zero disables caching.
#[derive(Debug)]
pub struct ScanCache {
    capacity: usize,
    entries: Mutex<VecDeque<(ScanCacheKey, ScanReport)>>,
}

impl ScanCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub async fn get(&self, key: &ScanCacheKey) -> Option<ScanReport> {
        self.entries
            .lock()
            .await
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, report)| report.clone())
    }

    pub async fn insert(&self, key: ScanCacheKey, report: ScanReport) {
        if self.capacity == 0 {
            return;
        }

        let mut entries = self.entries.lock().await;

        if let Some((_, existing)) = entries.iter_mut().find(|(k, _)| *k == key) {
            *existing = report;
            return;
        }

        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back((key, report));
    }

    pub async fn stats(&self) -> ScanCacheStats {
        ScanCacheStats {
            entries: self.len().await,
            capacity: self.capacity,
        }
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl Default for ScanCache {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_CACHE_CAPACITY)
    }
}
