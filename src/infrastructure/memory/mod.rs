//! In-process link store backed by `DashMap`.
//!
//! Used when `STORAGE_BACKEND=memory` and by the integration tests. Data lives
//! for the lifetime of the process.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{LinkRecord, NewLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Concurrent in-memory link store.
///
/// `by_key` is the source of truth; `by_url` indexes the first key stored for
/// each combined URL. Lock order is always `by_key` then `by_url`, and readers
/// never hold both guards at once.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    by_key: DashMap<String, LinkRecord>,
    by_url: DashMap<String, String>,
    next_id: AtomicI64,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<LinkRecord>, AppError> {
        let Some(short_key) = self.by_url.get(long_url).map(|k| k.value().clone()) else {
            return Ok(None);
        };

        Ok(self.by_key.get(&short_key).map(|r| r.value().clone()))
    }

    async fn exists(&self, short_key: &str) -> Result<bool, AppError> {
        Ok(self.by_key.contains_key(short_key))
    }

    async fn insert(&self, new_link: NewLink) -> Result<LinkRecord, AppError> {
        match self.by_key.entry(new_link.short_key) {
            Entry::Occupied(occupied) => Err(AppError::conflict(
                "Short key already exists",
                json!({ "short_key": occupied.key() }),
            )),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                let record =
                    LinkRecord::new(id, slot.key().clone(), new_link.long_url, Utc::now());

                self.by_url
                    .entry(record.long_url.clone())
                    .or_insert_with(|| record.short_key.clone());
                slot.insert(record.clone());

                Ok(record)
            }
        }
    }

    async fn find_by_short_key(&self, short_key: &str) -> Result<Option<LinkRecord>, AppError> {
        Ok(self.by_key.get(short_key).map(|r| r.value().clone()))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.by_key.len() as i64)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
