#![allow(dead_code)]

use async_trait::async_trait;
use link_shortener::application::services::LinkService;
use link_shortener::domain::entities::{LinkRecord, NewLink};
use link_shortener::domain::repositories::LinkStore;
use link_shortener::error::AppError;
use link_shortener::infrastructure::memory::MemoryLinkStore;
use link_shortener::state::AppState;
use link_shortener::utils::key_deriver::RandomSource;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "http://localhost:3000/short";

/// Random source that hands out a fixed list of keys, then repeats the last one.
pub struct ScriptedRandom(Mutex<VecDeque<String>>);

impl ScriptedRandom {
    pub fn new(keys: &[&str]) -> Arc<Self> {
        Arc::new(Self(Mutex::new(
            keys.iter().map(|k| k.to_string()).collect(),
        )))
    }
}

impl RandomSource for ScriptedRandom {
    fn random_key(&self, _length: usize) -> String {
        let mut keys = self.0.lock().unwrap();
        if keys.len() > 1 {
            keys.pop_front().unwrap()
        } else {
            keys.front().cloned().unwrap()
        }
    }
}

/// Store whose backend is always unreachable.
pub struct UnavailableStore;

#[async_trait]
impl LinkStore for UnavailableStore {
    async fn find_by_long_url(&self, _long_url: &str) -> Result<Option<LinkRecord>, AppError> {
        Err(unavailable())
    }

    async fn exists(&self, _short_key: &str) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn insert(&self, _link: NewLink) -> Result<LinkRecord, AppError> {
        Err(unavailable())
    }

    async fn find_by_short_key(&self, _short_key: &str) -> Result<Option<LinkRecord>, AppError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Store whose first URL lookup misses, as if another writer committed just after it.
pub struct StaleUrlLookup {
    inner: Arc<MemoryLinkStore>,
    stale: AtomicBool,
}

impl StaleUrlLookup {
    pub fn new(inner: Arc<MemoryLinkStore>) -> Self {
        Self {
            inner,
            stale: AtomicBool::new(true),
        }
    }
}

#[async_trait]
impl LinkStore for StaleUrlLookup {
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<LinkRecord>, AppError> {
        if self.stale.swap(false, Ordering::SeqCst) {
            return Ok(None);
        }
        self.inner.find_by_long_url(long_url).await
    }

    async fn exists(&self, short_key: &str) -> Result<bool, AppError> {
        self.inner.exists(short_key).await
    }

    async fn insert(&self, link: NewLink) -> Result<LinkRecord, AppError> {
        self.inner.insert(link).await
    }

    async fn find_by_short_key(&self, short_key: &str) -> Result<Option<LinkRecord>, AppError> {
        self.inner.find_by_short_key(short_key).await
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.inner.count().await
    }

    async fn health_check(&self) -> bool {
        self.inner.health_check().await
    }
}

fn unavailable() -> AppError {
    AppError::storage_unavailable("Storage unavailable", json!({ "reason": "test" }))
}

pub fn create_test_state() -> AppState {
    create_state_with_store(Arc::new(MemoryLinkStore::new()))
}

pub fn create_state_with_store(store: Arc<dyn LinkStore>) -> AppState {
    let link_service = Arc::new(LinkService::new(store));
    AppState::new(link_service, BASE_URL)
}

pub fn create_test_service() -> (LinkService, Arc<MemoryLinkStore>) {
    let store = Arc::new(MemoryLinkStore::new());
    (LinkService::new(store.clone()), store)
}

pub fn create_scripted_service(keys: &[&str]) -> (LinkService, Arc<MemoryLinkStore>) {
    let store = Arc::new(MemoryLinkStore::new());
    let service = LinkService::new(store.clone()).with_random_source(ScriptedRandom::new(keys));
    (service, store)
}
