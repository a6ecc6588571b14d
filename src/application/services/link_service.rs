//! Link shortening and resolution service.

use std::sync::Arc;

use crate::domain::entities::{LinkRecord, NewLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::key_deriver::{KEY_LENGTH, RandomSource, ThreadRandom, derive_key, normalize};
use serde_json::json;
use tracing::{debug, info, warn};

/// Default number of candidate keys tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Service for creating and resolving short links.
///
/// Shortening is idempotent per combined URL. The first candidate key is
/// derived from the URL's hash, and random keys are used only after a collision.
pub struct LinkService {
    link_store: Arc<dyn LinkStore>,
    random: Arc<dyn RandomSource>,
    max_attempts: usize,
}

impl LinkService {
    /// Creates a service using the thread-local RNG and the default retry budget.
    pub fn new(link_store: Arc<dyn LinkStore>) -> Self {
        Self {
            link_store,
            random: Arc::new(ThreadRandom),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Replaces the source of fallback keys.
    pub fn with_random_source(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    /// Sets how many candidate keys are tried, including the derived one.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Shortens `long_url`, optionally joined with `custom_suffix`.
    ///
    /// # Algorithm
    ///
    /// 1. Reject empty input
    /// 2. Join URL and suffix into the combined URL
    /// 3. Return the existing record if the combined URL is already stored
    /// 4. Derive the hash-prefix candidate
    /// 5. Insert it, replacing taken candidates with random keys until one is free
    ///
    /// A taken candidate that already maps to the same combined URL is not a
    /// collision: that record is returned, so concurrent requests for one URL
    /// converge on a single record.
    ///
    /// A lost insert race ([`AppError::Conflict`] from the store) is handled
    /// here. If the winner stored the same combined URL, its record is
    /// returned. Otherwise a fresh random key is tried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is the empty string.
    /// Returns [`AppError::KeyspaceExhausted`] if no free key was found within
    /// the retry budget.
    /// Storage failures are propagated unchanged.
    pub async fn shorten(
        &self,
        long_url: &str,
        custom_suffix: Option<&str>,
    ) -> Result<LinkRecord, AppError> {
        if long_url.is_empty() {
            return Err(AppError::bad_request(
                "Long URL must not be empty",
                json!({ "field": "url" }),
            ));
        }

        let combined_url = normalize(long_url, custom_suffix);

        if let Some(existing) = self.link_store.find_by_long_url(&combined_url).await? {
            debug!(short_key = %existing.short_key, "Returning existing short link");
            return Ok(existing);
        }

        let mut candidate = derive_key(&combined_url);

        for attempt in 1..=self.max_attempts {
            if self.link_store.exists(&candidate).await? {
                if let Some(holder) = self.link_store.find_by_short_key(&candidate).await?
                    && holder.long_url == combined_url
                {
                    debug!(short_key = %holder.short_key, "Key already holds this URL");
                    return Ok(holder);
                }

                debug!(attempt, candidate = %candidate, "Short key collision");
            } else {
                match self
                    .link_store
                    .insert(NewLink::new(candidate.clone(), combined_url.clone()))
                    .await
                {
                    Ok(record) => {
                        info!(
                            short_key = %record.short_key,
                            attempts = attempt,
                            "Created short link"
                        );
                        return Ok(record);
                    }
                    Err(AppError::Conflict { .. }) => {
                        warn!(attempt, candidate = %candidate, "Short key taken during insert");

                        if let Some(existing) =
                            self.link_store.find_by_long_url(&combined_url).await?
                        {
                            return Ok(existing);
                        }
                    }
                    Err(e) => return Err(e),
                }
            }

            candidate = self.random.random_key(KEY_LENGTH);
        }

        Err(AppError::keyspace_exhausted(
            "Failed to find a free short key",
            json!({ "attempts": self.max_attempts }),
        ))
    }

    /// Resolves a short key to its combined URL.
    ///
    /// Returns `Ok(None)` for unknown keys.
    pub async fn resolve(&self, short_key: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .link_store
            .find_by_short_key(short_key)
            .await?
            .map(|record| record.long_url))
    }

    /// Retrieves a link by its short key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the key.
    pub async fn get_link_by_key(&self, short_key: &str) -> Result<LinkRecord, AppError> {
        self.link_store
            .find_by_short_key(short_key)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "short_key": short_key }))
            })
    }

    /// Total number of stored links.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.link_store.count().await
    }

    /// Returns `true` if the backing store is reachable.
    pub async fn health_check(&self) -> bool {
        self.link_store.health_check().await
    }

    /// Constructs the public short URL from a base URL and key.
    pub fn get_short_url(&self, base_url: &str, short_key: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), short_key)
    }
}
