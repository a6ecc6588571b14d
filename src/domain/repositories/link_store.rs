//! Storage contract for short links.

use crate::domain::entities::{LinkRecord, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Authoritative, uniqueness-enforcing storage for short links.
///
/// Implementations must make [`LinkStore::insert`] atomic with respect to the
/// short key: two concurrent inserts of the same key never both succeed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryLinkStore`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Finds the record stored for an exact combined URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] or [`AppError::Internal`] on
    /// storage failures.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<LinkRecord>, AppError>;

    /// Returns `true` if a record with this short key exists.
    async fn exists(&self, short_key: &str) -> Result<bool, AppError>;

    /// Creates a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short key is already taken. The
    /// check and the write happen as one atomic operation.
    async fn insert(&self, new_link: NewLink) -> Result<LinkRecord, AppError>;

    /// Finds a record by its short key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkRecord))` if found
    /// - `Ok(None)` if not found
    async fn find_by_short_key(&self, short_key: &str) -> Result<Option<LinkRecord>, AppError>;

    /// Counts all stored records.
    async fn count(&self) -> Result<i64, AppError>;

    /// Returns `true` if the backend is reachable.
    async fn health_check(&self) -> bool;
}
