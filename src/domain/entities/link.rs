//! Link entity representing a short key to long URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// `long_url` is the combined URL (long URL joined with the optional custom
/// suffix), exactly as it was hashed and stored. Records are immutable once
/// created.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct LinkRecord {
    pub id: i64,
    pub short_key: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl LinkRecord {
    /// Creates a new LinkRecord instance.
    pub fn new(id: i64, short_key: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_key,
            long_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub short_key: String,
    pub long_url: String,
}

impl NewLink {
    pub fn new(short_key: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            short_key: short_key.into(),
            long_url: long_url.into(),
        }
    }
}
