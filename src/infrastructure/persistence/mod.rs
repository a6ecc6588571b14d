//! PostgreSQL store implementations.
//!
//! Concrete implementations of domain storage traits using SQLx runtime queries.
//! The schema lives in `migrations/` and is applied on startup.
//!
//! # Stores
//!
//! - [`PgLinkStore`] - Short link storage and retrieval

pub mod pg_link_store;

pub use pg_link_store::PgLinkStore;
