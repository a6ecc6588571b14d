//! Helper functions shared across layers.
//!
//! - [`key_deriver`] - URL normalization, hash-prefix keys and random fallback keys

pub mod key_deriver;
