//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation input
//! lives in a separate struct (`NewLink`) from the stored record (`LinkRecord`).

pub mod link;

pub use link::{LinkRecord, NewLink};
