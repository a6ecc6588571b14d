//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkStore`] - Short link persistence and lookup
//!
//! # Testing
//!
//! See integration tests in `tests/store_*.rs` for usage examples.

pub mod link_store;

pub use link_store::LinkStore;

#[cfg(test)]
pub use link_store::MockLinkStore;
