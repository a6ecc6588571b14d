//! Infrastructure layer for storage backends.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL store
//! - [`memory`] - In-process store

pub mod memory;
pub mod persistence;
