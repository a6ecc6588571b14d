//! HTTP layer translating requests into [`crate::application::services::LinkService`] calls.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - JSON API route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
