//! Shared types for the product catalog toolkit
//!
//! Contains the wire types passed through from external services,
//! binary configuration, and the tracing setup used by every crate.

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::CatalogConfig;
pub use errors::*;
pub use types::*;
