//! Product catalog toolkit
//!
//! Small independent operations: value checks and sequence helpers, product
//! validation and creation, fake product generation behind a creator check,
//! and a client for the public Star Wars planets listing.

pub mod catalog_impl;
pub mod core;
pub mod error;
pub mod planets;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use catalog_impl::{CREATOR_EMAIL, Catalog};
pub use crate::core::*;
pub use error::{CatalogError, CatalogResult};
pub use planets::PlanetsClient;
pub use services::*;
pub use traits::*;
pub use types::*;
