//! Common test utilities and infrastructure
//!
//! Shared fixtures and helpers used across the catalog integration suites.

#![allow(dead_code)] // Not every suite uses every fixture

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::TestHelpers;
