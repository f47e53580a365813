//! Catalog trait definitions for dependency injection
//!
//! External collaborators (id generation, fake commerce data, HTTP) sit behind
//! these traits so tests can substitute deterministic mocks.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Why a transport could not produce a JSON body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("response body is not valid JSON: {0}")]
    Decode(String),
}

/// Numeric identifier generator used when creating products
#[mockall::automock]
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> u64;
}

/// Source of pseudo-random commerce data for fake products
#[mockall::automock]
pub trait RandomProductSource: Send + Sync {
    fn id(&self) -> u64;

    fn product_name(&self) -> String;

    fn product_description(&self) -> String;

    fn price(&self) -> f64;

    fn product_material(&self) -> String;

    fn color(&self) -> String;
}

/// Minimal HTTP transport returning parsed JSON bodies
#[mockall::automock]
#[async_trait]
pub trait JsonTransport: Send + Sync {
    /// GET `url` and parse the body as JSON
    async fn get_json(&self, url: &str) -> Result<Value, TransportFailure>;
}
