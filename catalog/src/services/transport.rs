//! HTTP transport implementation using reqwest

use async_trait::async_trait;
use serde_json::Value;

use crate::traits::{JsonTransport, TransportFailure};

/// Real JSON transport over a shared reqwest client.
///
/// No timeout is configured; callers needing a deadline wrap the call.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JsonTransport for ReqwestTransport {
    async fn get_json(&self, url: &str) -> Result<Value, TransportFailure> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportFailure::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportFailure::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportFailure::Decode(e.to_string()))
    }
}
