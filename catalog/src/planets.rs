//! Star Wars planets API client

use tracing::{debug, warn};

use shared::PlanetPage;
use shared::config::DEFAULT_PLANETS_URL;
use shared::logging::format_timestamp;

use crate::error::{CatalogError, CatalogResult};
use crate::services::ReqwestTransport;
use crate::traits::JsonTransport;

/// Fetches the planets listing through an injected transport
pub struct PlanetsClient<T: JsonTransport> {
    transport: T,
    url: String,
}

impl PlanetsClient<ReqwestTransport> {
    /// Client for the public endpoint over a fresh reqwest transport
    pub fn with_defaults() -> Self {
        Self::new(ReqwestTransport::new())
    }
}

impl<T: JsonTransport> PlanetsClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_url(transport, DEFAULT_PLANETS_URL)
    }

    pub fn with_url(transport: T, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One GET against the planets endpoint; no timeout and no retry.
    ///
    /// Every failure, whether transport, status or body shape, surfaces as
    /// `CatalogError::Network`. The cause is only logged.
    pub async fn get_star_wars_planets(&self) -> CatalogResult<PlanetPage> {
        let body = self.transport.get_json(&self.url).await.map_err(|failure| {
            warn!(
                url = %self.url,
                timestamp = format_timestamp(),
                cause = %failure,
                "planets request failed"
            );
            CatalogError::Network
        })?;

        let page = PlanetPage::from_value(body).map_err(|err| {
            warn!(
                url = %self.url,
                timestamp = format_timestamp(),
                cause = %err,
                "planets response has unexpected shape"
            );
            CatalogError::Network
        })?;

        debug!(count = page.count, results = page.results.len(), "fetched planets page");
        Ok(page)
    }
}
