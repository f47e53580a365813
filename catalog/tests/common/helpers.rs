//! Helper utilities for catalog integration tests

use catalog::{MockIdGenerator, PlanetsClient, ReqwestTransport};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::TestFixtures;

pub struct TestHelpers;

impl TestHelpers {
    /// Id generator that always hands out `id`
    pub fn fixed_ids(id: u64) -> MockIdGenerator {
        let mut ids = MockIdGenerator::new();
        ids.expect_next_id().return_const(id);
        ids
    }

    /// Mock server answering GET on the planets path exactly `times` times
    pub async fn planets_server(response: ResponseTemplate, times: u64) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TestFixtures::PLANETS_PATH))
            .respond_with(response)
            .expect(times)
            .mount(&server)
            .await;
        server
    }

    /// Planets client pointed at a mock server
    pub fn client_for(server: &MockServer) -> PlanetsClient<ReqwestTransport> {
        PlanetsClient::with_url(
            ReqwestTransport::new(),
            format!("{}{}", server.uri(), TestFixtures::PLANETS_PATH),
        )
    }
}
