//! Test fixtures and data for catalog tests

use catalog::ProductDraft;
use serde_json::{Value, json};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const PLANETS_PATH: &'static str = "/api/planets/";

    pub const NOT_CREATORS: &'static [&'static str] = &["bruce@wayne.com", "diana@themyscira.com"];

    /// First page of the planets listing as served upstream
    pub fn planets_page() -> Value {
        json!({
            "count": 50,
            "next": "http://swapi.dev/api/planets/?page=2",
            "previous": null,
            "results": [
                {
                    "name": "Tatooine",
                    "rotation_period": "23",
                    "orbital_period": "304",
                    "climate": "arid",
                    "terrain": "desert",
                    "population": "200000"
                },
                {
                    "name": "Alderaan",
                    "rotation_period": "24",
                    "orbital_period": "364",
                    "climate": "temperate",
                    "terrain": "grasslands, mountains",
                    "population": "2000000000"
                }
            ]
        })
    }

    pub fn valid_drafts() -> Vec<ProductDraft> {
        vec![
            Self::draft("prod123", "it is a good product for face", 75.04, &["a"]),
            Self::draft("p45", "product for bath", 23.40, &["bc"]),
            Self::draft("pro55", "product with natural products", 15.34, &["b"]),
        ]
    }

    pub fn invalid_drafts() -> Vec<ProductDraft> {
        vec![
            Self::draft(
                "p3",
                "it is a good product for face and can help to regenerate the skin",
                75.034,
                &["ab, bc"],
            ),
            Self::draft("3345", "pr", 23.40, &["arf"]),
            Self::draft("&%", "12", -15.34, &["b, c", "d5"]),
            Self::draft("23%", "1", -1.34, &["b, c", "d5"]),
        ]
    }

    pub fn draft(name: &str, description: &str, price: f64, tags: &[&str]) -> ProductDraft {
        ProductDraft::new(name, description, price, tags.iter().map(|t| t.to_string()).collect())
    }
}
