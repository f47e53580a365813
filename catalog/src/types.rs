//! Catalog data types

use serde::{Deserialize, Serialize};

/// Candidate product submitted for creation (no id yet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        tags: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            tags,
        }
    }
}

/// A created product.
///
/// Fields are read-only once constructed. Products are only built by the
/// catalog operations, so there is no `Deserialize`: JSON input is read as a
/// `ProductDraft` and goes through `create_product`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: u64,
    name: String,
    description: String,
    price: f64,
    tags: Vec<String>,
}

impl Product {
    pub(crate) fn from_draft(id: u64, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            tags: draft.tags,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Same product without its id
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            tags: self.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_serializes_flat() {
        let draft = ProductDraft::new("prod123", "it is a good product for face", 75.04, vec!["a".to_string()]);
        let product = Product::from_draft(1, draft.clone());

        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({
                "id": 1,
                "name": "prod123",
                "description": "it is a good product for face",
                "price": 75.04,
                "tags": ["a"]
            })
        );
        assert_eq!(product.to_draft(), draft);
    }

    #[test]
    fn test_draft_tags_default_to_empty() {
        let draft: ProductDraft =
            serde_json::from_value(json!({"name": "p45", "description": "product for bath", "price": 23.4}))
                .unwrap();
        assert!(draft.tags.is_empty());
    }
}
