//! Integration tests for product creation through the public API

use catalog::{
    CREATOR_EMAIL, Catalog, CatalogError, FakerProductSource, MockIdGenerator, MockRandomProductSource,
    ProductDraft,
};
use serde_json::json;

mod common;
use common::{TestFixtures, TestHelpers};

#[test]
fn test_valid_drafts_get_generated_id() {
    for draft in TestFixtures::valid_drafts() {
        // Arrange
        let catalog = Catalog::new(TestHelpers::fixed_ids(1), MockRandomProductSource::new());

        // Act
        let product = catalog.create_product(draft.clone()).unwrap();

        // Assert
        assert_eq!(product.id(), 1);
        assert_eq!(product.name(), draft.name);
        assert_eq!(product.description(), draft.description);
        assert_eq!(product.price(), draft.price);
        assert_eq!(product.tags(), draft.tags.as_slice());
    }
}

#[test]
fn test_invalid_drafts_fail() {
    for draft in TestFixtures::invalid_drafts() {
        let catalog = Catalog::new(MockIdGenerator::new(), MockRandomProductSource::new());

        let result = catalog.create_product(draft.clone());
        assert!(
            matches!(result, Err(CatalogError::Validation { .. })),
            "draft {draft:?} should be rejected"
        );
    }
}

#[test]
fn test_created_product_serializes_with_id() {
    let catalog = Catalog::new(TestHelpers::fixed_ids(7), MockRandomProductSource::new());
    let product = catalog.create_product(TestFixtures::valid_drafts().remove(0)).unwrap();

    assert_eq!(
        serde_json::to_value(&product).unwrap(),
        json!({
            "id": 7,
            "name": "prod123",
            "description": "it is a good product for face",
            "price": 75.04,
            "tags": ["a"]
        })
    );
}

#[test]
fn test_product_json_is_validated_as_draft() {
    // Arrange: a serialized product with invalid content
    let body = json!({"id": 1, "name": "&%", "description": "12", "price": -15.34, "tags": []});
    let catalog = Catalog::new(MockIdGenerator::new(), MockRandomProductSource::new());

    // Act: the only way in is through a draft
    let draft: ProductDraft = serde_json::from_value(body).unwrap();
    let err = catalog.create_product(draft).unwrap_err();

    // Assert
    assert_eq!(err.to_string(), "invalid product");
    assert_eq!(err.violations().len(), 6);
}

#[test]
fn test_random_product_requires_creator() {
    let catalog = Catalog::new(MockIdGenerator::new(), FakerProductSource::new());

    for email in TestFixtures::NOT_CREATORS {
        let err = catalog.create_random_product(email).unwrap_err();
        assert_eq!(err.to_string(), "You are not allowed to create products");
    }

    let product = catalog.create_random_product(CREATOR_EMAIL).unwrap();
    let json = serde_json::to_value(&product).unwrap();
    assert!(json["id"].is_number());
    assert!(json["name"].is_string());
    assert!(json["description"].is_string());
    assert!(json["price"].is_number());
    assert!(json["tags"].is_array());
}
