//! Product factory and fake product generation with dependency injection

use tracing::debug;

use shared::logging::{log_rejection, log_success};

use crate::core::validation::validate_product;
use crate::error::{CatalogError, CatalogResult};
use crate::services::{FakerProductSource, RandomIdGenerator};
use crate::traits::{IdGenerator, RandomProductSource};
use crate::types::{Product, ProductDraft};

/// The only caller allowed to generate random products
pub const CREATOR_EMAIL: &str = "clark@kent.com";

/// Product creation entry point, generic over its id and fake-data sources
pub struct Catalog<I, S>
where
    I: IdGenerator,
    S: RandomProductSource,
{
    id_generator: I,
    product_source: S,
}

impl Catalog<RandomIdGenerator, FakerProductSource> {
    /// Catalog backed by the real random services
    pub fn with_defaults() -> Self {
        Self::new(RandomIdGenerator::new(), FakerProductSource::new())
    }
}

impl<I, S> Catalog<I, S>
where
    I: IdGenerator,
    S: RandomProductSource,
{
    pub fn new(id_generator: I, product_source: S) -> Self {
        Self {
            id_generator,
            product_source,
        }
    }

    /// Validate a draft and give it a freshly generated id
    pub fn create_product(&self, draft: ProductDraft) -> CatalogResult<Product> {
        if let Err(violations) = validate_product(&draft) {
            let error = CatalogError::Validation { violations };
            log_rejection("create_product", &DisplayViolations(error.violations()));
            return Err(error);
        }

        let product = Product::from_draft(self.id_generator.next_id(), draft);
        log_success("create_product", &format!("id {}", product.id()));
        Ok(product)
    }

    /// Build a product entirely from the fake-data source, without validation
    pub fn create_fake_product(&self) -> Product {
        let source = &self.product_source;
        let draft = ProductDraft {
            name: source.product_name(),
            description: source.product_description(),
            price: source.price(),
            tags: vec![source.product_material(), source.color()],
        };

        let product = Product::from_draft(source.id(), draft);
        debug!(id = product.id(), name = product.name(), "generated fake product");
        product
    }

    /// Generate a fake product on behalf of `caller_email`.
    ///
    /// Only [`CREATOR_EMAIL`] is allowed; the comparison is exact and
    /// case-sensitive.
    pub fn create_random_product(&self, caller_email: &str) -> CatalogResult<Product> {
        if caller_email != CREATOR_EMAIL {
            log_rejection("create_random_product", &format!("{caller_email} is not the creator"));
            return Err(CatalogError::Permission);
        }

        Ok(self.create_fake_product())
    }
}

struct DisplayViolations<'a>(&'a [crate::core::ProductViolation]);

impl std::fmt::Display for DisplayViolations<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, violation) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}
