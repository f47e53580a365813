//! Product draft validation

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::types::ProductDraft;

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_DESCRIPTION_LEN: usize = 3;

static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("alphanumeric pattern compiles"));
static HAS_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]").expect("letter pattern compiles"));

/// A single broken rule on a product draft
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductViolation {
    #[error("name must be at least {min} characters")]
    NameTooShort { min: usize },

    #[error("name must only contain letters and digits")]
    NameNotAlphanumeric,

    #[error("name must contain at least one letter")]
    NameWithoutLetter,

    #[error("description must be at least {min} characters")]
    DescriptionTooShort { min: usize },

    #[error("price must be a non-negative number")]
    InvalidPrice,

    #[error("at least one tag is required")]
    MissingTags,
}

/// Check every rule independently and report all violations
pub fn validate_product(draft: &ProductDraft) -> Result<(), Vec<ProductViolation>> {
    let mut violations = Vec::new();

    let name = draft.name.as_str();
    if name.chars().count() < MIN_NAME_LEN {
        violations.push(ProductViolation::NameTooShort { min: MIN_NAME_LEN });
    }
    if !name.is_empty() {
        if !ALPHANUMERIC.is_match(name) {
            violations.push(ProductViolation::NameNotAlphanumeric);
        }
        if !HAS_LETTER.is_match(name) {
            violations.push(ProductViolation::NameWithoutLetter);
        }
    }

    if draft.description.trim().chars().count() < MIN_DESCRIPTION_LEN {
        violations.push(ProductViolation::DescriptionTooShort { min: MIN_DESCRIPTION_LEN });
    }

    if !draft.price.is_finite() || draft.price < 0.0 {
        violations.push(ProductViolation::InvalidPrice);
    }

    if draft.tags.is_empty() {
        violations.push(ProductViolation::MissingTags);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
