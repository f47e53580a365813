//! Pure utility functions

use std::collections::HashSet;
use std::hash::Hash;

use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};

/// Returned by [`to_lower_case`] when there is nothing to convert
pub const MISSING_STRING_MESSAGE: &str = "Please provide a string";

/// Message of the error raised by [`remove_duplicates`] on missing input
pub const MISSING_SEQUENCE_MESSAGE: &str = "please provide an array of numbers or strings";

/// True only for a JSON number holding a whole value (`8`, `-3`, `8.0`)
pub fn is_integer(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(number)) => {
            number.is_i64()
                || number.is_u64()
                || number
                    .as_f64()
                    .is_some_and(|n| n.is_finite() && n.fract() == 0.0)
        }
        _ => false,
    }
}

/// Lowercase a non-empty string, or return [`MISSING_STRING_MESSAGE`]
pub fn to_lower_case(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_lowercase(),
        _ => MISSING_STRING_MESSAGE.to_string(),
    }
}

/// Keep the first occurrence of every distinct element, in original order
pub fn remove_duplicates<T>(items: Option<&[T]>) -> CatalogResult<Vec<T>>
where
    T: Eq + Hash + Clone,
{
    let items = items.ok_or_else(|| CatalogError::invalid_argument(MISSING_SEQUENCE_MESSAGE))?;

    let mut seen = HashSet::with_capacity(items.len());
    Ok(items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect())
}
